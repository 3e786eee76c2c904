//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Apart from `NoVictim`, every variant is an invalid-input condition: it is
/// reported before any simulation state is built, so a failed call never
/// yields a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The frame set must hold at least one page.
    #[error("frame capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// The policy identifier is not one of `fifo`, `lru`, `optimal`, `heuristic`.
    #[error("unknown replacement policy: {0:?}")]
    UnknownPolicy(String),

    /// Trace input contained no references at all.
    #[error("reference trace is empty")]
    EmptyTrace,

    /// A trace token could not be read as a page number.
    #[error("invalid page reference {token:?} at position {position}")]
    InvalidReference { position: usize, token: String },

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A replacer returned no victim, or an empty slot, for a full frame set.
    ///
    /// This indicates a bug in a replacer; no shipped policy produces it.
    #[error("replacer chose no resident victim at step {step}")]
    NoVictim { step: usize },
}

impl Error {
    /// Whether the error stems from caller-supplied input.
    ///
    /// Callers can branch on the category rather than on variants.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidCapacity(_)
                | Error::UnknownPolicy(_)
                | Error::EmptyTrace
                | Error::InvalidReference { .. }
                | Error::InvalidConfig(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(format!("{}", err), "frame capacity must be at least 1, got 0");

        let err = Error::UnknownPolicy("mru".to_string());
        assert_eq!(format!("{}", err), "unknown replacement policy: \"mru\"");

        let err = Error::InvalidReference {
            position: 2,
            token: "x".to_string(),
        };
        assert_eq!(format!("{}", err), "invalid page reference \"x\" at position 2");
    }

    #[test]
    fn test_invalid_input_category() {
        assert!(Error::InvalidCapacity(0).is_invalid_input());
        assert!(Error::EmptyTrace.is_invalid_input());
        assert!(Error::InvalidConfig("w".into()).is_invalid_input());
        assert!(!Error::NoVictim { step: 3 }.is_invalid_input());
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
