//! Reference-trace input helpers.
//!
//! The engine accepts any sequence of comparable values. These helpers
//! produce [`PageId`] sequences from the forms a front end usually has at
//! hand: typed text, a named preset, or a random draw.

use rand::Rng;

use crate::common::{Error, PageId, RandomTraceConfig, Result};

/// Preset traces with well-known behaviour.
///
/// | name       | shape                                              |
/// |------------|----------------------------------------------------|
/// | mixed      | Belady's anomaly trace                             |
/// | sequential | a loop one page larger than small frame sets       |
/// | locality   | tight working sets that shift once                 |
/// | textbook   | the classic 20-reference OS textbook trace         |
pub const PRESETS: [(&str, &[u32]); 4] = [
    ("mixed", &[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]),
    ("sequential", &[1, 2, 3, 4, 5, 1, 2, 3, 4, 5]),
    ("locality", &[1, 2, 1, 2, 1, 2, 3, 4, 3, 4]),
    (
        "textbook",
        &[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1],
    ),
];

/// Parse a comma-separated list of page numbers.
///
/// Whitespace around each number is ignored.
///
/// # Errors
/// - `Error::EmptyTrace` if the input is blank
/// - `Error::InvalidReference` for the first token that is not a page number,
///   including an empty token between two commas
///
/// # Example
/// ```
/// use pagesim::trace::parse_sequence;
/// use pagesim::PageId;
///
/// let trace = parse_sequence("1, 2,3").unwrap();
/// assert_eq!(trace, vec![PageId::new(1), PageId::new(2), PageId::new(3)]);
/// assert!(parse_sequence("1,,3").is_err());
/// ```
pub fn parse_sequence(input: &str) -> Result<Vec<PageId>> {
    if input.trim().is_empty() {
        return Err(Error::EmptyTrace);
    }

    input
        .split(',')
        .enumerate()
        .map(|(position, token)| {
            token.parse::<PageId>().map_err(|_| Error::InvalidReference {
                position,
                token: token.trim().to_string(),
            })
        })
        .collect()
}

/// Render a trace the way [`parse_sequence`] reads it.
pub fn format_sequence(sequence: &[PageId]) -> String {
    sequence
        .iter()
        .map(PageId::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// The preset named `name`, if there is one.
pub fn preset(name: &str) -> Option<Vec<PageId>> {
    PRESETS
        .iter()
        .find(|(preset_name, _)| preset_name.eq_ignore_ascii_case(name.trim()))
        .map(|(_, pages)| pages.iter().copied().map(PageId::new).collect())
}

/// Draw a random trace within `config`'s bounds.
///
/// Pass a seeded RNG for a reproducible trace.
///
/// # Errors
/// - `Error::InvalidConfig` if the bounds are inconsistent
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, config: &RandomTraceConfig) -> Result<Vec<PageId>> {
    config.validate()?;

    let len = rng.gen_range(config.min_len..=config.max_len);
    Ok((0..len)
        .map(|_| PageId::new(rng.gen_range(1..=config.max_page)))
        .collect())
}
