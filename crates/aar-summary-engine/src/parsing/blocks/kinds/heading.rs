/// Heading block type with owned marker constant.
///
/// All `#`-heading syntax knowledge lives here, not in the classifier.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Deepest rendered heading level; deeper `#` runs saturate here.
    pub const MAX_LEVEL: u8 = 4;

    /// Splits trimmed content like `## Title` into `(level, text)`.
    ///
    /// Requires a run of one or more `#` followed by a whitespace character.
    /// The text is everything after that one whitespace character.
    pub fn parse(content: &str) -> Option<(u8, &str)> {
        let rest = content.trim_start_matches(Self::MARKER);
        let hashes = content.len() - rest.len();
        if hashes == 0 {
            return None;
        }
        let separator = rest.chars().next().filter(|c| c.is_whitespace())?;
        Some((Self::level(hashes), &rest[separator.len_utf8()..]))
    }

    /// Heading level for a run of `hashes` markers, clamped to `1..=MAX_LEVEL`.
    pub fn level(hashes: usize) -> u8 {
        hashes.clamp(1, Self::MAX_LEVEL as usize) as u8
    }
}
