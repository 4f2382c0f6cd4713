/// Bulleted list item block type.
///
/// Owns the bullet markers and the indentation rules for nesting.
pub struct ListItem;

impl ListItem {
    /// Characters accepted as bullet markers.
    pub const MARKERS: [char; 2] = ['-', '*'];

    /// Leading whitespace characters per nesting level.
    pub const INDENT_WIDTH: usize = 2;

    /// Rendered indent per nesting level, in points.
    pub const INDENT_UNIT_PT: u32 = 18;

    /// Strips a leading bullet marker and the whitespace after it.
    ///
    /// Returns `None` unless the marker is followed by whitespace, so
    /// `**bold**` and `-5` are not list items.
    pub fn strip_marker(content: &str) -> Option<&str> {
        let rest = content.strip_prefix(Self::MARKERS)?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(rest.trim_start())
    }

    /// Nesting level for a leading whitespace run of `indent_width` characters.
    pub fn nesting_level(indent_width: usize) -> usize {
        indent_width / Self::INDENT_WIDTH
    }

    /// Rendered indent for a nesting level, saturating instead of overflowing.
    pub fn indent_start(nesting_level: usize) -> u32 {
        u32::try_from(nesting_level)
            .unwrap_or(u32::MAX)
            .saturating_mul(Self::INDENT_UNIT_PT)
    }
}
