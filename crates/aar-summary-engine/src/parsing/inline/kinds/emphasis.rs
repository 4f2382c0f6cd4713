use std::sync::OnceLock;

use regex::Regex;

/// Bold emphasis: `**text**` or `__text__`.
pub struct Bold;

impl Bold {
    pub const STARS: &'static str = "**";
    pub const UNDERSCORES: &'static str = "__";

    /// Either delimiter pair, non-greedy. Group 1 holds the content of the
    /// `**` form, group 2 the content of the `__` form.
    pub const PATTERN: &'static str = r"\*\*(.*?)\*\*|__(.*?)__";

    /// The `**` form only. Group 1 holds the content.
    pub const STARS_PATTERN: &'static str = r"\*\*(.*?)\*\*";

    pub fn regex() -> &'static Regex {
        static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
        BOLD_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid bold regex"))
    }

    pub fn stars_regex() -> &'static Regex {
        static STARS_REGEX: OnceLock<Regex> = OnceLock::new();
        STARS_REGEX.get_or_init(|| Regex::new(Self::STARS_PATTERN).expect("Invalid bold regex"))
    }
}

/// Italic emphasis: `*text*` or `_text_`.
pub struct Italic;

impl Italic {
    pub const STAR: char = '*';
    pub const UNDERSCORE: char = '_';

    /// Either delimiter, non-greedy. Group 1 holds the content of the `*`
    /// form, group 2 the content of the `_` form.
    pub const PATTERN: &'static str = r"\*(.*?)\*|_(.*?)_";

    pub fn regex() -> &'static Regex {
        static ITALIC_REGEX: OnceLock<Regex> = OnceLock::new();
        ITALIC_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid italic regex"))
    }
}
