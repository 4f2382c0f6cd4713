use std::sync::OnceLock;

use regex::Regex;

/// Code span inline type with owned delimiter constant.
///
/// Per the knowledge ownership principle, the delimiter lives here and the
/// normalizer never hardcodes a backtick.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    /// Non-greedy code span; group 1 is the content between the ticks.
    pub const PATTERN: &'static str = r"`(.*?)`";

    pub fn regex() -> &'static Regex {
        static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
        CODE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid code span regex"))
    }
}
