use regex::Captures;

use super::kinds::{Bold, CodeSpan, Italic};

/// Strips inline emphasis markers, keeping only the marked content.
///
/// Marker classes are applied in a fixed order: bold, then italic, then code.
/// Each pass replaces every non-overlapping, leftmost, non-greedy match with
/// its inner content, so italic and code markers inside a bold span are
/// removed by the later passes. A marker left without a partner is kept
/// verbatim; an unclosed `**` is two italic stars and cancels out.
pub fn normalize(text: &str) -> String {
    let flattened = Bold::regex().replace_all(text, inner_content);
    let flattened = Italic::regex().replace_all(&flattened, inner_content);
    CodeSpan::regex()
        .replace_all(&flattened, inner_content)
        .into_owned()
}

/// Content of whichever alternative matched.
fn inner_content(caps: &Captures<'_>) -> String {
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .map_or_else(String::new, |m| m.as_str().to_owned())
}
