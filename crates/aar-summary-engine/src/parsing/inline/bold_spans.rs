use std::ops::Range;

use super::{kinds::Bold, types::RichText};

/// Extracts `**…**` spans as bold ranges and strips their markers.
///
/// Every match is collected before the text is touched. The text is then
/// rewritten back-to-front (descending start offset), so replacing one span
/// never moves the offsets recorded for spans earlier in the text. The
/// returned ranges index into the stripped text. The `__…__` form is not
/// recognised here and is left as written.
pub fn apply_bold_spans(text: &str) -> RichText {
    let spans: Vec<(Range<usize>, Range<usize>)> = Bold::stars_regex()
        .captures_iter(text)
        .filter_map(|caps| Some((caps.get(0)?.range(), caps.get(1)?.range())))
        .collect();

    let mut stripped = text.to_owned();
    let mut bold = Vec::with_capacity(spans.len());
    for (full, inner) in spans.iter().rev() {
        stripped.replace_range(full.clone(), &text[inner.clone()]);
        bold.push(full.start..full.start + inner.len());
    }
    bold.reverse();

    // Each span in front of a range lost one marker pair once all
    // replacements are done.
    let marker_pair = 2 * Bold::STARS.len();
    let bold = bold
        .into_iter()
        .enumerate()
        .map(|(preceding, range)| {
            let shift = preceding * marker_pair;
            range.start - shift..range.end - shift
        })
        .filter(|range| !range.is_empty())
        .collect();

    RichText {
        text: stripped,
        bold,
    }
}
