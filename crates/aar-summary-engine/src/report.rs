//! Composition of the two-section after-action review document.

use std::fmt;

use log::info;

use crate::{
    document::Document,
    parsing::{build, inline::InlineStyle},
};

pub const NO_CLASS: &str = "[no class]";
pub const DEFAULT_ACTIVITY: &str = "AAR AI-Generated Summary";
pub const ACTIVITY_PREFIX: &str = "AAR";
pub const WENT_WELL_HEADING: &str = "What went well";
pub const IMPROVEMENTS_HEADING: &str = "Ideas for improvement";

/// Title of a report, built from the two caller-supplied strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTitle {
    class_id: String,
    activity: String,
}

impl ReportTitle {
    /// An empty class id becomes `[no class]`; an activity title becomes
    /// `AAR <title>`, or the generic summary label when empty.
    pub fn new(class_id: &str, activity_title: &str) -> Self {
        let class_id = if class_id.is_empty() {
            NO_CLASS.to_string()
        } else {
            class_id.to_string()
        };
        let activity = if activity_title.is_empty() {
            DEFAULT_ACTIVITY.to_string()
        } else {
            format!("{ACTIVITY_PREFIX} {activity_title}")
        };
        Self { class_id, activity }
    }

    pub fn class_id(&self) -> &str {
        &self.class_id
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }
}

impl fmt::Display for ReportTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.class_id, self.activity)
    }
}

/// Builds the report: the title as a level 1 heading, then a level 2 heading
/// and the converted text for each section.
///
/// Each section is converted with its own builder state, so its first
/// paragraph line is dropped and its first heading gets no separator. The
/// combined document is compacted once.
pub fn compose_report(
    title: &ReportTitle,
    went_well: &str,
    improvements: &str,
    style: InlineStyle,
) -> Document {
    let mut doc = Document::new();
    doc.append_heading(1, title.to_string());

    doc.append_heading(2, WENT_WELL_HEADING);
    doc.extend(build(went_well, style));

    doc.append_heading(2, IMPROVEMENTS_HEADING);
    doc.extend(build(improvements, style));

    doc.compact();
    info!("composed report '{title}' with {} elements", doc.len());
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Element, invariants};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("101", "Fire Drill", "101 - AAR Fire Drill")]
    #[case("101", "", "101 - AAR AI-Generated Summary")]
    #[case("", "Fire Drill", "[no class] - AAR Fire Drill")]
    #[case("", "", "[no class] - AAR AI-Generated Summary")]
    fn title_defaults(#[case] class_id: &str, #[case] activity: &str, #[case] expected: &str) {
        assert_eq!(ReportTitle::new(class_id, activity).to_string(), expected);
    }

    #[test]
    fn composes_both_sections() {
        let title = ReportTitle::new("7B", "Field Trip");
        let doc = compose_report(
            &title,
            "Summary:\n- Good pacing\n- Clear goals",
            "# Ideas\n- More breaks",
            InlineStyle::Flatten,
        );
        invariants::check(&doc);

        let mut expected = Document::new();
        expected.append_heading(1, "7B - AAR Field Trip");
        expected.append_heading(2, WENT_WELL_HEADING);
        expected.append_list_item("Good pacing", 0);
        expected.append_list_item("Clear goals", 0);
        expected.append_heading(2, IMPROVEMENTS_HEADING);
        expected.append_heading(1, "Ideas");
        expected.append_list_item("More breaks", 0);
        expected.compact();

        assert_eq!(doc, expected);
        assert_eq!(doc.title(), Some("7B - AAR Field Trip"));
    }

    #[test]
    fn section_leading_blank_is_kept_inside_report() {
        let doc = compose_report(
            &ReportTitle::new("1", "x"),
            "Intro\n\n- a",
            "",
            InlineStyle::Flatten,
        );
        assert_eq!(
            doc.elements(),
            &[
                Element::heading(1, "1 - AAR x"),
                Element::heading(2, WENT_WELL_HEADING),
                Element::empty_paragraph(),
                Element::list_item("a", 0),
                Element::heading(2, IMPROVEMENTS_HEADING),
            ]
        );
    }

    #[test]
    fn list_items_across_section_boundary_are_not_joined() {
        let doc = compose_report(&ReportTitle::new("1", ""), "- a", "- b", InlineStyle::Flatten);
        let Element::ListItem(a) = &doc.elements()[2] else {
            panic!("expected list item");
        };
        assert_eq!(a.style.spacing_after, crate::document::Spacing::Default);
    }
}
