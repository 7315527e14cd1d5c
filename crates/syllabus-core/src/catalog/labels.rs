//! Recognized catalog labels.
//!
//! Each label is a literal, case-sensitive prefix including its colon. The
//! table is scanned in order and the first matching prefix wins.

use std::fmt;

/// The field a label sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Opens a new record.
    Code,
    Title,
    CreditHour,
    Prerequisite,
    /// Starts the multi-line description.
    Content,
    /// Recognized only to stop content accumulation; never stored.
    Textbook,
}

impl Field {
    /// Whether lines after this label extend the content field.
    pub fn opens_content(self) -> bool {
        matches!(self, Field::Content)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Code => "code",
            Field::Title => "title",
            Field::CreditHour => "credit hour",
            Field::Prerequisite => "prerequisite",
            Field::Content => "content",
            Field::Textbook => "textbook",
        };
        f.write_str(name)
    }
}

/// A label prefix and the field it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub prefix: &'static str,
    pub field: Field,
}

/// Every recognized label, in match order.
pub static LABELS: &[Label] = &[
    Label { prefix: "Course Code:", field: Field::Code },
    Label { prefix: "Course Title:", field: Field::Title },
    Label { prefix: "Credit Hour:", field: Field::CreditHour },
    Label { prefix: "Prerequisite:", field: Field::Prerequisite },
    Label { prefix: "Content:", field: Field::Content },
    Label { prefix: "Contents:", field: Field::Content },
    Label { prefix: "Textbook:", field: Field::Textbook },
];

/// A line that starts with a recognized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelMatch<'a> {
    pub field: Field,
    /// Text after the label, trimmed.
    pub value: &'a str,
}

/// Match an already-trimmed line against the label table.
pub fn match_label(line: &str) -> Option<LabelMatch<'_>> {
    LABELS.iter().find_map(|label| {
        line.strip_prefix(label.prefix).map(|rest| LabelMatch {
            field: label.field,
            value: rest.trim(),
        })
    })
}
