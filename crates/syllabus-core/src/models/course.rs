//! Course record model.

use serde::{Deserialize, Serialize};

/// Column headers, in output order.
pub const COLUMNS: [&str; 5] = [
    "Course Code",
    "Course Title",
    "Credit Hour",
    "Prerequisite",
    "Content",
];

/// One course's extracted field set.
///
/// Every field is kept as the trimmed source text. Nothing is parsed or
/// normalized: a code may hold several comma-separated codes and the credit
/// hour stays a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Text after `Course Code:`.
    #[serde(rename = "Course Code")]
    pub code: String,

    /// Text after `Course Title:`.
    #[serde(rename = "Course Title")]
    pub title: String,

    /// Text after `Credit Hour:`.
    #[serde(rename = "Credit Hour")]
    pub credit_hour: String,

    /// Text after `Prerequisite:`.
    #[serde(rename = "Prerequisite")]
    pub prerequisite: String,

    /// Space-joined description block.
    #[serde(rename = "Content")]
    pub content: String,
}

impl CourseRecord {
    /// Open a record for the given code with every other field empty.
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Whether the record passes the emission gate.
    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }

    /// Field values in column order.
    pub fn as_row(&self) -> [&str; 5] {
        [
            &self.code,
            &self.title,
            &self.credit_hour,
            &self.prerequisite,
            &self.content,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_with_code_resets_other_fields() {
        let record = CourseRecord::with_code("CSE1102");
        assert_eq!(record.code, "CSE1102");
        assert!(record.title.is_empty());
        assert!(record.content.is_empty());
        assert!(record.has_code());
    }

    #[test]
    fn test_json_uses_column_names() {
        let record = CourseRecord {
            code: "PHY1102".to_string(),
            title: "Physics I Lab".to_string(),
            credit_hour: "1.00".to_string(),
            prerequisite: "N/A".to_string(),
            content: "Based on the contents of PHY1101".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        for column in COLUMNS {
            assert!(json.get(column).is_some(), "missing column {column}");
        }
        assert_eq!(json["Credit Hour"], "1.00");
    }
}
