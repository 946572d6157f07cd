use serde::{Deserialize, Serialize};

/// One course record: identifier, title, and the identifiers of its
/// prerequisites in file order. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub identifier: String,
    pub title: String,
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Builds a course from the fields of one accepted input line: first
    /// field is the identifier, second the title, the rest prerequisites.
    pub fn from_fields(fields: Vec<String>) -> Self {
        let mut fields = fields.into_iter();
        let identifier = fields.next().unwrap_or_default();
        let title = fields.next().unwrap_or_default();
        Self {
            identifier,
            title,
            prerequisites: fields.collect(),
        }
    }

    /// Space-joined prerequisite identifiers, or "None" when there are none.
    pub fn prerequisites_display(&self) -> String {
        if self.prerequisites.is_empty() {
            "None".to_string()
        } else {
            self.prerequisites.join(" ")
        }
    }
}

/// Outcome of one load pass over an input source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    /// 1-based line numbers that failed the format check, in input order.
    pub rejected_lines: Vec<usize>,
}

impl LoadReport {
    pub fn rejected(&self) -> usize {
        self.rejected_lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_maps_positions() {
        let course = Course::from_fields(vec![
            "CS300".to_string(),
            "Data Structures".to_string(),
            "CS200".to_string(),
            "MATH201".to_string(),
        ]);

        assert_eq!(course.identifier, "CS300");
        assert_eq!(course.title, "Data Structures");
        assert_eq!(course.prerequisites, vec!["CS200", "MATH201"]);
    }

    #[test]
    fn test_from_fields_without_prerequisites() {
        let course = Course::from_fields(vec!["CS101".to_string(), "Intro to CS".to_string()]);

        assert_eq!(course.identifier, "CS101");
        assert_eq!(course.title, "Intro to CS");
        assert!(course.prerequisites.is_empty());
    }

    #[test]
    fn test_prerequisites_display_empty_list() {
        let course = Course::from_fields(vec!["CS101".to_string(), "Intro".to_string()]);
        assert_eq!(course.prerequisites_display(), "None");
    }

    #[test]
    fn test_prerequisites_display_space_joined() {
        let course = Course::from_fields(vec![
            "CS400".to_string(),
            "Capstone".to_string(),
            "CS300".to_string(),
            "CS350".to_string(),
        ]);
        assert_eq!(course.prerequisites_display(), "CS300 CS350");
    }
}
