use crate::core::index::CourseIndex;
use crate::domain::model::Course;

/// Point lookup by identifier. A miss is an ordinary `None`, not an error.
pub fn find_by_identifier<'a>(index: &'a CourseIndex, identifier: &str) -> Option<&'a Course> {
    index.lookup(identifier)
}

/// Every course ascending by identifier, byte-wise lexicographic.
///
/// The sort is stable, so duplicate identifiers keep the order the index
/// reports them in (bucket order, then insertion order).
pub fn list_all_sorted(index: &CourseIndex) -> Vec<&Course> {
    let mut all: Vec<&Course> = index.all_records().collect();
    all.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::load_lines;

    fn populated_index(lines: &[&str]) -> CourseIndex {
        let mut index = CourseIndex::new();
        load_lines(lines.iter().map(|l| l.to_string()), &mut index);
        index
    }

    #[test]
    fn test_find_by_identifier_delegates_to_index() {
        let index = populated_index(&["CS101,Intro,CS100", "CS100,Fundamentals"]);

        let course = find_by_identifier(&index, "CS101").unwrap();
        assert_eq!(course.identifier, "CS101");
        assert_eq!(course.prerequisites, vec!["CS100"]);
        assert!(find_by_identifier(&index, "CS500").is_none());
    }

    #[test]
    fn test_list_all_sorted_orders_by_identifier() {
        let index = populated_index(&[
            "MATH201,Calculus",
            "CS101,Intro to CS",
            "CS100,Fundamentals",
            "BIO110,Biology",
        ]);

        let identifiers: Vec<&str> = list_all_sorted(&index)
            .iter()
            .map(|c| c.identifier.as_str())
            .collect();
        assert_eq!(identifiers, vec!["BIO110", "CS100", "CS101", "MATH201"]);
    }

    #[test]
    fn test_list_all_sorted_is_nondecreasing() {
        let index = populated_index(&[
            "CS300,Data Structures",
            "CS101,Intro",
            "CS200,Discrete",
            "CS101,Intro again",
        ]);

        let sorted = list_all_sorted(&index);
        assert_eq!(sorted.len(), 4);
        for pair in sorted.windows(2) {
            assert!(pair[0].identifier <= pair[1].identifier);
        }
    }

    #[test]
    fn test_duplicate_identifiers_keep_chain_order() {
        // One bucket pins the incidental order so the tie-break is observable.
        let mut index = CourseIndex::with_bucket_count(1).unwrap();
        load_lines(
            ["CS101,First copy", "CS101,Second copy"]
                .iter()
                .map(|l| l.to_string()),
            &mut index,
        );

        let sorted = list_all_sorted(&index);
        assert_eq!(sorted[0].title, "First copy");
        assert_eq!(sorted[1].title, "Second copy");
    }

    #[test]
    fn test_empty_index_lists_nothing() {
        let index = CourseIndex::new();
        assert!(list_all_sorted(&index).is_empty());
    }
}
