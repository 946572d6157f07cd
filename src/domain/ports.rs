use crate::utils::error::Result;

/// Raw input collaborator: yields the text lines of a course file.
/// The source is opened inside the call and released before it returns.
pub trait CourseSource {
    fn read_lines(&self, path: &str) -> Result<Vec<String>>;
}

pub trait ConfigProvider {
    fn bucket_count(&self) -> usize;
    fn course_file(&self) -> Option<&str>;
}
