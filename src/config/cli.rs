use crate::domain::ports::CourseSource;
use crate::utils::error::Result;
use std::fs;

/// Filesystem-backed course source. The file handle lives only for the
/// duration of the read.
#[derive(Debug, Clone, Default)]
pub struct FileSource;

impl FileSource {
    pub fn new() -> Self {
        Self
    }
}

impl CourseSource for FileSource {
    fn read_lines(&self, path: &str) -> Result<Vec<String>> {
        let text = fs::read_to_string(path)?;
        Ok(text.lines().map(str::to_string).collect())
    }
}
