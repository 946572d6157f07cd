use crate::core::index::CourseIndex;
use crate::core::parser;
use crate::domain::model::{Course, LoadReport};
use crate::domain::ports::{ConfigProvider, CourseSource};
use crate::utils::error::Result;

/// Feeds each line through the parser and inserts the accepted ones.
///
/// Malformed lines are skipped with a diagnostic and counted in the report;
/// they never abort the pass, so a partially invalid file still loads every
/// valid line. Line numbers in the report are 1-based.
pub fn load_lines<I>(lines: I, index: &mut CourseIndex) -> LoadReport
where
    I: IntoIterator<Item = String>,
{
    let mut report = LoadReport::default();

    for (number, line) in lines.into_iter().enumerate() {
        match parser::parse_line(&line) {
            Some(fields) => {
                index.insert(Course::from_fields(fields));
                report.loaded += 1;
            }
            None => {
                tracing::warn!("Invalid line format at line {}: {:?}", number + 1, line);
                report.rejected_lines.push(number + 1);
            }
        }
    }

    tracing::debug!(
        "Load pass finished: {} loaded, {} rejected",
        report.loaded,
        report.rejected()
    );
    report
}

pub struct CatalogLoader<S: CourseSource> {
    source: S,
}

impl<S: CourseSource> CatalogLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads every valid line of `path` into `index`.
    ///
    /// If the source cannot be opened the index is left exactly as it was,
    /// so repeated loads can accumulate into the same index safely.
    pub fn load(&self, path: &str, index: &mut CourseIndex) -> Result<LoadReport> {
        let lines = self.source.read_lines(path)?;
        tracing::debug!("Read {} lines from {}", lines.len(), path);
        Ok(load_lines(lines, index))
    }

    /// Builds the index described by `config` and preloads its course file
    /// when one is configured. An unopenable preload file is a diagnostic,
    /// not a failure; the menu can retry interactively.
    pub fn bootstrap<C: ConfigProvider>(&self, config: &C) -> Result<CourseIndex> {
        let mut index = CourseIndex::with_bucket_count(config.bucket_count())?;

        if let Some(path) = config.course_file() {
            match self.load(path, &mut index) {
                Ok(report) => tracing::info!(
                    "Preloaded {} courses from {} ({} lines rejected)",
                    report.loaded,
                    path,
                    report.rejected()
                ),
                Err(error) => tracing::error!("Unable to open {}: {}", path, error),
            }
        }

        Ok(index)
    }
}
