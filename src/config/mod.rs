pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "course-catalog")]
#[command(about = "In-memory course catalog with hash-indexed lookup")]
pub struct CliConfig {
    /// Course file to load before the menu starts
    #[arg(long)]
    pub course_file: Option<String>,

    #[arg(long, default_value = "10")]
    pub bucket_count: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    fn course_file(&self) -> Option<&str> {
        self.course_file.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("bucket_count", self.bucket_count, 1)?;
        if let Some(path) = &self.course_file {
            validate_path("course_file", path)?;
        }
        Ok(())
    }
}
