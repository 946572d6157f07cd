pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::FileSource, CliConfig};
pub use crate::core::{catalog, index::CourseIndex, loader::CatalogLoader};
pub use domain::model::{Course, LoadReport};
pub use utils::error::{CatalogError, Result};
