pub mod catalog;
pub mod index;
pub mod loader;
pub mod parser;

pub use crate::domain::model::{Course, LoadReport};
pub use crate::domain::ports::{ConfigProvider, CourseSource};
pub use crate::utils::error::Result;
