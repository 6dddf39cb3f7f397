pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::console::StreamConsole;
pub use crate::config::toml_config::DemConfig;
pub use crate::core::resolver::{InputResolver, ResolverSettings};
pub use crate::domain::model::{InputFileReference, InputSource};
pub use crate::utils::error::{DemError, Result};
