pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpFetcher;
pub use adapters::output::{FileOutput, StdoutOutput};
pub use adapters::source::{DirectorySource, RemoteZipSource};
pub use crate::core::{codegen::GoCodeGenerator, engine::GenerateEngine};
pub use utils::error::{GenerateError, Result};
