pub mod catalog;
pub mod config;
pub mod error;
pub mod matcher;

// Command-line interface
pub mod cli;

// Re-exports
pub use catalog::{Catalog, Recipe};
pub use config::Settings;
pub use error::{Error, Result};
pub use matcher::{search, tokenize};
