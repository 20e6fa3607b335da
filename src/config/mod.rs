pub mod recipes;

use crate::error::{Error, Result};
use crate::matcher::{Normalization, SearchOptions};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// YAML recipe catalog; the built-in recipes are used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub delimiter: char,
    pub normalization: Normalization,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let path = std::env::var("RECIPES_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let normalization = std::env::var("NORMALIZATION")
            .unwrap_or_else(|_| "literal".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid NORMALIZATION value".to_string()))?;

        let delimiter = parse_delimiter(
            &std::env::var("QUERY_DELIMITER").unwrap_or_else(|_| ",".to_string()),
        )
        .map_err(|_| Error::Config("Invalid QUERY_DELIMITER value".to_string()))?;

        Ok(Settings {
            catalog: CatalogConfig { path },
            search: SearchConfig {
                delimiter,
                normalization,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.search.delimiter.is_whitespace() {
            return Err(Error::Config(
                "Query delimiter must not be whitespace".to_string(),
            ));
        }

        Ok(())
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            delimiter: self.search.delimiter,
            normalization: self.search.normalization,
        }
    }

    /// Search options with command-line overrides applied on top of the settings
    pub fn resolve_search_options(
        &self,
        normalization: Option<Normalization>,
        delimiter: Option<&str>,
    ) -> Result<SearchOptions> {
        let mut options = self.search_options();
        if let Some(normalization) = normalization {
            options.normalization = normalization;
        }
        if let Some(delimiter) = delimiter {
            options.delimiter = parse_delimiter(delimiter)?;
        }
        Ok(options)
    }
}

/// Parse a delimiter argument, which must be exactly one non-whitespace character
pub fn parse_delimiter(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_whitespace() => Err(Error::InvalidArgument(
            "Query delimiter must not be whitespace".to_string(),
        )),
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidArgument(format!(
            "Delimiter must be a single character, got {value:?}"
        ))),
    }
}
