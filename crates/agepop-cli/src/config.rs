//! Optional TOML configuration.
//!
//! ```toml
//! [input]
//! encoding = "cp949"
//!
//! [columns]
//! region_column = "행정구역"
//!
//! [analysis]
//! metric = "cosine"
//! scale = "percent"
//!
//! [[buckets]]
//! name = "children"
//! max_age = 15
//! ```
//!
//! Every table and key is optional. Command-line flags win over the file.

use std::fs;
use std::path::{Path, PathBuf};

use agepop_core::AnalysisOptions;
use agepop_ingest::{ColumnConvention, TableEncoding};
use agepop_model::{AgeBucket, Metric, Scale};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub input: InputConfig,
    pub columns: ColumnConvention,
    pub analysis: AnalysisConfig,
    /// Replaces the built-in buckets when non-empty.
    pub buckets: Vec<AgeBucket>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub encoding: TableEncoding,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub metric: Metric,
    pub scale: Scale,
}

impl AppConfig {
    /// Loads `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Analysis options with optional command-line overrides applied.
    pub fn analysis_options(
        &self,
        metric: Option<Metric>,
        scale: Option<Scale>,
    ) -> AnalysisOptions {
        let mut options = AnalysisOptions::default()
            .with_metric(metric.unwrap_or(self.analysis.metric))
            .with_scale(scale.unwrap_or(self.analysis.scale));
        if !self.buckets.is_empty() {
            options = options.with_buckets(self.buckets.clone());
        }
        options
    }
}
