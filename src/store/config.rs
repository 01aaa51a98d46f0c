//! Store configuration
//!
//! Every field has a default, so `{}` is a valid config file.

use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::thread;

use serde::{Deserialize, Serialize};

use super::errors::{ConfigError, ConfigResult};

/// Configuration shared by a store and everything built on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Rows to pre-allocate when the store is created.
    pub initial_capacity: usize,

    /// Selector display: the full listing is shown while the store holds at
    /// most this many rows. Past that, the first `preview_limit - 1`
    /// matches are shown, then `...` and the store's last element.
    pub preview_limit: usize,

    /// Upper bound on parallel mapping workers.
    /// `None` means `std::thread::available_parallelism()`.
    pub max_workers: Option<usize>,

    /// Fewest positions handed to one parallel worker.
    pub min_rows_per_worker: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            preview_limit: default_preview_limit(),
            max_workers: None,
            min_rows_per_worker: default_min_rows_per_worker(),
        }
    }
}

fn default_preview_limit() -> usize {
    5
}

fn default_min_rows_per_worker() -> usize {
    4096
}

impl StoreConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let config: StoreConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks field ranges.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.preview_limit < 2 {
            return Err(ConfigError::Invalid(format!(
                "preview_limit must be at least 2, got {}",
                self.preview_limit
            )));
        }
        if self.min_rows_per_worker == 0 {
            return Err(ConfigError::Invalid(
                "min_rows_per_worker must be at least 1".to_string(),
            ));
        }
        if self.max_workers == Some(0) {
            return Err(ConfigError::Invalid(
                "max_workers must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of workers to map `positions` rows with.
    ///
    /// Always at least 1; 1 means run inline on the calling thread.
    pub fn worker_count(&self, positions: usize) -> usize {
        let ceiling = self.max_workers.unwrap_or_else(|| {
            thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        });
        let by_size = positions / self.min_rows_per_worker.max(1);
        by_size.min(ceiling).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.initial_capacity, 0);
        assert_eq!(config.preview_limit, 5);
        assert_eq!(config.max_workers, None);
        assert_eq!(config.min_rows_per_worker, 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = StoreConfig::from_json_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config =
            StoreConfig::from_json_str(r#"{"max_workers": 3, "preview_limit": 8}"#).unwrap();
        assert_eq!(config.max_workers, Some(3));
        assert_eq!(config.preview_limit, 8);
        assert_eq!(config.min_rows_per_worker, 4096);
    }

    #[test]
    fn test_rejects_small_preview_limit() {
        let err = StoreConfig::from_json_str(r#"{"preview_limit": 1}"#).unwrap_err();
        assert_eq!(err.code(), "ROWDEX_CONFIG_INVALID");
    }

    #[test]
    fn test_rejects_zero_workers() {
        let err = StoreConfig::from_json_str(r#"{"max_workers": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = StoreConfig::from_json_str(r#"{"min_rows_per_worker": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_wrong_type() {
        let err = StoreConfig::from_json_str(r#"{"preview_limit": "five"}"#).unwrap_err();
        assert_eq!(err.code(), "ROWDEX_CONFIG_PARSE");
    }

    #[test]
    fn test_worker_count() {
        let config = StoreConfig {
            max_workers: Some(4),
            min_rows_per_worker: 100,
            ..StoreConfig::default()
        };
        assert_eq!(config.worker_count(0), 1);
        assert_eq!(config.worker_count(99), 1);
        assert_eq!(config.worker_count(250), 2);
        assert_eq!(config.worker_count(1_000_000), 4);
    }
}
