//! Read configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for read operations.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ReadConfig {
    /// Bytes requested from the host per read step.
    #[builder(default = "default_chunk_size()")]
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Files larger than this are skipped for thumbnail rendering.
    #[builder(default = "default_max_thumbnail_bytes()")]
    #[serde(default = "default_max_thumbnail_bytes")]
    pub max_thumbnail_bytes: u64,
}

fn default_chunk_size() -> usize {
    64 * 1024
}

fn default_max_thumbnail_bytes() -> u64 {
    10 * 1024 * 1024
}

impl ReadConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(chunk_size) = self.chunk_size {
            if chunk_size == 0 {
                return Err("Chunk size must be greater than zero".to_string());
            }
        }
        Ok(())
    }
}

impl ReadConfig {
    /// Create a new config builder.
    pub fn builder() -> ReadConfigBuilder {
        ReadConfigBuilder::default()
    }
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            max_thumbnail_bytes: default_max_thumbnail_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReadConfig::default();
        assert_eq!(config.chunk_size, 64 * 1024);
        assert_eq!(config.max_thumbnail_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_builder() {
        let config = ReadConfig::builder()
            .chunk_size(4096usize)
            .build()
            .unwrap();
        assert_eq!(config.chunk_size, 4096);
        assert_eq!(config.max_thumbnail_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let result = ReadConfig::builder().chunk_size(0usize).build();
        assert!(result.is_err());
    }
}
