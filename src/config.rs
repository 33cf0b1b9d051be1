//! Engine configuration with TOML persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::{Codec, GraphSerializer, Lz4Codec, Utf8Codec};
use crate::types::{GraphError, GraphResult};

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Defaults for newly created graphs
    pub graph: GraphDefaults,

    /// Serialization options
    pub format: FormatConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphDefaults {
    /// Create directed graphs
    pub directed: bool,

    /// Require weights on every edge
    pub weighted: bool,
}

impl Default for GraphDefaults {
    fn default() -> Self {
        Self {
            directed: true,
            weighted: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// LZ4-compress string payloads
    pub compress_payloads: bool,
}

impl EngineConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given and present, falling back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> GraphResult<Self> {
        match path {
            Some(p) if p.exists() => Self::load(p),
            Some(p) => {
                log::warn!("Config file {} not found, using defaults", p.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(text: &str) -> GraphResult<Self> {
        toml::from_str(text).map_err(|e| GraphError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> GraphResult<String> {
        toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> GraphResult<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Serializer for string payloads honouring `format.compress_payloads`.
    pub fn string_serializer(&self) -> GraphSerializer<Box<dyn Codec<String>>> {
        let codec: Box<dyn Codec<String>> = if self.format.compress_payloads {
            Box::new(Lz4Codec::new(Utf8Codec))
        } else {
            Box::new(Utf8Codec)
        };
        GraphSerializer::new(codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = EngineConfig::from_toml_str("[format]\ncompress_payloads = true\n").unwrap();
        assert!(config.format.compress_payloads);
        assert!(config.graph.directed);
        assert!(!config.graph.weighted);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = EngineConfig::default();
        config.graph.weighted = true;
        config.graph.directed = false;
        let text = config.to_toml_string().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = EngineConfig::from_toml_str("[graph]\ndirected = \"sometimes\"\n");
        assert!(matches!(result, Err(GraphError::Config(_))));
    }
}
