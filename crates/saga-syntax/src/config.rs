//! Parser configuration.
//!
//! Configuration is usually embedded in a host project's TOML file under a
//! `[parser]` table:
//!
//! ```toml
//! [parser]
//! indentation = "spaces"
//! max_depth = 32
//! ```

use serde::Deserialize;

use crate::error::ConfigError;

/// Characters allowed in leading indentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndentationPolicy {
    /// Tabs or spaces, as long as each level extends the previous one.
    #[default]
    Any,
    /// Spaces only.
    Spaces,
    /// Tabs only.
    Tabs,
}

/// Options for lexing and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Characters allowed in leading indentation.
    pub indentation: IndentationPolicy,
    /// Maximum number of open indentation levels, and of nested list/object
    /// literals. `1` allows one indented body and `[1]` but not `[[1]]`.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            indentation: IndentationPolicy::Any,
            max_depth: 64,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    parser: ParserConfig,
}

impl ParserConfig {
    /// Reads the `[parser]` table of a TOML document.
    ///
    /// A document without a `[parser]` table yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the document is not valid TOML or the
    /// table has values of the wrong type.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|err| ConfigError::Toml(err.to_string()))?;
        if file.parser.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        Ok(file.parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.indentation, IndentationPolicy::Any);
        assert_eq!(config.max_depth, 64);
    }

    #[test]
    fn test_from_toml() {
        let config = ParserConfig::from_toml(
            r#"
[parser]
indentation = "tabs"
max_depth = 8
"#,
        )
        .unwrap();
        assert_eq!(config.indentation, IndentationPolicy::Tabs);
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_missing_table_is_default() {
        let config = ParserConfig::from_toml("[other]\nkey = 1\n").unwrap();
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let config = ParserConfig::from_toml("[parser]\nindentation = \"spaces\"\n").unwrap();
        assert_eq!(config.indentation, IndentationPolicy::Spaces);
        assert_eq!(config.max_depth, 64);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ParserConfig::from_toml("[parser]\nindentation = \"both\"\n"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            ParserConfig::from_toml("[parser]\nmax_depth = 0\n"),
            Err(ConfigError::Invalid(_))
        ));
    }
}
