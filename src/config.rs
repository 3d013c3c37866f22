//! wex-tokens configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wex_design_tokens_core::{
    dictionary::{COLOR_FAMILIES, DEFAULT_MODE, DEFAULT_PREFIX},
    ColorOptions,
};

/// Transform settings (wex-tokens.toml)
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct TransformConfig {
    /// Mode whose colours go into the colour dictionary
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Stripped from the front of every colour key
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// A key containing any of these is a colour
    #[serde(default = "default_families")]
    pub families: Vec<String>,
    /// File name of the colour dictionary, written next to the token file
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_families() -> Vec<String> {
    COLOR_FAMILIES.iter().map(|f| f.to_string()).collect()
}

fn default_output() -> String {
    "colors.tokens.json".to_string()
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            prefix: default_prefix(),
            families: default_families(),
            output: default_output(),
        }
    }
}

impl TransformConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: TransformConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Defaults unless a config file was given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn color_options(&self) -> ColorOptions {
        ColorOptions {
            mode: self.mode.clone(),
            prefix: self.prefix.clone(),
            families: self.families.clone(),
        }
    }

    /// Where the colour dictionary for `input` goes
    pub fn output_path(&self, input: &Path) -> PathBuf {
        input.with_file_name(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_color_options() {
        let config = TransformConfig::default();
        assert_eq!(config.color_options(), ColorOptions::default());
        assert_eq!(config.output, "colors.tokens.json");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"dark\"\nfamilies = [\"accent\"]").unwrap();

        let config = TransformConfig::load(file.path()).unwrap();
        assert_eq!(config.mode, "dark");
        assert_eq!(config.families, vec!["accent".to_string()]);
        assert_eq!(config.prefix, "--wex-");
        assert_eq!(config.output, "colors.tokens.json");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = TransformConfig::load_or_default(Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
        assert_eq!(
            TransformConfig::load_or_default(None).unwrap(),
            TransformConfig::default()
        );
    }

    #[test]
    fn output_next_to_input() {
        let config = TransformConfig::default();
        assert_eq!(
            config.output_path(Path::new("design/tokens.json")),
            PathBuf::from("design/colors.tokens.json")
        );
    }

    #[test]
    fn round_trips_through_toml() {
        let config = TransformConfig {
            mode: "dark".to_string(),
            ..TransformConfig::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(toml::from_str::<TransformConfig>(&text).unwrap(), config);
    }
}
