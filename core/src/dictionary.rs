//! The colour dictionary handed to native platform emitters.
//!
//! Colour tokens are picked out of one mode by key, renamed to identifier-safe
//! names and converted to hex. The result serializes as
//! `{ "color": { <name>: { "value": ..., "type": "color" } } }`.

use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::{Result, TokenError},
    value::{Token, TokenValue},
    TokenMap, TokenSet,
};

pub const DEFAULT_MODE: &str = "light";
pub const DEFAULT_PREFIX: &str = "--wex-";
pub const COLOR_FAMILIES: [&str; 8] = [
    "palette",
    "primary",
    "destructive",
    "success",
    "warning",
    "info",
    "chart",
    "brand",
];

/// Which mode to read, which key prefix to strip and which key fragments
/// mark a token as a colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorOptions {
    pub mode: String,
    pub prefix: String,
    pub families: Vec<String>,
}
impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            families: COLOR_FAMILIES.iter().map(|f| f.to_string()).collect(),
        }
    }
}
impl ColorOptions {
    pub fn with_mode(&self, mode: &str) -> Self {
        Self {
            mode: mode.to_string(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    #[serde(rename = "color")]
    Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub value: String,
    #[serde(rename = "type")]
    pub type_: EntryType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDictionary {
    pub color: IndexMap<String, ColorEntry>,
}
impl ColorDictionary {
    pub fn len(&self) -> usize {
        self.color.len()
    }
    pub fn is_empty(&self) -> bool {
        self.color.is_empty()
    }
    pub fn get(&self, name: &str) -> Option<&str> {
        self.color.get(name).map(|entry| entry.value.as_str())
    }
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(TokenError::Serialize)
    }
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?).map_err(|source| TokenError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Keys of `mode` containing any of `families`, values untouched.
/// A missing mode yields an empty map.
pub fn filter_colors<'a>(
    tokens: &'a TokenSet,
    mode: &str,
    families: &[String],
) -> IndexMap<&'a str, &'a Token> {
    tokens
        .mode(mode)
        .into_iter()
        .flat_map(TokenMap::iter)
        .filter(|(key, _)| families.iter().any(|family| key.contains(family.as_str())))
        .map(|(key, token)| (key.as_str(), token))
        .collect()
}

/// `--wex-primary-500` becomes `primary_500`; keys without the prefix only
/// have their dashes replaced.
pub fn normalize_key(key: &str, prefix: &str) -> String {
    key.strip_prefix(prefix).unwrap_or(key).replace('-', "_")
}

/// Why a token under a colour key is not a clean colour, if it isn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorIssue {
    OutOfRange,
    NotAColor,
    Unrecognised,
}

pub fn color_issue(token: &Token) -> Option<ColorIssue> {
    match token.value() {
        TokenValue::Hsl(hsl) if !hsl.in_gamut() => Some(ColorIssue::OutOfRange),
        TokenValue::Hsl(_) | TokenValue::Hex(_) => None,
        TokenValue::Dimension(_) | TokenValue::FontStack(_) => Some(ColorIssue::NotAColor),
        TokenValue::Unknown => Some(ColorIssue::Unrecognised),
    }
}

/// Runs filter, normalize and convert over one mode.
///
/// Two keys normalizing to the same name leave only the later one.
pub fn build_color_dictionary(tokens: &TokenSet, options: &ColorOptions) -> ColorDictionary {
    let filtered = filter_colors(tokens, &options.mode, &options.families);
    debug!(mode = %options.mode, count = filtered.len(), "filtered colour tokens");

    let mut sources: IndexMap<String, &str> = IndexMap::new();
    let mut dictionary = ColorDictionary::default();
    for (key, token) in filtered {
        match color_issue(token) {
            Some(ColorIssue::OutOfRange) => {
                warn!(key, value = token.raw(), "HSL colour out of range, converting as is")
            }
            Some(ColorIssue::NotAColor) => {
                warn!(key, value = token.raw(), "non-colour value under a colour key, passing through")
            }
            Some(ColorIssue::Unrecognised) => {
                warn!(key, value = token.raw(), "unrecognised token value, passing through")
            }
            None => {}
        }
        let name = normalize_key(key, &options.prefix);
        if let Some(previous) = sources.insert(name.clone(), key) {
            warn!(name = %name, previous, key, "normalized key collision, keeping the later token");
        }
        dictionary.color.insert(
            name,
            ColorEntry {
                value: token.converted(),
                type_: EntryType::Color,
            },
        );
    }
    debug!(mode = %options.mode, count = dictionary.len(), "built colour dictionary");
    dictionary
}
