use std::{fs, path::Path};

use convert_case::{Case, Casing};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Deserialize;
use tracing::debug;

pub mod color;
pub mod dictionary;
pub mod error;
mod value;

pub use color::{hsl_to_hex, parse_hsl, Hsl};
pub use dictionary::{
    build_color_dictionary, color_issue, filter_colors, normalize_key, ColorDictionary,
    ColorEntry, ColorIssue, ColorOptions, EntryType,
};
pub use error::{Result, TokenError};
pub use value::{Dimension, Token, TokenValue};

/// Tokens of one mode, in file order.
pub type TokenMap = IndexMap<String, Token>;

/// The bundled Wex token file.
pub fn get_design_tokens() -> Result<TokenSet> {
    TokenSet::from_json(include_str!("../../wex-design/tokens.json"))
}

/// Every mode of a token file: `{ "light": { "--wex-...": "..." }, "dark": { ... } }`.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct TokenSet {
    modes: IndexMap<String, TokenMap>,
}
impl TokenSet {
    pub fn from_json(data: &str) -> Result<Self> {
        let tokens: TokenSet = serde_json::from_str(data)?;
        debug!(
            modes = tokens.modes.len(),
            tokens = tokens.modes.values().map(IndexMap::len).sum::<usize>(),
            "loaded design tokens"
        );
        Ok(tokens)
    }
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| TokenError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }
    pub fn mode(&self, name: &str) -> Option<&TokenMap> {
        self.modes.get(name)
    }
    pub fn mode_names(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    pub fn color_dictionary(&self, options: &ColorOptions) -> ColorDictionary {
        build_color_dictionary(self, options)
    }

    /// One rule per mode, `light` on `:root` and every other mode on a class.
    pub fn to_css(&self) -> String {
        self.modes
            .iter()
            .map(|(mode, tokens)| {
                let selector = css_selector(mode);
                if tokens.is_empty() {
                    return format!("{selector} {{}}");
                }
                let body = tokens
                    .iter()
                    .map(|(key, token)| format!("  {}: {};", css_property(key), token))
                    .join("\n");
                format!("{selector} {{\n{body}\n}}")
            })
            .join("\n\n")
    }

    /// A `pub mod` per mode with a `&str` constant per colour.
    pub fn to_rust(&self, options: &ColorOptions) -> String {
        self.modes
            .keys()
            .map(|mode| {
                let consts = self
                    .color_dictionary(&options.with_mode(mode))
                    .color
                    .iter()
                    .map(|(name, entry)| {
                        format!("pub const {}: &str = {:?};", rust_const(name), entry.value)
                    })
                    .join("\n");
                format!("pub mod {} {{\n{}\n}}", rust_module(mode), consts)
            })
            .join("\n")
    }
}

fn css_selector(mode: &str) -> String {
    match mode {
        "light" => ":root".to_string(),
        "dark" => ".dark".to_string(),
        other => format!(".{}", slugify(other, "-")),
    }
}
fn css_property(key: &str) -> String {
    if key.starts_with("--") {
        key.to_string()
    } else {
        format!("--{key}")
    }
}

pub(crate) fn slugify(s: &str, sep: &str) -> String {
    deunicode::deunicode(s)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .join(sep)
}
fn rust_ident(s: &str, case: Case) -> String {
    let ident = slugify(s, "_").to_case(case);
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{ident}")
    } else {
        ident
    }
}
fn rust_const(name: &str) -> String {
    rust_ident(name, Case::UpperSnake)
}
fn rust_module(mode: &str) -> String {
    rust_ident(mode, Case::Snake)
}
