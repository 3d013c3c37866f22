use std::fmt;

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::color::Hsl;

/// A CSS length or bare number, e.g. `0.5rem`, `1px` or `400`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub value: f64,
    /// Empty for unitless numbers.
    pub unit: String,
}

/// What a token value turned out to be once parsed.
///
/// Anything that none of the rules accept is kept as [`TokenValue::Unknown`]
/// so it can be reported instead of silently treated as a colour or a size.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Dimension(Dimension),
    FontStack(Vec<String>),
    Hsl(Hsl),
    Hex(String),
    Unknown,
}

/// A single token value: the text found in the token file plus its parsed form.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    raw: String,
    value: TokenValue,
}
impl Token {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = value_parser::value(&raw).unwrap_or(TokenValue::Unknown);
        Self { raw, value }
    }
    pub fn raw(&self) -> &str {
        &self.raw
    }
    pub fn value(&self) -> &TokenValue {
        &self.value
    }
    /// The value handed to platform outputs: HSL triplets become `#rrggbb`,
    /// everything else is passed through as written.
    pub fn converted(&self) -> String {
        match &self.value {
            TokenValue::Hsl(hsl) => hsl.to_hex(),
            _ => self.raw.clone(),
        }
    }
}
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

peg::parser! {
  grammar value_parser() for str {
    rule ws() = quiet!{[' ' | '\t' | '\n' | '\r']+}
    rule _ = quiet!{[' ' | '\t' | '\n' | '\r']*}

    rule int() -> f64 = n:$(['0'..='9']+) {? n.parse().or(Err("integer")) }
    rule number() -> f64
        = n:$("-"? (['0'..='9']+ ("." ['0'..='9']+)? / "." ['0'..='9']+)) {? n.parse().or(Err("number")) }
    rule unit() = "px" / "rem" / "em" / "%" / "vh" / "vw" / "ms" / "s" / "deg"

    rule hsl() -> Hsl = h:int() ws() s:int() "%" ws() l:int() "%" { Hsl::new(h, s, l) }
    rule hex() -> String
        = v:$("#" ['a'..='f' | 'A'..='F' | '0'..='9']+) {?
            csscolorparser::parse(v).map(|_| v.to_string()).or(Err("hex color"))
        }
    rule dimension() -> Dimension
        = value:number() unit:$(unit()?) { Dimension { value, unit: unit.to_string() } }

    rule family() -> String
        = "\"" f:$((!"\"" [_])+) "\"" { f.to_string() }
        / "'" f:$((!"'" [_])+) "'" { f.to_string() }
        / f:$(['a'..='z' | 'A'..='Z'] ['a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | ' ']*) { f.trim_end().to_string() }
    rule font_stack() -> Vec<String> = f:(family() ++ (_ "," _)) { f }

    pub(crate) rule value() -> TokenValue
        = v:hsl() ![_] { TokenValue::Hsl(v) }
        / v:hex() ![_] { TokenValue::Hex(v) }
        / v:dimension() ![_] { TokenValue::Dimension(v) }
        / v:font_stack() ![_] { TokenValue::FontStack(v) }
  }
}

struct TokenVisitor;

impl<'de> Visitor<'de> for TokenVisitor {
    type Value = Token;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a token value string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Token::parse(value))
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Token, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TokenVisitor)
    }
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}
