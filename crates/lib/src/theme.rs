//! Typed theme document.
//!
//! This is the JSON shape the editor reads from the theme file. Property and
//! scope names are plain strings: the vocabulary belongs to the editor, not to us.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Map of property or token name to a `#rrggbb[aa]` color string.
pub type ColorMap = BTreeMap<String, String>;

/// Base appearance of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
  Light,
  Dark,
  /// High contrast.
  Hc,
}

impl ThemeType {
  pub fn as_str(self) -> &'static str {
    match self {
      ThemeType::Light => "light",
      ThemeType::Dark => "dark",
      ThemeType::Hc => "hc",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
  Bold,
  Italic,
  Underline,
}

/// Settings applied to every scope a [`TokenColorRule`] matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSettings {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub foreground: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub background: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub font_style: Option<FontStyle>,
}

/// A TextMate token color rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenColorRule {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  pub scope: Vec<String>,
  pub settings: TokenSettings,
}

impl TokenColorRule {
  /// Rule with a foreground color for the given scopes.
  pub fn foreground<I, S>(scope: I, color: &str) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      name: None,
      scope: scope.into_iter().map(Into::into).collect(),
      settings: TokenSettings {
        foreground: Some(color.to_string()),
        ..TokenSettings::default()
      },
    }
  }
}

/// One editor color theme, serialized verbatim into the theme file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
  pub name: String,
  #[serde(rename = "type")]
  pub kind: ThemeType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub colors: Option<ColorMap>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub semantic_highlighting: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub semantic_token_colors: Option<ColorMap>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub token_colors: Option<Vec<TokenColorRule>>,
}

impl ThemeDocument {
  /// A theme with no colors at all.
  pub fn new(name: impl Into<String>, kind: ThemeType) -> Self {
    Self {
      name: name.into(),
      kind,
      colors: None,
      semantic_highlighting: None,
      semantic_token_colors: None,
      token_colors: None,
    }
  }
}
