//! Incremental construction of a [`BuildConfig`].
//!
//! ```
//! use brush_lib::builder::{Metadata, Required, ThemeBuilder};
//! use brush_lib::theme::{ThemeType, TokenColorRule};
//!
//! let config = ThemeBuilder::new()
//!   .metadata(Metadata {
//!     version: Some("1.0.0".into()),
//!     ..Metadata::default()
//!   })
//!   .editor([("editor.background", "#1e1e1e")])
//!   .token(TokenColorRule::foreground(["comment"], "#6a9955"))
//!   .finish(Required {
//!     publisher: "acme".into(),
//!     name: "Hello World".into(),
//!     kind: ThemeType::Dark,
//!   });
//!
//! assert_eq!(config.theme.name, "Hello World");
//! ```

use crate::config::BuildConfig;
use crate::theme::{ColorMap, ThemeDocument, ThemeType, TokenColorRule};

/// Optional package metadata. `None` fields leave earlier values in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
  pub description: Option<String>,
  pub display_name: Option<String>,
  pub license: Option<String>,
  pub version: Option<String>,
  pub engine: Option<String>,
}

/// Fields every theme must provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Required {
  pub publisher: String,
  pub name: String,
  pub kind: ThemeType,
}

#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
  metadata: Metadata,
  colors: ColorMap,
  semantic_tokens: Option<ColorMap>,
  token_colors: Vec<TokenColorRule>,
}

impl ThemeBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Merge metadata; later calls override earlier ones field by field.
  pub fn metadata(&mut self, metadata: Metadata) -> &mut Self {
    let Metadata {
      description,
      display_name,
      license,
      version,
      engine,
    } = metadata;
    overlay(&mut self.metadata.description, description);
    overlay(&mut self.metadata.display_name, display_name);
    overlay(&mut self.metadata.license, license);
    overlay(&mut self.metadata.version, version);
    overlay(&mut self.metadata.engine, engine);
    self
  }

  /// Merge editor (workbench) colors.
  pub fn editor<I, K, V>(&mut self, colors: I) -> &mut Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    self
      .colors
      .extend(colors.into_iter().map(|(k, v)| (k.into(), v.into())));
    self
  }

  /// Merge semantic token colors. Enables semantic highlighting.
  pub fn semantic_tokens<I, K, V>(&mut self, colors: I) -> &mut Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    self
      .semantic_tokens
      .get_or_insert_with(ColorMap::new)
      .extend(colors.into_iter().map(|(k, v)| (k.into(), v.into())));
    self
  }

  /// Append a token color rule. Rules keep their insertion order.
  pub fn token(&mut self, rule: TokenColorRule) -> &mut Self {
    self.token_colors.push(rule);
    self
  }

  /// Produce the config. The builder is left untouched and can be reused.
  pub fn finish(&self, required: Required) -> BuildConfig {
    let mut theme = ThemeDocument::new(required.name, required.kind);
    if !self.colors.is_empty() {
      theme.colors = Some(self.colors.clone());
    }
    if let Some(semantic) = &self.semantic_tokens {
      theme.semantic_highlighting = Some(true);
      theme.semantic_token_colors = Some(semantic.clone());
    }
    if !self.token_colors.is_empty() {
      theme.token_colors = Some(self.token_colors.clone());
    }

    let metadata = self.metadata.clone();
    BuildConfig {
      description: metadata.description,
      display_name: metadata.display_name,
      publisher: required.publisher,
      license: metadata.license,
      version: metadata.version,
      engine: metadata.engine,
      theme,
    }
  }
}

fn overlay(slot: &mut Option<String>, value: Option<String>) {
  if value.is_some() {
    *slot = value;
  }
}
