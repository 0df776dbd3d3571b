#![warn(missing_docs)]
//! `comment-toggle-lang` - data-driven comment configuration for `comment-toggle`.
//!
//! This crate intentionally stays lightweight and knows nothing about text buffers or
//! selections. It maps language ids (e.g. `"rust"`, `"css"`) to the comment tokens a host
//! configured for them, and can load that mapping from JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Comment tokens/config for a given language.
///
/// The toggle kernel uses the block tokens; the line token is kept so hosts can load a single
/// configuration file for every comment-related feature.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentConfig {
    /// Line comment token (e.g. `//`, `#`).
    pub line: Option<String>,
    /// Block comment start token (e.g. `/*`).
    pub block_start: Option<String>,
    /// Block comment end token (e.g. `*/`).
    pub block_end: Option<String>,
}

impl CommentConfig {
    /// Create a config that supports only line comments.
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line: Some(token.into()),
            block_start: None,
            block_end: None,
        }
    }

    /// Create a config that supports only block comments.
    pub fn block(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            line: None,
            block_start: Some(start.into()),
            block_end: Some(end.into()),
        }
    }

    /// Create a config that supports both line and block comments.
    pub fn line_and_block(
        line: impl Into<String>,
        block_start: impl Into<String>,
        block_end: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line.into()),
            block_start: Some(block_start.into()),
            block_end: Some(block_end.into()),
        }
    }

    /// Returns `true` if both block comment tokens are configured.
    pub fn has_block(&self) -> bool {
        self.block_tokens().is_some()
    }

    /// The `(start, end)` block tokens, or `None` unless both are present and non-empty.
    pub fn block_tokens(&self) -> Option<(&str, &str)> {
        let start = self.block_start.as_deref().filter(|s| !s.is_empty())?;
        let end = self.block_end.as_deref().filter(|s| !s.is_empty())?;
        Some((start, end))
    }
}

/// Lookup of comment configuration by language id.
pub trait CommentConfigProvider {
    /// Returns the comment configuration registered for `language`, if any.
    fn comment_config(&self, language: &str) -> Option<&CommentConfig>;
}

/// Errors produced while loading a [`LanguageRegistry`].
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The configuration document is not valid JSON or has the wrong shape.
    #[error("invalid comment configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// A map from language id to [`CommentConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageRegistry {
    configs: HashMap<String, CommentConfig>,
}

impl LanguageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with tokens for common languages.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for language in ["c", "cpp", "csharp", "go", "java", "javascript", "rust", "typescript"] {
            registry.register(language, CommentConfig::line_and_block("//", "/*", "*/"));
        }
        registry.register("css", CommentConfig::block("/*", "*/"));
        registry.register("html", CommentConfig::block("<!--", "-->"));
        registry.register("xml", CommentConfig::block("<!--", "-->"));
        registry.register("lua", CommentConfig::line_and_block("--", "--[[", "]]"));
        registry.register("haskell", CommentConfig::line_and_block("--", "{-", "-}"));
        registry.register("ocaml", CommentConfig::block("(*", "*)"));
        registry.register("python", CommentConfig::line("#"));
        registry.register("shellscript", CommentConfig::line("#"));
        registry
    }

    /// Load a registry from a JSON object keyed by language id.
    ///
    /// ```
    /// use comment_toggle_lang::{CommentConfigProvider, LanguageRegistry};
    ///
    /// let registry = LanguageRegistry::from_json_str(
    ///     r#"{ "sql": { "line": "--", "block_start": "/*", "block_end": "*/" } }"#,
    /// )
    /// .unwrap();
    /// assert!(registry.comment_config("sql").unwrap().has_block());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let configs: HashMap<String, CommentConfig> = serde_json::from_str(json)?;
        tracing::debug!(languages = configs.len(), "loaded comment configuration");
        Ok(Self { configs })
    }

    /// Register (or replace) the configuration for `language`.
    pub fn register(&mut self, language: impl Into<String>, config: CommentConfig) {
        self.configs.insert(language.into(), config);
    }

    /// Returns the configuration for `language`.
    pub fn get(&self, language: &str) -> Option<&CommentConfig> {
        self.configs.get(language)
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Returns `true` if no language is registered.
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

impl CommentConfigProvider for LanguageRegistry {
    fn comment_config(&self, language: &str) -> Option<&CommentConfig> {
        self.get(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_block_tokens_require_both_non_empty() {
        assert_eq!(CommentConfig::block("/*", "*/").block_tokens(), Some(("/*", "*/")));
        assert!(!CommentConfig::line("#").has_block());
        assert!(!CommentConfig::block("/*", "").has_block());

        let start_only = CommentConfig {
            block_start: Some("/*".to_string()),
            ..CommentConfig::default()
        };
        assert_eq!(start_only.block_tokens(), None);
    }

    #[test]
    fn test_defaults() {
        let registry = LanguageRegistry::with_defaults();
        assert_eq!(
            registry.comment_config("html").and_then(|c| c.block_tokens()),
            Some(("<!--", "-->"))
        );
        assert!(!registry.comment_config("python").unwrap().has_block());
        assert!(registry.comment_config("plaintext").is_none());
    }

    #[test]
    fn test_from_json_partial_entries() {
        let registry = LanguageRegistry::from_json_str(
            r#"{
                "c": { "line": "//", "block_start": "/*", "block_end": "*/" },
                "half": { "block_start": "/*" }
            }"#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("c"),
            Some(&CommentConfig::line_and_block("//", "/*", "*/"))
        );
        assert!(!registry.get("half").unwrap().has_block());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = LanguageRegistry::from_json_str(r#"{ "c": 1 }"#).unwrap_err();
        assert!(matches!(err, RegistryError::Json(_)));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = LanguageRegistry::new();
        assert!(registry.is_empty());
        registry.register("x", CommentConfig::line("#"));
        registry.register("x", CommentConfig::block("(*", "*)"));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("x").unwrap().has_block());
    }
}
