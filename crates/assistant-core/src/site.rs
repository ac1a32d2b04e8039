//! Site Configuration
//!
//! Page metadata for the root layout plus the theme.

use serde::{Deserialize, Serialize};

use crate::error::{ChatError, Result};
use crate::theme::Theme;

/// Document-level metadata
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// `lang` attribute of the root element
    pub lang: String,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: "Legal Document Assistant".into(),
            description: "AI-powered legal document generation through conversation".into(),
            lang: "en".into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub metadata: PageMetadata,
    pub theme: Theme,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.metadata.title.trim().is_empty() {
            return Err(ChatError::Config("metadata.title is empty".into()));
        }
        config.theme.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_metadata_override() {
        let config = SiteConfig::from_json(r#"{"metadata": {"lang": "de"}}"#).unwrap();
        assert_eq!(config.metadata.lang, "de");
        assert_eq!(config.metadata.title, "Legal Document Assistant");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            SiteConfig::from_json(r#"{"metadata": {"title": ""}}"#),
            Err(ChatError::Config(_))
        ));
        assert!(matches!(SiteConfig::from_json("[1, 2]"), Err(ChatError::Json(_))));
    }
}
