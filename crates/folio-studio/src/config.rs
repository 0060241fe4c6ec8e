//! Studio configuration.
//!
//! Loaded from `~/.config/folio/studio.ron`. Every field has a default, so a
//! partial file only overrides what it names:
//!
//! ```ron
//! (
//!     default_author: "Amy",
//!     preview: (page_size: Letter),
//!     latency: (keywords_ms: 0, titles_ms: 0),
//! )
//! ```
//!
//! A missing file or a file that fails to parse yields the defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_market::SourceLatency;
use folio_types::{DEFAULT_AUTHOR, DEFAULT_TITLE, DocumentMeta};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{Result, StudioError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub default_title: String,
    pub default_author: String,
    pub preview: PreviewConfig,
    pub latency: LatencyConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            default_author: DEFAULT_AUTHOR.to_string(),
            preview: PreviewConfig::default(),
            latency: LatencyConfig::default(),
        }
    }
}

impl StudioConfig {
    pub fn from_ron_str(text: &str) -> Result<Self> {
        ron::from_str(text).map_err(|e| StudioError::Config(e.to_string()))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Metadata for a fresh document.
    pub fn document_meta(&self) -> DocumentMeta {
        DocumentMeta::new(&self.default_title, &self.default_author)
    }
}

/// Paper size handed to the preview renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "Letter",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Line printed above every page.
    pub header: String,
    pub page_size: PageSize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            header: "Created with PDF Market Intelligence".to_string(),
            page_size: PageSize::A4,
        }
    }
}

/// Simulated latency of the external collaborators, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub keywords_ms: u64,
    pub titles_ms: u64,
    pub niches_ms: u64,
    pub payment_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            keywords_ms: 800,
            titles_ms: 1200,
            niches_ms: 1000,
            payment_ms: 1500,
        }
    }
}

impl LatencyConfig {
    pub fn source_latency(&self) -> SourceLatency {
        SourceLatency {
            keywords: Duration::from_millis(self.keywords_ms),
            titles: Duration::from_millis(self.titles_ms),
            niches: Duration::from_millis(self.niches_ms),
        }
    }

    pub fn payment(&self) -> Duration {
        Duration::from_millis(self.payment_ms)
    }

    /// All delays zeroed.
    pub fn instant() -> Self {
        Self {
            keywords_ms: 0,
            titles_ms: 0,
            niches_ms: 0,
            payment_ms: 0,
        }
    }
}

/// Get the config file path (~/.config/folio/studio.ron).
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("folio").join("studio.ron"))
}

/// Load the user's config, falling back to defaults.
pub fn load_config() -> StudioConfig {
    let Some(path) = config_file_path() else {
        info!("No config directory available, using default studio config");
        return StudioConfig::default();
    };
    load_or_default(&path)
}

/// Load `path`, falling back to defaults when it is missing or invalid.
pub fn load_or_default(path: &Path) -> StudioConfig {
    if !path.exists() {
        info!("Studio config not found at {:?}, using defaults", path);
        return StudioConfig::default();
    }

    match StudioConfig::load_from(path) {
        Ok(config) => {
            info!("Loaded studio config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load studio config from {:?}: {}", path, e);
            warn!("Falling back to default studio config");
            StudioConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StudioConfig::default();
        assert_eq!(config.default_title, "Untitled Document");
        assert_eq!(config.default_author, "Your Name");
        assert_eq!(config.preview.page_size, PageSize::A4);
        assert_eq!(config.latency.titles_ms, 1200);
        assert_eq!(config.latency.payment(), Duration::from_millis(1500));
    }

    #[test]
    fn test_partial_ron_overrides() {
        let config = StudioConfig::from_ron_str(
            r#"(default_author: "Amy", preview: (page_size: Letter), latency: (keywords_ms: 5))"#,
        )
        .unwrap();
        assert_eq!(config.default_author, "Amy");
        assert_eq!(config.default_title, "Untitled Document");
        assert_eq!(config.preview.page_size, PageSize::Letter);
        assert_eq!(config.preview.header, "Created with PDF Market Intelligence");
        assert_eq!(config.latency.keywords_ms, 5);
        assert_eq!(config.latency.niches_ms, 1000);
    }

    #[test]
    fn test_bad_ron_is_config_error() {
        let err = StudioConfig::from_ron_str("(default_author: 42").unwrap_err();
        assert!(matches!(err, StudioError::Config(_)));
    }

    #[test]
    fn test_load_or_default_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studio.ron");

        assert_eq!(load_or_default(&path), StudioConfig::default());

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, r#"(default_title: "Field Notes")"#).unwrap();
        drop(file);
        assert_eq!(load_or_default(&path).default_title, "Field Notes");

        std::fs::write(&path, "not ron at all {").unwrap();
        assert_eq!(load_or_default(&path), StudioConfig::default());
    }

    #[test]
    fn test_source_latency_mapping() {
        let latency = LatencyConfig::default().source_latency();
        assert_eq!(latency, SourceLatency::default());
        assert!(LatencyConfig::instant().source_latency().keywords.is_zero());
    }
}
