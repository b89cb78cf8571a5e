//! Application configuration and document loading.

use std::path::PathBuf;

use folio_core::{WidgetError, WidgetStore};
use peniko::Color;

/// Environment variable naming the document to open.
pub const DOCUMENT_ENV: &str = "FOLIO_DOCUMENT";

/// Resume shown when no document is given.
const SAMPLE_RESUME: &str = include_str!("../assets/sample_resume.json");

/// Errors raised while opening a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid document: {0}")]
    Widget(#[from] WidgetError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Desk color behind the sheet.
    pub background_color: Color,
    /// JSON widget list to open. The bundled sample is used when unset.
    pub document: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            width: 1280,
            height: 800,
            background_color: Color::from_rgba8(241, 239, 236, 255),
            document: None,
        }
    }
}

impl AppConfig {
    /// Build from command-line arguments, falling back to [`DOCUMENT_ENV`].
    ///
    /// The first positional argument is the document path.
    pub fn from_env() -> Self {
        let arg = std::env::args().nth(1);
        let var = std::env::var(DOCUMENT_ENV).ok();
        Self::from_sources(arg, var)
    }

    fn from_sources(arg: Option<String>, var: Option<String>) -> Self {
        let document = arg
            .or(var)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        Self {
            document,
            ..Self::default()
        }
    }

    /// Open the configured document, or the bundled sample.
    pub fn load_store(&self) -> Result<WidgetStore, DocumentError> {
        let Some(path) = &self.document else {
            log::info!("No document given, opening sample resume");
            return Ok(WidgetStore::from_json(SAMPLE_RESUME)?);
        };
        let json = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.clone(),
            source,
        })?;
        let store = WidgetStore::from_json(&json)?;
        log::info!("Opened {:?} ({} widgets)", path, store.len());
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::WidgetKind;

    #[test]
    fn test_argument_wins_over_env() {
        let config = AppConfig::from_sources(Some("a.json".into()), Some("b.json".into()));
        assert_eq!(config.document, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn test_env_fallback_and_blank() {
        let config = AppConfig::from_sources(None, Some("b.json".into()));
        assert_eq!(config.document, Some(PathBuf::from("b.json")));
        assert_eq!(AppConfig::from_sources(None, Some("  ".into())).document, None);
    }

    #[test]
    fn test_sample_resume_loads() {
        let store = AppConfig::default().load_store().unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.widgets()[0].kind(), WidgetKind::BasicInfo);
        assert!(store.selected_id().is_none());
    }

    #[test]
    fn test_missing_file() {
        let config = AppConfig {
            document: Some(PathBuf::from("/nonexistent/folio/resume.json")),
            ..AppConfig::default()
        };
        assert!(matches!(config.load_store(), Err(DocumentError::Io { .. })));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let path = std::env::temp_dir().join(format!("folio-test-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{ "id": "x", "type": "Chart" }]"#).unwrap();
        let config = AppConfig {
            document: Some(path.clone()),
            ..AppConfig::default()
        };
        let result = config.load_store();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(DocumentError::Widget(WidgetError::UnknownType(_)))
        ));
    }
}
