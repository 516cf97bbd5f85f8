//! View configuration (language, page size, page-button budget).

use std::path::{Path, PathBuf};

use account_vault_core::error::{CoreError, CoreResult};
use account_vault_core::registry::Language;
use account_vault_core::types::{DEFAULT_MAX_VISIBLE, PAGE_SIZE_OPTIONS};
use serde::{Deserialize, Serialize};

/// Smallest page-button budget the navigation window supports.
const MIN_VISIBLE_PAGES: u32 = 3;

/// Dashboard view configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    /// Label language for history groups and sold-status values.
    pub language: Language,
    /// Rows per page; one of `PAGE_SIZE_OPTIONS`.
    pub page_size: u32,
    /// Page-button budget for the navigation window.
    pub max_visible_pages: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            page_size: PAGE_SIZE_OPTIONS[0],
            max_visible_pages: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl ViewConfig {
    /// Replaces out-of-range values: unknown page sizes fall back to the default,
    /// and the page-button budget is raised to at least 3.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if !PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            log::warn!(
                "Unsupported page size {}, falling back to {}",
                self.page_size,
                PAGE_SIZE_OPTIONS[0]
            );
            self.page_size = PAGE_SIZE_OPTIONS[0];
        }
        self.max_visible_pages = self.max_visible_pages.max(MIN_VISIBLE_PAGES);
        self
    }
}

/// Configuration service trait
pub trait ConfigService: Send + Sync {
    /// Load the configuration
    fn load(&self) -> CoreResult<ViewConfig>;

    /// Save the configuration
    fn save(&self, config: &ViewConfig) -> CoreResult<()>;
}

/// JSON file configuration service.
///
/// A missing file loads as defaults; a malformed one is a `ConfigError`.
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/account-vault/config.json`, when the platform has a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("account-vault").join("config.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> CoreResult<ViewConfig> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", self.path.display());
                return Ok(ViewConfig::default());
            }
            Err(e) => {
                return Err(CoreError::ConfigError(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        let config: ViewConfig = serde_json::from_str(&content).map_err(|e| {
            CoreError::ConfigError(format!("Invalid config {}: {e}", self.path.display()))
        })?;
        Ok(config.normalized())
    }

    fn save(&self, config: &ViewConfig) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CoreError::ConfigError(format!("Failed to create directory: {e}"))
            })?;
        }
        let content = serde_json::to_string_pretty(config)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| {
            CoreError::ConfigError(format!("Failed to write {}: {e}", self.path.display()))
        })
    }
}
