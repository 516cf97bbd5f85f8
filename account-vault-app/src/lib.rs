//! Platform-agnostic application bootstrap for Account Vault.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (adapter injection).

pub mod adapters;
pub mod config;

use std::sync::Arc;

use account_vault_core::error::{CoreError, CoreResult};
use account_vault_core::pagination::{page_window, PageInfo};
use account_vault_core::services::{HistoryService, ImportService, ServiceContext};
use account_vault_core::traits::{HistorySource, ImportSink};
use account_vault_core::types::{FormattedHistoryGroup, PageMarker, PaginationParams};

use crate::config::ViewConfig;

/// Platform-agnostic application state.
///
/// Holds all services, the `ServiceContext` and the view configuration. Every frontend
/// constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds the history source and import sink)
    pub ctx: Arc<ServiceContext>,
    /// Import service
    pub import_service: ImportService,
    /// History service
    pub history_service: HistoryService,
    /// View configuration
    pub config: ViewConfig,
}

impl AppState {
    /// History of one account, grouped and labelled in the configured language.
    pub async fn account_history(&self, account_id: u64) -> Vec<FormattedHistoryGroup> {
        self.history_service
            .formatted_history_in(account_id, self.config.language)
            .await
    }

    /// Page markers for the navigation bar, using the configured button budget.
    #[must_use]
    pub fn page_window(&self, current_page: u32, total_pages: u32) -> Vec<PageMarker> {
        page_window(current_page, total_pages, self.config.max_visible_pages)
    }

    /// Pagination state for a list of `total_items` rows at the configured page size.
    #[must_use]
    pub fn page_info(&self, current_page: u32, total_items: u32) -> PageInfo {
        PageInfo::new(current_page, total_items, self.config.page_size)
    }

    /// Request parameters for `page` at the configured page size.
    #[must_use]
    pub fn pagination_params(&self, page: u32) -> PaginationParams {
        PaginationParams {
            page,
            page_size: self.config.page_size,
        }
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `history_source`: where change history is fetched from
/// - `import_sink`: where import batches are submitted
///
/// # Optional
/// - `config`: defaults to `ViewConfig::default()`
pub struct AppStateBuilder {
    history_source: Option<Arc<dyn HistorySource>>,
    import_sink: Option<Arc<dyn ImportSink>>,
    config: Option<ViewConfig>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            history_source: None,
            import_sink: None,
            config: None,
        }
    }

    #[must_use]
    pub fn history_source(mut self, source: Arc<dyn HistorySource>) -> Self {
        self.history_source = Some(source);
        self
    }

    #[must_use]
    pub fn import_sink(mut self, sink: Arc<dyn ImportSink>) -> Self {
        self.import_sink = Some(sink);
        self
    }

    #[must_use]
    pub fn config(mut self, config: ViewConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let history_source = self.history_source.ok_or_else(|| {
            CoreError::ValidationError("history_source is required".to_string())
        })?;
        let import_sink = self
            .import_sink
            .ok_or_else(|| CoreError::ValidationError("import_sink is required".to_string()))?;
        let config = self.config.unwrap_or_default().normalized();

        let ctx = Arc::new(ServiceContext::new(history_source, import_sink));
        let import_service = ImportService::new(Arc::clone(&ctx));
        let history_service = HistoryService::new(Arc::clone(&ctx));

        log::debug!(
            "AppState built: language={}, page_size={}, max_visible_pages={}",
            config.language.code(),
            config.page_size,
            config.max_visible_pages
        );

        Ok(AppState {
            ctx,
            import_service,
            history_service,
            config,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
