//! Import submission abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{AccountImportCandidate, ImportResult};

/// Import submission Trait
///
/// Receives candidates that have already passed the email/password check.
#[async_trait]
pub trait ImportSink: Send + Sync {
    /// Submit candidates to the account store
    ///
    /// # Arguments
    /// * `candidates` - Importable candidates, in operator order
    async fn submit_import(&self, candidates: &[AccountImportCandidate]) -> CoreResult<ImportResult>;
}
