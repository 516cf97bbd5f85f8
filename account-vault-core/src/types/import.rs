//! Import related types.

use serde::{Deserialize, Serialize};

use crate::types::ActivationStatus;

/// One parsed account record awaiting operator confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountImportCandidate {
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
    /// Recovery email (empty when absent).
    #[serde(default)]
    pub recovery: String,
    /// 2FA secret with every whitespace character removed.
    #[serde(default)]
    pub secret: String,
    /// Free-form remark (empty when absent).
    #[serde(default)]
    pub remark: String,
    /// Imported accounts always start as not activated.
    #[serde(default)]
    pub status: ActivationStatus,
}

impl AccountImportCandidate {
    /// Whether the candidate carries both an email and a password.
    #[must_use]
    pub fn is_importable(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// Single-account import form, as typed by the operator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SingleImportForm {
    pub email: String,
    pub password: String,
    pub recovery: String,
    pub secret: String,
}

/// Result of normalizing a single-account form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleImportOutcome {
    /// The form is complete; holds exactly one candidate.
    Ready(Vec<AccountImportCandidate>),
    /// Email or password is empty after trimming; nothing may be submitted.
    Blocked,
}

impl SingleImportOutcome {
    /// Whether submission must be refused.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked)
    }
}

/// Import preview shown before submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreview {
    /// Every parsed line, valid or not, in input order.
    pub candidates: Vec<AccountImportCandidate>,
    /// Candidates with both email and password.
    pub valid_count: usize,
    /// Candidates missing email or password.
    pub invalid_count: usize,
}

impl ImportPreview {
    /// Build a preview with validity counts.
    #[must_use]
    pub fn from_candidates(candidates: Vec<AccountImportCandidate>) -> Self {
        let valid_count = candidates.iter().filter(|c| c.is_importable()).count();
        let invalid_count = candidates.len() - valid_count;
        Self {
            candidates,
            valid_count,
            invalid_count,
        }
    }
}

/// Result payload reported by the account store for one submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    /// Number of accounts imported successfully.
    pub success_count: usize,
    /// Number of candidates the store rejected.
    pub failed_count: usize,
    /// Emails of the rejected candidates.
    pub failed_emails: Vec<String>,
}

/// Batch import report: the store's result plus what was held back locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchImportReport {
    /// Store-side result.
    pub result: ImportResult,
    /// Candidates skipped before submission (missing email or password).
    pub skipped_count: usize,
}
