//! In-memory account store.
//!
//! Implements `ImportSink` and `HistorySource` over a process-local account list, and
//! records a history entry whenever a tracked field actually changes.

use async_trait::async_trait;
use tokio::sync::RwLock;

use account_vault_core::error::{CoreError, CoreResult};
use account_vault_core::registry::HistoryField;
use account_vault_core::totp::{generate_current, TotpCode};
use account_vault_core::traits::{HistorySource, ImportSink};
use account_vault_core::types::{
    Account, AccountImportCandidate, AccountUpdate, ApiResponse, HistoryEntry, HistoryResponse,
    ImportResult, SoldStatus,
};
use account_vault_core::utils::datetime::{format_timestamp, now_local};

#[derive(Default)]
struct StoreInner {
    accounts: Vec<Account>,
    /// (account id, entry)
    history: Vec<(u64, HistoryEntry)>,
    next_account_id: u64,
    next_history_id: u64,
}

impl StoreInner {
    fn email_taken(&self, email: &str, except: Option<u64>) -> bool {
        self.accounts
            .iter()
            .any(|a| a.email == email && Some(a.id) != except)
    }

    fn account_mut(&mut self, id: u64) -> CoreResult<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(CoreError::AccountNotFound(id))
    }

    fn record(&mut self, account_id: u64, field: HistoryField, old_value: &str, new_value: &str) {
        self.next_history_id += 1;
        let entry = HistoryEntry {
            id: self.next_history_id.to_string(),
            field_name: field.key().to_string(),
            old_value: old_value.to_string(),
            new_value: new_value.to_string(),
            changed_at: format_timestamp(&now_local()),
        };
        self.history.push((account_id, entry));
    }
}

/// Process-local account store.
pub struct MemoryAccountStore {
    inner: RwLock<StoreInner>,
}

impl MemoryAccountStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// All accounts in insertion order.
    pub async fn list_accounts(&self) -> Vec<Account> {
        self.inner.read().await.accounts.clone()
    }

    pub async fn get_account(&self, id: u64) -> Option<Account> {
        self.inner
            .read()
            .await
            .accounts
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    /// Partial update. Changes to password, secret and recovery are recorded in history;
    /// email, remark and status are not.
    pub async fn update_account(&self, id: u64, update: AccountUpdate) -> CoreResult<Account> {
        let mut inner = self.inner.write().await;
        let current = inner.account_mut(id)?.clone();

        if let Some(ref email) = update.email {
            if inner.email_taken(email, Some(id)) {
                return Err(CoreError::DuplicateEmail(email.clone()));
            }
        }

        let tracked = [
            (HistoryField::Password, &current.password, &update.password),
            (HistoryField::Secret, &current.secret, &update.secret),
            (HistoryField::Recovery, &current.recovery, &update.recovery),
        ];
        for (field, old, new) in tracked {
            if let Some(new) = new {
                if new != old {
                    inner.record(id, field, old, new);
                }
            }
        }

        let account = inner.account_mut(id)?;
        if let Some(email) = update.email {
            account.email = email;
        }
        if let Some(password) = update.password {
            account.password = password;
        }
        if let Some(secret) = update.secret {
            account.secret = secret;
        }
        if let Some(recovery) = update.recovery {
            account.recovery = recovery;
        }
        if let Some(remark) = update.remark {
            account.remark = remark;
        }
        if let Some(status) = update.status {
            account.status = status;
        }
        Ok(account.clone())
    }

    /// Flips pro/inactive. Not tracked in history.
    pub async fn toggle_status(&self, id: u64) -> CoreResult<Account> {
        let mut inner = self.inner.write().await;
        let account = inner.account_mut(id)?;
        account.status = account.status.toggled();
        Ok(account.clone())
    }

    /// Flips sold/unsold and records the change.
    pub async fn toggle_sold_status(&self, id: u64) -> CoreResult<Account> {
        let mut inner = self.inner.write().await;
        let old: SoldStatus = inner.account_mut(id)?.sold_status;
        let new = old.toggled();
        inner.record(id, HistoryField::SoldStatus, old.as_raw(), new.as_raw());

        let account = inner.account_mut(id)?;
        account.sold_status = new;
        Ok(account.clone())
    }

    /// Current 2FA code derived from the account's stored secret.
    pub async fn two_factor_code(&self, id: u64) -> CoreResult<TotpCode> {
        let account = self
            .get_account(id)
            .await
            .ok_or(CoreError::AccountNotFound(id))?;
        if account.secret.is_empty() {
            return Err(CoreError::ValidationError(format!(
                "Account {id} has no 2FA secret"
            )));
        }
        generate_current(&account.secret)
    }

    /// Deletes an account together with its history.
    pub async fn delete_account(&self, id: u64) -> CoreResult<()> {
        let mut inner = self.inner.write().await;
        let before = inner.accounts.len();
        inner.accounts.retain(|a| a.id != id);
        if inner.accounts.len() == before {
            return Err(CoreError::AccountNotFound(id));
        }
        inner.history.retain(|(account_id, _)| *account_id != id);
        Ok(())
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImportSink for MemoryAccountStore {
    async fn submit_import(&self, candidates: &[AccountImportCandidate]) -> CoreResult<ImportResult> {
        let mut inner = self.inner.write().await;
        let mut result = ImportResult::default();
        let created_at = now_local();

        for candidate in candidates {
            // Existing emails (including ones added earlier in this batch) are skipped.
            if inner.email_taken(&candidate.email, None) {
                result.failed_count += 1;
                result.failed_emails.push(candidate.email.clone());
                continue;
            }

            inner.next_account_id += 1;
            let account = Account {
                id: inner.next_account_id,
                email: candidate.email.clone(),
                password: candidate.password.clone(),
                recovery: candidate.recovery.clone(),
                secret: candidate.secret.clone(),
                remark: candidate.remark.clone(),
                status: candidate.status,
                sold_status: SoldStatus::Unsold,
                created_at,
            };
            inner.accounts.push(account);
            result.success_count += 1;
        }

        log::debug!(
            "Memory store import: {} added, {} duplicates",
            result.success_count,
            result.failed_count
        );
        Ok(result)
    }
}

#[async_trait]
impl HistorySource for MemoryAccountStore {
    async fn fetch_history(&self, account_id: u64) -> CoreResult<HistoryResponse> {
        let inner = self.inner.read().await;
        // Reverse insertion order first so the stable sort puts later entries first on ties.
        let mut entries: Vec<HistoryEntry> = inner
            .history
            .iter()
            .rev()
            .filter(|(id, _)| *id == account_id)
            .map(|(_, entry)| entry.clone())
            .collect();

        entries.sort_by(|a, b| b.changed_at.cmp(&a.changed_at));
        Ok(ApiResponse::success(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_vault_core::types::ActivationStatus;

    fn candidate(email: &str, password: &str) -> AccountImportCandidate {
        AccountImportCandidate {
            email: email.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    async fn store_with(emails: &[&str]) -> MemoryAccountStore {
        let store = MemoryAccountStore::new();
        let candidates: Vec<_> = emails.iter().map(|e| candidate(e, "p")).collect();
        store.submit_import(&candidates).await.unwrap();
        store
    }

    #[tokio::test]
    async fn import_skips_duplicate_emails() {
        let store = store_with(&["a@x.com"]).await;

        let result = store
            .submit_import(&[
                candidate("a@x.com", "p"),
                candidate("b@x.com", "p"),
                candidate("b@x.com", "q"),
            ])
            .await
            .unwrap();

        assert_eq!(result.success_count, 1);
        assert_eq!(result.failed_count, 2);
        assert_eq!(result.failed_emails, ["a@x.com", "b@x.com"]);
        assert_eq!(store.list_accounts().await.len(), 2);
    }

    #[tokio::test]
    async fn imported_accounts_start_inactive_and_unsold() {
        let store = store_with(&["a@x.com"]).await;
        let account = store.get_account(1).await.unwrap();
        assert_eq!(account.status, ActivationStatus::Inactive);
        assert_eq!(account.sold_status, SoldStatus::Unsold);
    }

    #[tokio::test]
    async fn update_records_only_changed_tracked_fields() {
        let store = store_with(&["a@x.com"]).await;

        store
            .update_account(
                1,
                AccountUpdate {
                    password: Some("p".to_string()),
                    secret: Some("NEWSECRET".to_string()),
                    remark: Some("vip".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let history = store.fetch_history(1).await.unwrap().into_data().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].field_name, "secret");
        assert_eq!(history[0].old_value, "");
        assert_eq!(history[0].new_value, "NEWSECRET");
        assert_eq!(store.get_account(1).await.unwrap().remark, "vip");
    }

    #[tokio::test]
    async fn update_rejects_email_of_another_account() {
        let store = store_with(&["a@x.com", "b@x.com"]).await;
        let update = AccountUpdate {
            email: Some("b@x.com".to_string()),
            ..Default::default()
        };
        let result = store.update_account(1, update).await;
        assert!(matches!(result, Err(CoreError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn update_of_unknown_account_is_not_found_before_email_check() {
        let store = store_with(&["a@x.com"]).await;
        let update = AccountUpdate {
            email: Some("a@x.com".to_string()),
            ..Default::default()
        };
        let result = store.update_account(99, update).await;
        assert!(matches!(result, Err(CoreError::AccountNotFound(99))));
    }

    #[tokio::test]
    async fn same_second_changes_list_latest_first() {
        let store = store_with(&["a@x.com"]).await;
        for password in ["p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9", "p10", "p11"] {
            store
                .update_account(
                    1,
                    AccountUpdate {
                        password: Some(password.to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
        }

        let history = store.fetch_history(1).await.unwrap().into_data().unwrap();
        let values: Vec<_> = history.iter().map(|e| e.new_value.as_str()).collect();
        assert_eq!(
            values,
            ["p11", "p10", "p9", "p8", "p7", "p6", "p5", "p4", "p3", "p2"]
        );
    }

    #[tokio::test]
    async fn sold_toggle_is_recorded_newest_first() {
        let store = store_with(&["a@x.com"]).await;
        store.toggle_sold_status(1).await.unwrap();
        let account = store.toggle_sold_status(1).await.unwrap();
        assert_eq!(account.sold_status, SoldStatus::Unsold);

        let history = store.fetch_history(1).await.unwrap().into_data().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!((history[0].old_value.as_str(), history[0].new_value.as_str()), ("sold", "unsold"));
        assert_eq!((history[1].old_value.as_str(), history[1].new_value.as_str()), ("unsold", "sold"));
    }

    #[tokio::test]
    async fn status_toggle_is_untracked() {
        let store = store_with(&["a@x.com"]).await;
        let account = store.toggle_status(1).await.unwrap();
        assert_eq!(account.status, ActivationStatus::Pro);
        assert!(store.fetch_history(1).await.unwrap().into_data().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_account_has_empty_history() {
        let store = MemoryAccountStore::new();
        let response = store.fetch_history(99).await.unwrap();
        assert!(response.success);
        assert_eq!(response.data, Some(Vec::new()));
        assert!(matches!(
            store.toggle_sold_status(99).await,
            Err(CoreError::AccountNotFound(99))
        ));
    }

    #[tokio::test]
    async fn two_factor_code_uses_stored_secret() {
        let store = MemoryAccountStore::new();
        store
            .submit_import(&[
                AccountImportCandidate {
                    secret: "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ".to_string(),
                    ..candidate("a@x.com", "p")
                },
                candidate("b@x.com", "p"),
            ])
            .await
            .unwrap();

        let code = store.two_factor_code(1).await.unwrap();
        assert_eq!(code.code.len(), 6);
        assert!(code.code.chars().all(|c| c.is_ascii_digit()));
        assert!(matches!(
            store.two_factor_code(2).await,
            Err(CoreError::ValidationError(_))
        ));
        assert!(matches!(
            store.two_factor_code(9).await,
            Err(CoreError::AccountNotFound(9))
        ));
    }

    #[tokio::test]
    async fn delete_drops_history() {
        let store = store_with(&["a@x.com"]).await;
        store.toggle_sold_status(1).await.unwrap();
        store.delete_account(1).await.unwrap();
        assert!(store.get_account(1).await.is_none());
        assert!(store.fetch_history(1).await.unwrap().into_data().unwrap().is_empty());
        assert!(store.delete_account(1).await.is_err());
    }
}
