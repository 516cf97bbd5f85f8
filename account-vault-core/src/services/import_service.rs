//! 账户导入服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::import_parser::{parse_batch, parse_single};
use crate::services::ServiceContext;
use crate::types::{
    AccountImportCandidate, BatchImportReport, ImportPreview, ImportResult, SingleImportForm,
    SingleImportOutcome,
};

/// 账户导入服务
pub struct ImportService {
    ctx: Arc<ServiceContext>,
}

impl ImportService {
    /// 创建导入服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 预览批量导入（不提交）
    #[must_use]
    pub fn preview_batch(&self, raw: &str) -> ImportPreview {
        ImportPreview::from_candidates(parse_batch(raw))
    }

    /// 批量导入
    ///
    /// 缺少邮箱或密码的行在提交前被剔除并计入 `skipped_count`；
    /// 没有任何可导入的行时直接返回错误，不调用存储。
    pub async fn import_batch(&self, raw: &str) -> CoreResult<BatchImportReport> {
        let (importable, skipped): (Vec<AccountImportCandidate>, Vec<AccountImportCandidate>) =
            parse_batch(raw)
                .into_iter()
                .partition(AccountImportCandidate::is_importable);

        if !skipped.is_empty() {
            log::warn!(
                "{} import lines skipped: email and password are required",
                skipped.len()
            );
        }

        if importable.is_empty() {
            return Err(CoreError::ValidationError("导入列表为空".to_string()));
        }

        let result = self.submit(&importable).await?;
        Ok(BatchImportReport {
            result,
            skipped_count: skipped.len(),
        })
    }

    /// 单个账户导入
    ///
    /// 提交前重新校验，表单不完整时返回 [`CoreError::ImportBlocked`]。
    pub async fn import_single(&self, form: &SingleImportForm) -> CoreResult<ImportResult> {
        match parse_single(form) {
            SingleImportOutcome::Ready(candidates) => self.submit(&candidates).await,
            SingleImportOutcome::Blocked => Err(CoreError::ImportBlocked),
        }
    }

    async fn submit(&self, candidates: &[AccountImportCandidate]) -> CoreResult<ImportResult> {
        let result = self.ctx.import_sink().submit_import(candidates).await?;
        log::info!(
            "Import submitted: {} succeeded, {} failed",
            result.success_count,
            result.failed_count
        );
        if !result.failed_emails.is_empty() {
            log::warn!("Rejected by store: {:?}", result.failed_emails);
        }
        Ok(result)
    }
}
