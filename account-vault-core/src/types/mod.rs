//! 类型定义模块

mod account;
mod history;
mod import;
mod page;
mod response;

pub use account::{Account, AccountUpdate, ActivationStatus, SoldStatus};
pub use history::{FormattedHistoryGroup, FormattedHistoryRecord, HistoryEntry, HistoryResponse};
pub use import::{
    AccountImportCandidate, BatchImportReport, ImportPreview, ImportResult, SingleImportForm,
    SingleImportOutcome,
};
pub use page::{
    PageMarker, PaginatedResponse, PaginationParams, DEFAULT_MAX_VISIBLE, PAGE_SIZE_OPTIONS,
};
pub use response::ApiResponse;
