//! Account Vault Core Library
//!
//! Provides the input-normalization and derived-view logic of the account dashboard:
//! - Import Parser: pasted text / single form -> import candidates
//! - History Formatter: flat change history -> field-grouped display records
//! - Page Window: current/total pages -> page-number markers with ellipses
//! - TOTP: stored 2FA secret -> current verification code
//!
//! The pure functions never fail. Collaborators that fetch history or accept imports are
//! abstracted through traits, so each platform injects its own implementation.

pub mod account_list;
pub mod error;
pub mod history;
pub mod import_parser;
pub mod pagination;
pub mod registry;
pub mod services;
pub mod totp;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use history::{format_history, format_history_in};
pub use import_parser::{parse_batch, parse_single};
pub use pagination::{page_window, paginate, PageInfo};
pub use registry::{HistoryField, Language};
pub use services::ServiceContext;
pub use totp::TotpCode;
pub use traits::{HistorySource, ImportSink};
