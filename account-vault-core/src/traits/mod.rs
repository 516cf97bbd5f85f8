//! External collaborator trait definitions

mod history_source;
mod import_sink;

pub use history_source::HistorySource;
pub use import_sink::ImportSink;
