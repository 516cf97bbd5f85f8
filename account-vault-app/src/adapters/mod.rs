//! Storage adapters for frontends without a remote account store (CLI, tests).

mod memory_store;

pub use memory_store::MemoryAccountStore;
