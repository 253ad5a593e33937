//! Application services

pub mod entry_manager;

pub use entry_manager::{EntryManager, LoadReport};
