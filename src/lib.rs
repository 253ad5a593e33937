//! Hierarchical lists of named entries, persisted as one JSON document per
//! top-level entry in a flat data directory.
//!
//! ```no_run
//! use std::sync::Arc;
//! use outline::application::services::EntryManager;
//! use outline::infrastructure::traits::RealFileSystem;
//!
//! let mut manager = EntryManager::new(Arc::new(RealFileSystem), "/tmp/store");
//! manager.load()?.add_entry("Fruit");
//! manager.save()?;
//! # Ok::<(), outline::application::ApplicationError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::services::EntryManager;
pub use domain::{Entry, EntryId, EntryRecord};
