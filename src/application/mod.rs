//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod entry_file;
pub mod error;
pub mod error_ext;
pub mod services;

pub use entry_file::{entry_file_path, load_entry, save_entry, to_pretty_json};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
