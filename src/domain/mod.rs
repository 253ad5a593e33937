//! Domain layer: entry trees and their record form
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod entities;
pub mod error;
pub mod record;
pub mod render;

pub use arena::{Entry, EntryId, EntryIter, EntryNode};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use record::{EntryRecord, RawEntryRecord};
pub use render::TreeNodeConvert;
