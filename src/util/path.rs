use std::path::Path;

use crate::domain::MatchMode;

pub trait PathExt {
    /// Whether the file name qualifies as a persisted entry tree.
    fn is_entry_file(&self, mode: MatchMode) -> bool;
    /// File stem as UTF-8, lossily converted.
    fn stem_lossy(&self) -> String;
}

impl PathExt for Path {
    fn is_entry_file(&self, mode: MatchMode) -> bool {
        self.file_name()
            .map(|name| mode.matches(&name.to_string_lossy()))
            .unwrap_or(false)
    }

    fn stem_lossy(&self) -> String {
        self.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
