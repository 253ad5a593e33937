//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::EntryManager;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding settings and the I/O boundary shared by all services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs }
    }

    /// Directory holding the entry files.
    pub fn data_dir(&self) -> PathBuf {
        self.settings.data_dir.clone()
    }

    /// Fresh, not yet loaded manager over the configured data directory.
    pub fn entry_manager(&self) -> EntryManager {
        EntryManager::new(Arc::clone(&self.fs), self.data_dir())
            .with_match_mode(self.settings.match_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchMode;

    #[test]
    fn given_settings_when_building_manager_then_uses_configured_dir_and_mode() {
        let settings = Settings {
            data_dir: PathBuf::from("/tmp/outline-container-test"),
            match_mode: MatchMode::Extension,
        };
        let container = ServiceContainer::new(settings);
        let manager = container.entry_manager();

        assert_eq!(manager.data_path(), container.data_dir().as_path());
        assert_eq!(manager.match_mode(), MatchMode::Extension);
        assert!(manager.is_empty());
    }
}
