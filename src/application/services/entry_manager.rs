//! Directory-backed collection of root entries
//!
//! Loading is two-phase: [`EntryManager::discover`] lists candidate files,
//! then each candidate is parsed. The [`LoadPolicy`] decides whether a bad
//! file aborts the load or is skipped.
//!
//! There is no locking: concurrent writers to the same directory race, and a
//! failing `save` leaves earlier files written and later ones untouched.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::entry_file::{load_entry, save_entry};
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Entry, LoadPolicy, MatchMode};
use crate::infrastructure::traits::FileSystem;
use crate::util::path::PathExt;

/// Outcome of [`EntryManager::load_with`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Files parsed into entries, in load order
    pub loaded: Vec<PathBuf>,
    /// Files that failed under [`LoadPolicy::BestEffort`], with the reason
    pub skipped: Vec<(PathBuf, String)>,
    /// True when the data directory did not exist and was created
    pub created: bool,
}

/// Owns the root entries persisted in one data directory.
pub struct EntryManager {
    fs: Arc<dyn FileSystem>,
    data_path: PathBuf,
    match_mode: MatchMode,
    entries: Vec<Entry>,
}

impl EntryManager {
    /// Does not touch the file system.
    pub fn new(fs: Arc<dyn FileSystem>, data_path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            data_path: data_path.into(),
            match_mode: MatchMode::default(),
            entries: Vec::new(),
        }
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First root entry titled `title`.
    pub fn get(&self, title: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.title() == title)
    }

    /// Like [`EntryManager::get`] but fails with `EntryNotFound`.
    pub fn require(&self, title: &str) -> ApplicationResult<&Entry> {
        self.get(title)
            .ok_or_else(|| ApplicationError::EntryNotFound(title.to_string()))
    }

    /// Candidate entry files in the data directory, sorted by file name.
    #[instrument(level = "debug", skip(self), fields(dir = %self.data_path.display()))]
    pub fn discover(&self) -> ApplicationResult<Vec<PathBuf>> {
        let files = self
            .fs
            .list_files(&self.data_path)
            .with_path_context("list data directory", &self.data_path)?;
        let candidates: Vec<PathBuf> = files
            .into_iter()
            .filter(|p| p.is_entry_file(self.match_mode))
            .collect();
        debug!("discovered {} entry files", candidates.len());
        Ok(candidates)
    }

    /// Replaces the in-memory entries with the directory contents, failing
    /// on the first unreadable or malformed file.
    ///
    /// Creates the data directory when missing.
    pub fn load(&mut self) -> ApplicationResult<&mut Self> {
        self.load_with(LoadPolicy::FailFast)?;
        Ok(self)
    }

    /// Replaces the in-memory entries with the directory contents.
    ///
    /// Under [`LoadPolicy::FailFast`] an error leaves the entries parsed so
    /// far in place.
    #[instrument(level = "debug", skip(self), fields(dir = %self.data_path.display()))]
    pub fn load_with(&mut self, policy: LoadPolicy) -> ApplicationResult<LoadReport> {
        self.entries.clear();
        let mut report = LoadReport::default();

        if !self.fs.is_dir(&self.data_path) {
            self.fs
                .create_dir_all(&self.data_path)
                .with_path_context("create data directory", &self.data_path)?;
            info!("created data directory {}", self.data_path.display());
            report.created = true;
            return Ok(report);
        }

        for file in self.discover()? {
            match load_entry(self.fs.as_ref(), &file) {
                Ok(entry) => {
                    self.entries.push(entry);
                    report.loaded.push(file);
                }
                Err(e) => match policy {
                    LoadPolicy::FailFast => return Err(e),
                    LoadPolicy::BestEffort => {
                        warn!("skipping {}: {}", file.display(), e);
                        report.skipped.push((file, e.to_string()));
                    }
                },
            }
        }

        debug!(
            "loaded {} entries, skipped {}",
            report.loaded.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Appends a new childless root entry.
    pub fn add_entry(&mut self, title: impl Into<String>) -> &mut Entry {
        let index = self.entries.len();
        self.entries.push(Entry::new(title));
        &mut self.entries[index]
    }

    /// Root entry titled `title`, created when absent.
    pub fn get_or_add(&mut self, title: &str) -> &mut Entry {
        match self.entries.iter().position(|e| e.title() == title) {
            Some(index) => &mut self.entries[index],
            None => self.add_entry(title),
        }
    }

    /// Writes every root entry to its own file in the data directory.
    #[instrument(level = "debug", skip(self), fields(dir = %self.data_path.display()))]
    pub fn save(&self) -> ApplicationResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            written.push(save_entry(self.fs.as_ref(), entry, &self.data_path)?);
        }
        info!("saved {} entries", written.len());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::RealFileSystem;
    use tempfile::TempDir;

    fn manager(dir: &Path) -> EntryManager {
        EntryManager::new(Arc::new(RealFileSystem), dir)
    }

    #[test]
    fn given_new_manager_when_created_then_nothing_touched() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("data");
        let manager = manager(&data);

        assert!(manager.is_empty());
        assert!(!data.exists());
    }

    #[test]
    fn given_added_entries_when_looking_up_then_found_by_title() {
        let temp = TempDir::new().unwrap();
        let mut manager = manager(temp.path());
        manager.add_entry("Fruit");
        manager.add_entry("Veg");

        assert_eq!(manager.len(), 2);
        assert_eq!(manager.get("Veg").map(|e| e.title()), Some("Veg"));
        assert!(manager.get("Meat").is_none());
        assert!(matches!(
            manager.require("Meat"),
            Err(ApplicationError::EntryNotFound(t)) if t == "Meat"
        ));
    }

    #[test]
    fn given_existing_title_when_get_or_add_then_no_duplicate() {
        let temp = TempDir::new().unwrap();
        let mut manager = manager(temp.path());
        manager.add_entry("Fruit");
        manager.get_or_add("Fruit");
        manager.get_or_add("Veg");

        let titles: Vec<_> = manager.entries().iter().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["Fruit", "Veg"]);
    }
}
