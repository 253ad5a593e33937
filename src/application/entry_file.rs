//! Single-file persistence of an entry tree.
//!
//! A root entry is stored as `<dir>/<title>.json`, pretty-printed with a
//! four-space indent and non-ASCII text written verbatim.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Entry, EntryRecord, RawEntryRecord, ENTRY_FILE_EXTENSION};
use crate::infrastructure::traits::FileSystem;

const JSON_INDENT: &[u8] = b"    ";

/// Path of the file a root entry titled `title` is stored in.
pub fn entry_file_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{title}.{ENTRY_FILE_EXTENSION}"))
}

/// Serialise the entry's record form as indented JSON.
pub fn to_pretty_json(entry: &Entry) -> ApplicationResult<String> {
    let record = entry.to_record();
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    record
        .serialize(&mut ser)
        .map_err(|source| ApplicationError::Serialize {
            title: entry.title().to_string(),
            source,
        })?;
    String::from_utf8(buf).map_err(|e| ApplicationError::OperationFailed {
        context: format!("encode entry '{}'", entry.title()),
        source: Box::new(e),
    })
}

/// Writes `entry` to `<dir>/<title>.json`, overwriting unconditionally.
///
/// `dir` must already exist.
#[instrument(level = "debug", skip(fs, entry), fields(title = %entry))]
pub fn save_entry(fs: &dyn FileSystem, entry: &Entry, dir: &Path) -> ApplicationResult<PathBuf> {
    let path = entry_file_path(dir, entry.title());
    let json = to_pretty_json(entry)?;
    fs.write(&path, &json)
        .with_path_context("write entry file", &path)?;
    debug!("saved {} nodes to {}", entry.len(), path.display());
    Ok(path)
}

/// Reads and rebuilds the entry tree stored in `file`.
#[instrument(level = "debug", skip(fs))]
pub fn load_entry(fs: &dyn FileSystem, file: &Path) -> ApplicationResult<Entry> {
    let content = fs
        .read_to_string(file)
        .with_path_context("read entry file", file)?;
    parse_entry(&content, file)
}

/// Parses JSON text into an entry tree; `path` is only used in errors.
pub fn parse_entry(content: &str, path: &Path) -> ApplicationResult<Entry> {
    let raw: RawEntryRecord =
        serde_json::from_str(content).map_err(|source| ApplicationError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let record = EntryRecord::try_from(raw)?;
    Ok(Entry::from_record(&record))
}
