//! Arena-backed entry tree.
//!
//! Every node of one tree lives in a single generational arena. Children are
//! owned through the parent's `children` list; the `parent` field is a plain
//! index back into the same arena and never owns anything.

use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::record::EntryRecord;

/// Handle of a node inside an [`Entry`] tree.
pub type EntryId = Index;

/// A single labelled node.
#[derive(Debug, Clone)]
pub struct EntryNode {
    /// Display label, also the file stem when the node is a root
    pub title: String,
    /// Index of the parent node, None for the root
    pub parent: Option<EntryId>,
    /// Child indices in insertion order
    pub children: Vec<EntryId>,
}

impl fmt::Display for EntryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// A root entry together with its whole subtree.
///
/// The tree always has a root. Subtrees attached with [`Entry::add_entry`]
/// are moved into this arena, so a node can never become its own ancestor.
#[derive(Debug, Clone)]
pub struct Entry {
    arena: Arena<EntryNode>,
    root: EntryId,
}

impl Entry {
    pub fn new(title: impl Into<String>) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(EntryNode {
            title: title.into(),
            parent: None,
            children: Vec::new(),
        });
        Self { arena, root }
    }

    /// Root entry with the given children attached in order.
    pub fn with_entries(title: impl Into<String>, entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut entry = Self::new(title);
        for child in entries {
            entry.add_entry(child);
        }
        entry
    }

    /// Rebuilds a fully linked tree from its nested record form.
    #[instrument(level = "trace", skip(record), fields(title = %record.title))]
    pub fn from_record(record: &EntryRecord) -> Self {
        let mut entry = Self::new(record.title.clone());
        let root = entry.root;
        for child in &record.entries {
            entry.insert_record(root, child);
        }
        entry
    }

    fn insert_record(&mut self, parent: EntryId, record: &EntryRecord) {
        let idx = self.insert_node(record.title.clone(), parent);
        for child in &record.entries {
            self.insert_record(idx, child);
        }
    }

    /// Nested record of the whole tree, children in order.
    pub fn to_record(&self) -> EntryRecord {
        self.record_at(self.root)
    }

    // Child ids always point into the same arena; indexing panics otherwise.
    fn record_at(&self, idx: EntryId) -> EntryRecord {
        let node = &self.arena[idx];
        EntryRecord {
            title: node.title.clone(),
            entries: node.children.iter().map(|&c| self.record_at(c)).collect(),
        }
    }

    fn insert_node(&mut self, title: String, parent: EntryId) -> EntryId {
        let idx = self.arena.insert(EntryNode {
            title,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(parent) = self.arena.get_mut(parent) {
            parent.children.push(idx);
        }
        idx
    }

    /// Appends `subtree` as the last child of the root.
    ///
    /// Returns the id the subtree's root received in this tree.
    pub fn add_entry(&mut self, subtree: Entry) -> EntryId {
        let root = self.root;
        self.graft(root, &subtree, subtree.root)
    }

    /// Appends `subtree` as the last child of `parent`.
    #[instrument(level = "trace", skip(self, subtree), fields(subtree = %subtree))]
    pub fn add_entry_at(&mut self, parent: EntryId, subtree: Entry) -> DomainResult<EntryId> {
        if !self.arena.contains(parent) {
            return Err(DomainError::UnknownEntry);
        }
        Ok(self.graft(parent, &subtree, subtree.root))
    }

    /// Appends a fresh childless entry under `parent`.
    pub fn add_child(&mut self, parent: EntryId, title: impl Into<String>) -> DomainResult<EntryId> {
        if !self.arena.contains(parent) {
            return Err(DomainError::UnknownEntry);
        }
        Ok(self.insert_node(title.into(), parent))
    }

    fn graft(&mut self, parent: EntryId, source: &Entry, source_idx: EntryId) -> EntryId {
        let node = &source.arena[source_idx];
        let idx = self.insert_node(node.title.clone(), parent);
        for &child in &node.children {
            self.graft(idx, source, child);
        }
        idx
    }

    /// Re-parents `node` (with its subtree) as last child of `new_parent`.
    ///
    /// Fails when `new_parent` is `node` itself or lies below it.
    #[instrument(level = "debug", skip(self))]
    pub fn move_entry(&mut self, node: EntryId, new_parent: EntryId) -> DomainResult<()> {
        if !self.arena.contains(node) || !self.arena.contains(new_parent) {
            return Err(DomainError::UnknownEntry);
        }
        if node == self.root {
            return Err(DomainError::RootImmovable(self.to_string()));
        }
        if self.is_ancestor_or_self(node, new_parent) {
            return Err(DomainError::CycleDetected(self.arena[node].title.clone()));
        }

        if let Some(old_parent) = self.arena[node].parent {
            if let Some(old) = self.arena.get_mut(old_parent) {
                old.children.retain(|&c| c != node);
            }
        }
        self.arena[new_parent].children.push(node);
        self.arena[node].parent = Some(new_parent);
        Ok(())
    }

    /// True if `ancestor` is `idx` or appears on the path from `idx` to the root.
    pub fn is_ancestor_or_self(&self, ancestor: EntryId, idx: EntryId) -> bool {
        let mut current = Some(idx);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.parent(c);
        }
        false
    }

    pub fn root(&self) -> EntryId {
        self.root
    }

    pub fn title(&self) -> &str {
        &self.arena[self.root].title
    }

    pub fn title_of(&self, idx: EntryId) -> Option<&str> {
        self.arena.get(idx).map(|n| n.title.as_str())
    }

    pub fn parent(&self, idx: EntryId) -> Option<EntryId> {
        self.arena.get(idx).and_then(|n| n.parent)
    }

    /// Child ids of `idx` in order; empty for unknown ids.
    pub fn children(&self, idx: EntryId) -> &[EntryId] {
        self.arena
            .get(idx)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// First direct child of `parent` carrying `title`.
    pub fn find_child(&self, parent: EntryId, title: &str) -> Option<EntryId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&c| self.title_of(c) == Some(title))
    }

    /// Follows `titles` downwards from the root, one child per segment.
    pub fn find_path(&self, titles: &[&str]) -> Option<EntryId> {
        titles
            .iter()
            .try_fold(self.root, |idx, title| self.find_child(idx, title))
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Depth-first pre-order traversal yielding `(id, depth, node)`.
    pub fn iter(&self) -> EntryIter<'_> {
        EntryIter::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, idx: EntryId) -> usize {
        if let Some(node) = self.arena.get(idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Titles of all nodes without children, in traversal order.
    pub fn leaf_titles(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, _, node)| node.children.is_empty())
            .map(|(_, _, node)| node.title.as_str())
            .collect()
    }

    fn subtree_eq(&self, idx: EntryId, other: &Entry, other_idx: EntryId) -> bool {
        match (self.arena.get(idx), other.arena.get(other_idx)) {
            (Some(a), Some(b)) => {
                a.title == b.title
                    && a.children.len() == b.children.len()
                    && a.children
                        .iter()
                        .zip(&b.children)
                        .all(|(&x, &y)| self.subtree_eq(x, other, y))
            }
            (None, None) => true,
            _ => false,
        }
    }
}

/// Structural equality: titles and child order, ignoring arena layout.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.subtree_eq(self.root, other, other.root)
    }
}

impl Eq for Entry {}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl From<&EntryRecord> for Entry {
    fn from(record: &EntryRecord) -> Self {
        Entry::from_record(record)
    }
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        entry.to_record()
    }
}

pub struct EntryIter<'a> {
    entry: &'a Entry,
    stack: Vec<(EntryId, usize)>,
}

impl<'a> EntryIter<'a> {
    fn new(entry: &'a Entry) -> Self {
        Self {
            entry,
            stack: vec![(entry.root, 0)],
        }
    }
}

impl<'a> Iterator for EntryIter<'a> {
    type Item = (EntryId, usize, &'a EntryNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, depth)) = self.stack.pop() {
            if let Some(node) = self.entry.arena.get(idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push((child, depth + 1));
                }
                return Some((idx, depth, node));
            }
        }
        None
    }
}
