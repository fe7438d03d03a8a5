//! Parent-link walking shared by every store implementation.
//!
//! The walkers are plain state machines: the caller feeds them rows, they
//! decide which id to fetch next and enforce ordering, the NotFound rule,
//! and cycle detection.

use std::collections::{HashMap, HashSet, VecDeque};

use drive_core::error::AppError;
use drive_core::result::AppResult;
use drive_entity::{Folder, FolderId};

/// Message used when a folder in an ancestor chain cannot be resolved.
pub const MISSING_PARENT: &str = "Parent folder not found";

/// Incremental root-first ancestor chain builder.
#[derive(Debug)]
pub struct AncestorWalk {
    start: FolderId,
    pending: Option<FolderId>,
    seen: HashSet<FolderId>,
    chain: VecDeque<Folder>,
}

impl AncestorWalk {
    /// Start a walk at `start`.
    pub fn new(start: FolderId) -> Self {
        Self {
            start,
            pending: Some(start),
            seen: HashSet::new(),
            chain: VecDeque::new(),
        }
    }

    /// The next folder id to look up, or `None` once a root was reached.
    pub fn next_id(&self) -> AppResult<Option<FolderId>> {
        match self.pending {
            Some(id) if self.seen.contains(&id) => Err(AppError::conflict(format!(
                "Cycle detected in parent chain of folder {}",
                self.start
            ))),
            other => Ok(other),
        }
    }

    /// Record the row fetched for the id returned by [`Self::next_id`].
    pub fn push(&mut self, folder: Option<Folder>) -> AppResult<()> {
        let folder = folder.ok_or_else(|| AppError::not_found(MISSING_PARENT))?;
        self.seen.insert(folder.id);
        self.pending = folder.parent;
        self.chain.push_front(folder);
        Ok(())
    }

    /// The completed chain, root first.
    pub fn finish(self) -> Vec<Folder> {
        self.chain.into()
    }
}

/// Order an unordered set of rows (e.g. from a recursive query) into the
/// ancestor chain of `start`, with the same failure rules as a point-lookup
/// walk.
pub fn assemble_ancestors(start: FolderId, rows: Vec<Folder>) -> AppResult<Vec<Folder>> {
    let mut by_id: HashMap<FolderId, Folder> = rows.into_iter().map(|f| (f.id, f)).collect();
    let mut walk = AncestorWalk::new(start);
    while let Some(next) = walk.next_id()? {
        walk.push(by_id.remove(&next))?;
    }
    Ok(walk.finish())
}

/// Level-by-level descendant collector.
#[derive(Debug)]
pub struct DescendantLevels {
    seen: HashSet<FolderId>,
    frontier: Vec<FolderId>,
    collected: Vec<Folder>,
}

impl DescendantLevels {
    /// Start below `root`.
    pub fn new(root: FolderId) -> Self {
        Self {
            seen: HashSet::from([root]),
            frontier: vec![root],
            collected: Vec::new(),
        }
    }

    /// Parent ids whose children make up the next level.
    pub fn next_level(&mut self) -> Option<Vec<FolderId>> {
        if self.frontier.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.frontier))
        }
    }

    /// Record one level of children. Already-visited folders are dropped.
    pub fn push_level(&mut self, mut level: Vec<Folder>) {
        level.sort_by_key(|f| f.id);
        for folder in level {
            if self.seen.insert(folder.id) {
                self.frontier.push(folder.id);
                self.collected.push(folder);
            }
        }
    }

    /// All collected descendants, ordered by depth then id.
    pub fn finish(self) -> Vec<Folder> {
        self.collected
    }
}
