//! Change tracking for reconciling local edits against a database snapshot.
//!
//! Entities are matched by `code`, never by `id`: ids differ between
//! environments. Content comparison likewise ignores `id`, `project_id`,
//! `creator_id` and timestamps, all of which are environment-local.

use serde::{Deserialize, Serialize};

use crate::models::chapter::Chapter;
use crate::models::note::Note;
use crate::models::project::Project;
use crate::models::reference::Reference;

/// An entity participating in local/database reconciliation.
pub trait SyncEntity {
    /// Stable cross-environment identifier.
    fn code(&self) -> &str;

    /// True when the user-visible content of both sides is the same,
    /// ignoring environment-local fields.
    fn same_content(&self, other: &Self) -> bool;
}

/// Diff of one entity collection: local side against a database snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityChanges<T> {
    /// Present locally, absent in the snapshot.
    pub added: Vec<T>,
    /// Present on both sides with differing content; carries the local row.
    pub updated: Vec<T>,
    /// Codes present in the snapshot but absent locally.
    pub deleted: Vec<String>,
}

// Manual impl: the derive would demand `T: Default` for no reason.
impl<T> Default for EntityChanges<T> {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            updated: Vec::new(),
            deleted: Vec::new(),
        }
    }
}

impl<T: SyncEntity + Clone> EntityChanges<T> {
    /// Compute the diff that would turn `remote` into `local`.
    pub fn between(local: &[T], remote: &[T]) -> Self {
        let mut changes = Self::default();
        for l in local {
            match remote.iter().find(|r| r.code() == l.code()) {
                None => changes.added.push(l.clone()),
                Some(r) if !l.same_content(r) => changes.updated.push(l.clone()),
                Some(_) => {}
            }
        }
        for r in remote {
            if !local.iter().any(|l| l.code() == r.code()) {
                changes.deleted.push(r.code().to_string());
            }
        }
        changes
    }
}

impl<T> EntityChanges<T> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.deleted.is_empty()
    }
}

/// The unit a single upload transaction would apply: the project plus the
/// diffs of all its child collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectChanges {
    pub project: Project,
    pub chapters: EntityChanges<Chapter>,
    pub notes: EntityChanges<Note>,
    pub refs: EntityChanges<Reference>,
}

impl ProjectChanges {
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty() && self.notes.is_empty() && self.refs.is_empty()
    }
}

impl SyncEntity for Chapter {
    fn code(&self) -> &str {
        &self.code
    }

    fn same_content(&self, other: &Self) -> bool {
        self.seq == other.seq
            && self.title == other.title
            && self.content == other.content
            && self.status == other.status
            && self.summary == other.summary
            && self.tags == other.tags
            && self.word_goal == other.word_goal
    }
}

impl SyncEntity for Note {
    fn code(&self) -> &str {
        &self.code
    }

    fn same_content(&self, other: &Self) -> bool {
        self.seq == other.seq
            && self.title == other.title
            && self.content == other.content
            && self.tags == other.tags
            && self.category == other.category
            && self.pinned == other.pinned
    }
}

impl SyncEntity for Reference {
    fn code(&self) -> &str {
        &self.code
    }

    fn same_content(&self, other: &Self) -> bool {
        self.seq == other.seq
            && self.title == other.title
            && self.tags == other.tags
            && self.kind == other.kind
            && self.summary == other.summary
            && self.link == other.link
            && self.content == other.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, code: &str, title: &str) -> Note {
        Note {
            id,
            code: code.to_string(),
            project_id: 1,
            creator_id: 1,
            seq: None,
            title: title.to_string(),
            content: None,
            tags: vec![],
            category: None,
            pinned: false,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn identical_sides_yield_empty_diff() {
        let local = vec![note(1, "n1", "a"), note(2, "n2", "b")];
        let remote = local.clone();
        let changes = EntityChanges::between(&local, &remote);
        assert!(changes.is_empty());
    }

    #[test]
    fn added_updated_deleted_classified_by_code() {
        let local = vec![note(1, "n1", "a"), note(2, "n2", "edited")];
        let remote = vec![note(7, "n2", "b"), note(8, "n3", "c")];
        let changes = EntityChanges::between(&local, &remote);
        assert_eq!(changes.added.len(), 1);
        assert_eq!(changes.added[0].code, "n1");
        assert_eq!(changes.updated.len(), 1);
        assert_eq!(changes.updated[0].code, "n2");
        assert_eq!(changes.deleted, vec!["n3".to_string()]);
    }

    #[test]
    fn differing_ids_alone_are_not_updates() {
        // Same content, different environment-local ids and timestamps.
        let local = vec![note(1, "n1", "a")];
        let mut remote = vec![note(99, "n1", "a")];
        remote[0].project_id = 42;
        remote[0].creator_id = 42;
        let changes = EntityChanges::between(&local, &remote);
        assert!(changes.is_empty());
    }

    #[test]
    fn pinned_flip_is_an_update() {
        let local = {
            let mut n = note(1, "n1", "a");
            n.pinned = true;
            vec![n]
        };
        let remote = vec![note(1, "n1", "a")];
        let changes = EntityChanges::between(&local, &remote);
        assert_eq!(changes.updated.len(), 1);
    }
}
