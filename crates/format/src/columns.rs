//! Column-oriented snapshot collections.
//!
//! The local load path keeps each entity collection as parallel per-field
//! vectors, mirroring how the desktop app held a loaded project in memory.
//! Row structs are re-derived on demand: `to_rows` (and the iterators built
//! on it) never consume or mutate the snapshot, so repeated conversions of
//! the same snapshot yield identical sequences.
//!
//! Invariant: all vectors of one collection have equal length. `push` is the
//! only way to grow a collection, which keeps them in lockstep. Collections
//! are never read from disk directly; only row structs are (de)serialized.

use draftbase_core::types::{DbId, Timestamp};
use draftbase_db::models::{Chapter, Note, Reference};

/// Column store for chapters.
#[derive(Debug, Clone, Default)]
pub struct ChapterColumns {
    pub ids: Vec<DbId>,
    pub codes: Vec<String>,
    pub project_ids: Vec<DbId>,
    pub creator_ids: Vec<DbId>,
    pub seqs: Vec<Option<i32>>,
    pub titles: Vec<String>,
    pub contents: Vec<Option<String>>,
    pub statuses: Vec<String>,
    pub summaries: Vec<Option<String>>,
    pub tags: Vec<Vec<String>>,
    pub word_goals: Vec<i32>,
    pub created_ats: Vec<Timestamp>,
    pub updated_ats: Vec<Timestamp>,
}

impl ChapterColumns {
    pub fn from_rows(rows: Vec<Chapter>) -> Self {
        let mut cols = Self::default();
        for row in rows {
            cols.push(row);
        }
        cols
    }

    pub fn push(&mut self, row: Chapter) {
        self.ids.push(row.id);
        self.codes.push(row.code);
        self.project_ids.push(row.project_id);
        self.creator_ids.push(row.creator_id);
        self.seqs.push(row.seq);
        self.titles.push(row.title);
        self.contents.push(row.content);
        self.statuses.push(row.status);
        self.summaries.push(row.summary);
        self.tags.push(row.tags);
        self.word_goals.push(row.word_goal);
        self.created_ats.push(row.created_at);
        self.updated_ats.push(row.updated_at);
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    fn row(&self, i: usize) -> Chapter {
        Chapter {
            id: self.ids[i],
            code: self.codes[i].clone(),
            project_id: self.project_ids[i],
            creator_id: self.creator_ids[i],
            seq: self.seqs[i],
            title: self.titles[i].clone(),
            content: self.contents[i].clone(),
            status: self.statuses[i].clone(),
            summary: self.summaries[i].clone(),
            tags: self.tags[i].clone(),
            word_goal: self.word_goals[i],
            created_at: self.created_ats[i],
            updated_at: self.updated_ats[i],
        }
    }

    /// Re-derive the row-oriented form of the snapshot.
    pub fn to_rows(&self) -> Vec<Chapter> {
        self.iter().collect()
    }

    /// Iterate over rows without consuming the snapshot. Every call starts a
    /// fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = Chapter> + '_ {
        (0..self.len()).map(|i| self.row(i))
    }
}

/// Column store for notes.
#[derive(Debug, Clone, Default)]
pub struct NoteColumns {
    pub ids: Vec<DbId>,
    pub codes: Vec<String>,
    pub project_ids: Vec<DbId>,
    pub creator_ids: Vec<DbId>,
    pub seqs: Vec<Option<i32>>,
    pub titles: Vec<String>,
    pub contents: Vec<Option<String>>,
    pub tags: Vec<Vec<String>>,
    pub categories: Vec<Option<String>>,
    pub pinned: Vec<bool>,
    pub created_ats: Vec<Timestamp>,
    pub updated_ats: Vec<Timestamp>,
}

impl NoteColumns {
    pub fn from_rows(rows: Vec<Note>) -> Self {
        let mut cols = Self::default();
        for row in rows {
            cols.push(row);
        }
        cols
    }

    pub fn push(&mut self, row: Note) {
        self.ids.push(row.id);
        self.codes.push(row.code);
        self.project_ids.push(row.project_id);
        self.creator_ids.push(row.creator_id);
        self.seqs.push(row.seq);
        self.titles.push(row.title);
        self.contents.push(row.content);
        self.tags.push(row.tags);
        self.categories.push(row.category);
        self.pinned.push(row.pinned);
        self.created_ats.push(row.created_at);
        self.updated_ats.push(row.updated_at);
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    fn row(&self, i: usize) -> Note {
        Note {
            id: self.ids[i],
            code: self.codes[i].clone(),
            project_id: self.project_ids[i],
            creator_id: self.creator_ids[i],
            seq: self.seqs[i],
            title: self.titles[i].clone(),
            content: self.contents[i].clone(),
            tags: self.tags[i].clone(),
            category: self.categories[i].clone(),
            pinned: self.pinned[i],
            created_at: self.created_ats[i],
            updated_at: self.updated_ats[i],
        }
    }

    /// Re-derive the row-oriented form of the snapshot.
    pub fn to_rows(&self) -> Vec<Note> {
        self.iter().collect()
    }

    /// Iterate over rows without consuming the snapshot. Every call starts a
    /// fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = Note> + '_ {
        (0..self.len()).map(|i| self.row(i))
    }
}

/// Column store for references.
#[derive(Debug, Clone, Default)]
pub struct RefColumns {
    pub ids: Vec<DbId>,
    pub codes: Vec<String>,
    pub project_ids: Vec<DbId>,
    pub creator_ids: Vec<DbId>,
    pub seqs: Vec<Option<i32>>,
    pub titles: Vec<String>,
    pub tags: Vec<Vec<String>>,
    pub kinds: Vec<Option<String>>,
    pub summaries: Vec<Option<String>>,
    pub links: Vec<Option<String>>,
    pub contents: Vec<Option<String>>,
    pub created_ats: Vec<Timestamp>,
    pub updated_ats: Vec<Timestamp>,
}

impl RefColumns {
    pub fn from_rows(rows: Vec<Reference>) -> Self {
        let mut cols = Self::default();
        for row in rows {
            cols.push(row);
        }
        cols
    }

    pub fn push(&mut self, row: Reference) {
        self.ids.push(row.id);
        self.codes.push(row.code);
        self.project_ids.push(row.project_id);
        self.creator_ids.push(row.creator_id);
        self.seqs.push(row.seq);
        self.titles.push(row.title);
        self.tags.push(row.tags);
        self.kinds.push(row.kind);
        self.summaries.push(row.summary);
        self.links.push(row.link);
        self.contents.push(row.content);
        self.created_ats.push(row.created_at);
        self.updated_ats.push(row.updated_at);
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    fn row(&self, i: usize) -> Reference {
        Reference {
            id: self.ids[i],
            code: self.codes[i].clone(),
            project_id: self.project_ids[i],
            creator_id: self.creator_ids[i],
            seq: self.seqs[i],
            title: self.titles[i].clone(),
            tags: self.tags[i].clone(),
            kind: self.kinds[i].clone(),
            summary: self.summaries[i].clone(),
            link: self.links[i].clone(),
            content: self.contents[i].clone(),
            created_at: self.created_ats[i],
            updated_at: self.updated_ats[i],
        }
    }

    /// Re-derive the row-oriented form of the snapshot.
    pub fn to_rows(&self) -> Vec<Reference> {
        self.iter().collect()
    }

    /// Iterate over rows without consuming the snapshot. Every call starts a
    /// fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = Reference> + '_ {
        (0..self.len()).map(|i| self.row(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(code: &str, seq: Option<i32>) -> Chapter {
        Chapter {
            id: 1,
            code: code.to_string(),
            project_id: 1,
            creator_id: 1,
            seq,
            title: format!("Chapter {code}"),
            content: Some("text".to_string()),
            status: "draft".to_string(),
            summary: None,
            tags: vec!["a".to_string()],
            word_goal: 1500,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn round_trip_preserves_rows_and_order() {
        let rows = vec![chapter("ch-1", Some(1)), chapter("ch-2", None)];
        let cols = ChapterColumns::from_rows(rows.clone());
        assert_eq!(cols.len(), 2);
        assert_eq!(cols.to_rows(), rows);
    }

    #[test]
    fn to_rows_is_idempotent() {
        let cols = ChapterColumns::from_rows(vec![chapter("ch-1", Some(1)), chapter("ch-2", None)]);
        assert_eq!(cols.to_rows(), cols.to_rows());
    }

    #[test]
    fn iter_restarts_per_call() {
        let cols = ChapterColumns::from_rows(vec![chapter("ch-1", None), chapter("ch-2", None)]);

        let mut first = cols.iter();
        assert_eq!(first.next().map(|c| c.code), Some("ch-1".to_string()));
        assert_eq!(first.next().map(|c| c.code), Some("ch-2".to_string()));
        assert!(first.next().is_none());
        // Exhausted: stays exhausted.
        assert!(first.next().is_none());

        // A fresh iterator starts over.
        let mut second = cols.iter();
        assert_eq!(second.next().map(|c| c.code), Some("ch-1".to_string()));
    }

    #[test]
    fn push_keeps_all_columns_in_lockstep() {
        let mut cols = ChapterColumns::default();
        cols.push(chapter("ch-1", Some(1)));
        cols.push(chapter("ch-2", None));

        let n = cols.len();
        assert_eq!(n, 2);
        assert_eq!(cols.ids.len(), n);
        assert_eq!(cols.codes.len(), n);
        assert_eq!(cols.project_ids.len(), n);
        assert_eq!(cols.creator_ids.len(), n);
        assert_eq!(cols.seqs.len(), n);
        assert_eq!(cols.titles.len(), n);
        assert_eq!(cols.contents.len(), n);
        assert_eq!(cols.statuses.len(), n);
        assert_eq!(cols.summaries.len(), n);
        assert_eq!(cols.tags.len(), n);
        assert_eq!(cols.word_goals.len(), n);
        assert_eq!(cols.created_ats.len(), n);
        assert_eq!(cols.updated_ats.len(), n);
        assert_eq!(cols.to_rows().len(), n);
    }

    #[test]
    fn empty_collection() {
        let cols = NoteColumns::default();
        assert!(cols.is_empty());
        assert!(cols.to_rows().is_empty());
        assert!(cols.iter().next().is_none());
    }
}
