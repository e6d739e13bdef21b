//! Child-entity ordering rule.
//!
//! Chapters, notes and references are presented ordered by their optional
//! sequence number first (`NULL`s last), then by code. The SQL side uses
//! `ORDER BY seq NULLS LAST, code`; this is the same rule for in-memory
//! collections so both environments agree.

use std::cmp::Ordering;

/// Compare two (seq, code) pairs: seq ascending with `None` last, ties broken
/// by code.
pub fn seq_code_order(
    a_seq: Option<i32>,
    a_code: &str,
    b_seq: Option<i32>,
    b_code: &str,
) -> Ordering {
    match (a_seq, b_seq) {
        (Some(a), Some(b)) => a.cmp(&b).then_with(|| a_code.cmp(b_code)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a_code.cmp(b_code),
    }
}
