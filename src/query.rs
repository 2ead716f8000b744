//! Case-insensitive substring search over a loaded manifest.
//!
//! Matching walks the manifest in entry order: a page-level row when the
//! needle occurs in the file name or title, then one anchor-level row per
//! matching anchor (group-label order, stored list order within a group).
//! The emitted sequence is deduplicated on the full row tuple with
//! first-occurrence order preserved, and only then truncated to the limit,
//! so the reported total always reflects the whole distinct set.

use crate::manifest::Manifest;
use memchr::memmem;
use rustc_hash::FxHashSet;

/// One matched row. A page-level match carries no anchor; an anchor-level
/// match names the anchor that matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchRow {
    pub file: String,
    pub title: String,
    pub anchor: Option<String>,
}

/// Search outcome: the rows kept after dedup and truncation, plus the
/// distinct match count before truncation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub rows: Vec<MatchRow>,
    pub total: usize,
}

impl SearchResults {
    pub fn shown(&self) -> usize {
        self.rows.len()
    }
}

/// Run a substring query against a manifest.
///
/// `limit` bounds the returned rows only; `total` counts the full
/// deduplicated set, so `limit == 0` yields no rows but a real total.
pub fn search(manifest: &Manifest, needle: &str, limit: usize) -> SearchResults {
    let needle = needle.to_lowercase();
    let finder = memmem::Finder::new(needle.as_bytes());

    let mut seen: FxHashSet<MatchRow> = FxHashSet::default();
    let mut unique: Vec<MatchRow> = Vec::new();

    for entry in &manifest.entries {
        if contains(&finder, &entry.file) || contains(&finder, &entry.title) {
            let row = MatchRow {
                file: entry.file.clone(),
                title: entry.title.clone(),
                anchor: None,
            };
            if seen.insert(row.clone()) {
                unique.push(row);
            }
        }

        for anchors in entry.anchors.values() {
            for anchor in anchors {
                if contains(&finder, anchor) {
                    let row = MatchRow {
                        file: entry.file.clone(),
                        title: entry.title.clone(),
                        anchor: Some(anchor.clone()),
                    };
                    if seen.insert(row.clone()) {
                        unique.push(row);
                    }
                }
            }
        }
    }

    let total = unique.len();
    unique.truncate(limit);

    SearchResults { rows: unique, total }
}

fn contains(finder: &memmem::Finder, haystack: &str) -> bool {
    finder.find(haystack.to_lowercase().as_bytes()).is_some()
}
