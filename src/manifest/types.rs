use crate::classify::{AnchorGroup, PageClass};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One scanned reference page.
///
/// Created once per scan and immutable afterwards. `id_count` is the raw
/// number of `id` attributes found in the page, including duplicates and
/// anchors that match no grouping rule; the `anchors` map only holds grouped
/// anchors, deduplicated and lexically sorted per group. Groups with no
/// anchors are absent from the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub file: String,
    pub title: String,
    pub class: PageClass,
    pub id_count: usize,
    pub anchors: BTreeMap<AnchorGroup, Vec<String>>,
}

/// A single anchor occurrence inside a namespace index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorRef {
    pub id: String,
    pub file: String,
}

/// Global indexes aggregated across the whole corpus.
///
/// Every layer is sorted: namespace and class keys by the `BTreeMap`, pair
/// lists by `(file, id)`, file lists lexically. Rebuilding from an unchanged
/// corpus reproduces these byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indexes {
    pub operators_by_namespace: BTreeMap<String, Vec<AnchorRef>>,
    pub types_by_namespace: BTreeMap<String, Vec<AnchorRef>>,
    pub pages_by_class: BTreeMap<PageClass, Vec<String>>,
}

/// The persisted manifest: root metadata, per-page entries in file-name
/// order, and the global indexes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub doc_root: String,
    pub pages_scanned: usize,
    pub entries: Vec<PageEntry>,
    pub indexes: Indexes,
    pub notes: Vec<String>,
}
