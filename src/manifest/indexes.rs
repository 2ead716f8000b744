use crate::classify::{AnchorGroup, PageClass};
use crate::manifest::types::{AnchorRef, Indexes, PageEntry};
use std::collections::BTreeMap;

/// Namespace token of a grouped anchor: the third dot-delimited segment when
/// splitting into at most four parts (`bpy.ops.mesh.fill` -> `mesh`,
/// `bpy.types.Object` -> `Object`).
///
/// Returns `None` for anchors with fewer than three segments or an empty
/// third segment (`bpy.ops`, `bpy.ops.`); such anchors must never become an
/// index key.
pub fn namespace_of(anchor: &str) -> Option<&str> {
    anchor.splitn(4, '.').nth(2).filter(|segment| !segment.is_empty())
}

/// Aggregate per-page entries into the global indexes.
///
/// Operators and types pairs accumulate per namespace, page files per class.
/// Pair lists are sorted by `(file, id)` and file lists lexically once
/// aggregation is done; key order is the `BTreeMap`'s. Anchors without a
/// derivable namespace are skipped with a diagnostic instead of aborting the
/// build; they stay in the entry's `id_count` and group lists.
pub fn build_indexes(entries: &[PageEntry]) -> Indexes {
    let mut operators: BTreeMap<String, Vec<AnchorRef>> = BTreeMap::new();
    let mut types: BTreeMap<String, Vec<AnchorRef>> = BTreeMap::new();
    let mut pages: BTreeMap<PageClass, Vec<String>> = BTreeMap::new();

    for entry in entries {
        collect_namespaced(entry, AnchorGroup::Operators, &mut operators);
        collect_namespaced(entry, AnchorGroup::Types, &mut types);
        pages.entry(entry.class).or_default().push(entry.file.clone());
    }

    for pairs in operators.values_mut().chain(types.values_mut()) {
        pairs.sort_unstable_by(|a, b| {
            (a.file.as_str(), a.id.as_str()).cmp(&(b.file.as_str(), b.id.as_str()))
        });
    }
    for files in pages.values_mut() {
        files.sort_unstable();
    }

    Indexes {
        operators_by_namespace: operators,
        types_by_namespace: types,
        pages_by_class: pages,
    }
}

fn collect_namespaced(
    entry: &PageEntry,
    group: AnchorGroup,
    index: &mut BTreeMap<String, Vec<AnchorRef>>,
) {
    let Some(anchors) = entry.anchors.get(&group) else {
        return;
    };
    for anchor in anchors {
        match namespace_of(anchor) {
            Some(namespace) => index.entry(namespace.to_string()).or_default().push(AnchorRef {
                id: anchor.clone(),
                file: entry.file.clone(),
            }),
            None => log::warn!(
                "skipping {} anchor without a namespace segment: {:?} in {}",
                group.as_str(),
                anchor,
                entry.file
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::scan::scan_text;

    #[test]
    fn test_namespace_extraction() {
        assert_eq!(namespace_of("bpy.ops.mesh.fill_holes"), Some("mesh"));
        assert_eq!(namespace_of("bpy.types.Object"), Some("Object"));
        // Only the first three dots split; the rest stays in the tail
        assert_eq!(namespace_of("bpy.ops.mesh.fill.extra"), Some("mesh"));
    }

    #[test]
    fn test_namespace_rejects_short_anchors() {
        assert_eq!(namespace_of("bpy.ops"), None);
        assert_eq!(namespace_of("bpy"), None);
        assert_eq!(namespace_of(""), None);
        // Trailing dot yields an empty third segment, which is not a namespace
        assert_eq!(namespace_of("bpy.ops."), None);
    }

    fn entry(file: &str, ids: &[&str]) -> PageEntry {
        let body: String = ids
            .iter()
            .map(|id| format!("<dt id=\"{id}\"></dt>"))
            .collect();
        scan_text(file, &body)
    }

    #[test]
    fn test_aggregation_across_pages() {
        let entries = vec![
            entry("bpy.ops.mesh.html", &["bpy.ops.mesh.fill", "bpy.ops.mesh.knife"]),
            entry("bpy.types.object.html", &["bpy.types.Object"]),
        ];
        let indexes = build_indexes(&entries);

        let mesh = &indexes.operators_by_namespace["mesh"];
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh[0].id, "bpy.ops.mesh.fill");
        assert_eq!(mesh[1].id, "bpy.ops.mesh.knife");
        assert!(mesh.iter().all(|pair| pair.file == "bpy.ops.mesh.html"));

        let object = &indexes.types_by_namespace["Object"];
        assert_eq!(object.len(), 1);
        assert_eq!(object[0].id, "bpy.types.Object");
        assert_eq!(object[0].file, "bpy.types.object.html");

        assert_eq!(indexes.pages_by_class[&PageClass::OpsPage], vec!["bpy.ops.mesh.html"]);
        assert_eq!(
            indexes.pages_by_class[&PageClass::TypesPage],
            vec!["bpy.types.object.html"]
        );
    }

    #[test]
    fn test_pairs_sorted_by_file_then_id() {
        let entries = vec![
            entry("z.html", &["bpy.ops.mesh.a"]),
            entry("a.html", &["bpy.ops.mesh.z", "bpy.ops.mesh.b"]),
        ];
        let indexes = build_indexes(&entries);
        let mesh = &indexes.operators_by_namespace["mesh"];
        let order: Vec<(&str, &str)> = mesh
            .iter()
            .map(|pair| (pair.file.as_str(), pair.id.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("a.html", "bpy.ops.mesh.b"),
                ("a.html", "bpy.ops.mesh.z"),
                ("z.html", "bpy.ops.mesh.a"),
            ]
        );
    }

    #[test]
    fn test_malformed_anchor_is_skipped_not_indexed() {
        // "bpy.ops." lands in the operators group but has an empty third
        // segment, so namespace extraction must refuse it
        let entries = vec![entry("bpy.ops.mesh.html", &["bpy.ops.", "bpy.ops.mesh.fill"])];
        assert_eq!(
            entries[0].anchors[&AnchorGroup::Operators],
            vec!["bpy.ops.", "bpy.ops.mesh.fill"]
        );

        let indexes = build_indexes(&entries);
        // The malformed anchor produces no namespace key, empty or otherwise
        assert_eq!(indexes.operators_by_namespace.len(), 1);
        assert_eq!(indexes.operators_by_namespace["mesh"].len(), 1);
        // But it still counts toward the page's raw total and its group list
        assert_eq!(entries[0].id_count, 2);
    }

    #[test]
    fn test_class_files_sorted() {
        let entries = vec![
            entry("bpy.ops.z.html", &[]),
            entry("bpy.ops.a.html", &[]),
        ];
        let indexes = build_indexes(&entries);
        assert_eq!(
            indexes.pages_by_class[&PageClass::OpsPage],
            vec!["bpy.ops.a.html", "bpy.ops.z.html"]
        );
    }
}
