use crate::classify::{AnchorGroup, classify_anchor, classify_page};
use crate::manifest::types::PageEntry;
use anyhow::{Context, Result};
use regex::Regex;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Matches `id="..."` attribute values anywhere in the page text. The pages
/// are machine-generated, so an attribute-level scan is sufficient and a full
/// HTML parse is deliberately avoided.
static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"id="([^"]+)""#).unwrap());

/// Matches the first `<title>...</title>` pair, case-insensitively.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title>([^<]+)</title>").unwrap());

/// Scan one page's text into a [`PageEntry`].
///
/// Pure: extraction, title fallback, classification, and per-group
/// dedup + sort all happen here, with no I/O. `file_name` doubles as the
/// title when the page has none.
pub fn scan_text(file_name: &str, text: &str) -> PageEntry {
    let ids: Vec<&str> = ID_RE
        .captures_iter(text)
        .map(|caps| {
            let (_, [id]) = caps.extract();
            id
        })
        .collect();

    let title = TITLE_RE
        .captures(text)
        .map(|caps| {
            let (_, [title]) = caps.extract();
            title.trim().to_string()
        })
        .unwrap_or_else(|| file_name.to_string());

    let mut buckets: BTreeMap<AnchorGroup, FxHashSet<&str>> = BTreeMap::new();
    for &id in &ids {
        if let Some(group) = classify_anchor(id) {
            buckets.entry(group).or_default().insert(id);
        }
    }

    let anchors = buckets
        .into_iter()
        .map(|(group, unique)| {
            let mut list: Vec<String> = unique.into_iter().map(str::to_string).collect();
            list.sort_unstable();
            (group, list)
        })
        .collect();

    PageEntry {
        file: file_name.to_string(),
        title,
        class: classify_page(file_name),
        id_count: ids.len(),
        anchors,
    }
}

/// Scan one page from disk.
pub fn scan_page(path: &Path) -> Result<PageEntry> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("document path has no usable file name: {}", path.display()))?
        .to_string();

    let text = read_text_permissive(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(scan_text(&file_name, &text))
}

/// Read a page permissively: undecodable bytes are dropped, never fatal.
fn read_text_permissive(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            log::debug!("dropping undecodable bytes in {}", path.display());
            let bytes = err.into_bytes();
            Ok(String::from_utf8_lossy(&bytes).replace('\u{FFFD}', ""))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::PageClass;

    const SAMPLE: &str = r#"<html><head><title> Mesh Operators </title></head>
<body>
<dt id="bpy.ops.mesh.fill">fill</dt>
<dt id="bpy.ops.mesh.knife">knife</dt>
<dt id="bpy.ops.mesh.fill">fill (duplicate)</dt>
<dt id="bpy.types.Mesh">Mesh</dt>
<dt id="installation">plain section anchor</dt>
</body></html>"#;

    #[test]
    fn test_extracts_ids_and_title() {
        let entry = scan_text("bpy.ops.mesh.html", SAMPLE);
        assert_eq!(entry.file, "bpy.ops.mesh.html");
        assert_eq!(entry.title, "Mesh Operators");
        assert_eq!(entry.class, PageClass::OpsPage);
        // Raw count includes the duplicate and the ungrouped anchor
        assert_eq!(entry.id_count, 5);
    }

    #[test]
    fn test_groups_are_deduped_and_sorted() {
        let entry = scan_text("bpy.ops.mesh.html", SAMPLE);
        assert_eq!(
            entry.anchors[&AnchorGroup::Operators],
            vec!["bpy.ops.mesh.fill", "bpy.ops.mesh.knife"]
        );
        assert_eq!(entry.anchors[&AnchorGroup::Types], vec!["bpy.types.Mesh"]);
        // Ungrouped anchors never enter the map
        assert!(!entry.anchors.values().flatten().any(|a| a == "installation"));
    }

    #[test]
    fn test_raw_count_bounds_grouped_counts() {
        let entry = scan_text("bpy.ops.mesh.html", SAMPLE);
        let grouped: usize = entry.anchors.values().map(Vec::len).sum();
        assert!(entry.id_count >= grouped);
    }

    #[test]
    fn test_title_falls_back_to_file_name() {
        let entry = scan_text("untitled.html", r#"<p id="bpy.context">no title here</p>"#);
        assert_eq!(entry.title, "untitled.html");
    }

    #[test]
    fn test_title_is_case_insensitive_and_first_wins() {
        let text = "<TITLE>First</TITLE><title>Second</title>";
        let entry = scan_text("x.html", text);
        assert_eq!(entry.title, "First");
    }

    #[test]
    fn test_empty_page() {
        let entry = scan_text("empty.html", "");
        assert_eq!(entry.id_count, 0);
        assert!(entry.anchors.is_empty());
        assert_eq!(entry.title, "empty.html");
    }

    #[test]
    fn test_unsorted_input_comes_out_sorted() {
        let text = r#"<a id="bpy.ops.mesh.subdivide"></a><a id="bpy.ops.mesh.bevel"></a>"#;
        let entry = scan_text("bpy.ops.mesh.html", text);
        assert_eq!(
            entry.anchors[&AnchorGroup::Operators],
            vec!["bpy.ops.mesh.bevel", "bpy.ops.mesh.subdivide"]
        );
    }
}
