use crate::manifest::indexes::build_indexes;
use crate::manifest::scan::scan_page;
use crate::manifest::types::Manifest;
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed informational strings embedded in every manifest.
const MANIFEST_NOTES: &[&str] = &[
    "Use this manifest to map natural-language tasks to exact Blender API anchors.",
    "Ungrouped ids count toward id_count but appear in no anchor group or index.",
];

/// Build a manifest from every `.html` page directly under `doc_root`.
pub fn build_manifest(doc_root: &Path) -> Result<Manifest> {
    build_manifest_with_progress(doc_root, true)
}

/// Build a manifest, optionally showing a progress bar over the scan loop.
pub fn build_manifest_with_progress(doc_root: &Path, silent: bool) -> Result<Manifest> {
    if !doc_root.exists() {
        bail!("doc root not found: {}", doc_root.display());
    }
    let doc_root = doc_root.canonicalize().context("invalid doc root path")?;

    let pages = collect_pages(&doc_root)?;

    let progress = if silent {
        None
    } else {
        let bar = ProgressBar::new(pages.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("█▓▒░  "),
        );
        bar.set_message("Scanning pages...");
        Some(bar)
    };

    let mut entries = Vec::with_capacity(pages.len());
    for path in &pages {
        entries.push(scan_page(path)?);
        if let Some(ref bar) = progress {
            bar.inc(1);
        }
    }

    if let Some(bar) = progress {
        bar.finish_with_message(format!("Scanned {} pages", entries.len()));
    }

    let indexes = build_indexes(&entries);

    Ok(Manifest {
        doc_root: doc_root.display().to_string(),
        pages_scanned: entries.len(),
        entries,
        indexes,
        notes: MANIFEST_NOTES.iter().map(|note| note.to_string()).collect(),
    })
}

/// Collect the `.html` files directly under `doc_root`, sorted by file name.
/// Deliberately non-recursive: the reference corpus is one flat directory.
fn collect_pages(doc_root: &Path) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();
    let listing = fs::read_dir(doc_root)
        .with_context(|| format!("failed to list {}", doc_root.display()))?;

    for dir_entry in listing {
        let path = dir_entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "html") {
            pages.push(path);
        }
    }

    pages.sort_unstable_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(pages)
}
