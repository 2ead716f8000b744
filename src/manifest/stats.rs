use crate::manifest::store::load_manifest;
use anyhow::Result;
use std::path::Path;

/// Display statistics for an existing manifest.
pub fn show_stats(manifest_path: &Path) -> Result<()> {
    let manifest = load_manifest(manifest_path)?;

    let total_ids: usize = manifest.entries.iter().map(|entry| entry.id_count).sum();
    let grouped_ids: usize = manifest
        .entries
        .iter()
        .flat_map(|entry| entry.anchors.values())
        .map(Vec::len)
        .sum();

    println!("Manifest Statistics");
    println!("===================");
    println!();
    println!("Doc root:            {}", manifest.doc_root);
    println!("Pages scanned:       {}", manifest.pages_scanned);
    println!("Ids found:           {}", total_ids);
    println!("Grouped anchors:     {}", grouped_ids);
    println!(
        "Operator namespaces: {}",
        manifest.indexes.operators_by_namespace.len()
    );
    println!(
        "Type namespaces:     {}",
        manifest.indexes.types_by_namespace.len()
    );

    println!();
    println!("Pages by class:");
    for (class, files) in &manifest.indexes.pages_by_class {
        println!("  {:15} {}", class.as_str(), files.len());
    }

    Ok(())
}
