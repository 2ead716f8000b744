use crate::manifest::types::Manifest;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Serialize a manifest to pretty-printed JSON at `path`.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest).context("failed to serialize manifest")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Load a manifest previously written by [`write_manifest`].
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse manifest {}", path.display()))
}
