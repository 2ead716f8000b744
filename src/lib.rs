//! # bapi - Blender API Reference Manifest Tool
//!
//! bapi converts a directory of Blender Python API reference pages into a
//! deterministic, queryable JSON manifest, then serves case-insensitive
//! substring search over it.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`classify`] - Page-class and anchor-group classification rules
//! - [`manifest`] - Scanning, index aggregation, assembly, and persistence
//! - [`query`] - Substring search with stable de-duplication
//! - [`output`] - Result formatting for the terminal
//!
//! ## Quick Start
//!
//! ```ignore
//! use bapi::manifest::{build_manifest, write_manifest, load_manifest};
//! use bapi::query::search;
//! use std::path::Path;
//!
//! // Build and persist a manifest
//! let manifest = build_manifest(Path::new("/path/to/reference"))?;
//! write_manifest(&manifest, Path::new("manifest.json"))?;
//!
//! // Query it in a later run
//! let manifest = load_manifest(Path::new("manifest.json"))?;
//! let results = search(&manifest, "fill", 25);
//! for row in &results.rows {
//!     println!("{}: {}", row.file, row.anchor.as_deref().unwrap_or(&row.title));
//! }
//! ```
//!
//! ## Determinism
//!
//! Every layer of the manifest is sorted (entries by file name, map keys by
//! the ordered map, pair lists by file then anchor), so rebuilding from an
//! unchanged corpus produces byte-identical output. Build and query are
//! independent one-shot passes sharing nothing but the serialized manifest.

pub mod classify;
pub mod manifest;
pub mod output;
pub mod query;
