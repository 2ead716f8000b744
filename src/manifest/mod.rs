pub mod build;
pub mod indexes;
pub mod scan;
pub mod stats;
pub mod store;
pub mod types;

pub use build::build_manifest;
pub use store::{load_manifest, write_manifest};
pub use types::*;
