//! Snapshot loading and `PixelConfig` extraction.
//!
//! A snapshot is a JSON document exported by the mask tooling. Somewhere in
//! its tree (the nesting varies between exporter versions) live fields named
//! `PixelConfig` whose string values hold base64-encoded pixel configuration
//! blobs. This crate loads a snapshot file into a generic document tree and
//! harvests those strings in document order.
//!
//! # Key Types
//!
//! - [`load_snapshot`] — file to parsed [`serde_json::Value`]
//! - [`extract_configs`] — document tree to ordered config strings
//! - [`SnapshotError`] — load failures, each naming the offending file

pub mod error;
pub mod extract;
pub mod load;

pub use error::{SnapshotError, SnapshotResult};
pub use extract::{extract_configs, CONFIG_KEY};
pub use load::load_snapshot;
