//! Comparison engine for PixelConfig snapshots.
//!
//! Pairs up the encoded entries of two snapshot documents positionally,
//! decodes each pair, and records every byte position where the blobs
//! disagree together with the exact bit indices that flipped. Computation is
//! separated from rendering: this crate produces structured results, the CLI
//! turns them into the printed report.
//!
//! # Key Types
//!
//! - [`differing_bits`] — set bits of `a ^ b`, ascending
//! - [`ByteDiff`] / [`EntryComparison`] — one differing byte / one blob pair
//! - [`SnapshotComparison`] / [`compare_snapshots`] — a whole run

pub mod bits;
pub mod compare;

pub use bits::differing_bits;
pub use compare::{compare_blobs, compare_snapshots, ByteDiff, EntryComparison, SnapshotComparison};
