//! Lenient base64 codec for embedded configuration blobs.
//!
//! Snapshot files carry their binary pixel configuration as standard-alphabet
//! base64 strings. The exporters that produce them are sloppy about line
//! wrapping and trailing junk, so the decoder here never rejects input: it
//! skips anything outside the alphabet and treats the first `=` as the end
//! of the payload.

pub mod base64;

pub use base64::{decode, encode};
