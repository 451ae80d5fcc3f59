//! Positional comparison of decoded configuration blobs.
//!
//! The i-th entry of one snapshot is compared only against the i-th entry of
//! the other; there is no matching by content or key path. Both the entry
//! sequences and the byte sequences truncate to the shorter side, with the
//! mismatch preserved in the result so the report can warn about it.

use serde_json::Value;

use pxc_codec::base64;
use pxc_snapshot::extract_configs;

use crate::bits::differing_bits;

/// One byte position where two decoded blobs disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteDiff {
    /// Byte offset into the decoded blobs (0-based).
    pub index: usize,
    /// The byte on the left side.
    pub left: u8,
    /// The byte on the right side.
    pub right: u8,
    /// Bit positions that differ, ascending, 0 = least significant.
    pub bits: Vec<u8>,
}

/// The comparison of one positional pair of decoded blobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryComparison {
    /// Position of the pair in the extracted sequences (0-based).
    pub index: usize,
    /// Decoded byte length of the left blob.
    pub left_len: usize,
    /// Decoded byte length of the right blob.
    pub right_len: usize,
    /// Differing bytes within the shared prefix, in offset order.
    pub diffs: Vec<ByteDiff>,
}

impl EntryComparison {
    /// Returns `true` if the decoded blobs differ in length.
    pub fn length_mismatch(&self) -> bool {
        self.left_len != self.right_len
    }

    /// Returns `true` if no byte in the shared prefix differs.
    pub fn is_identical(&self) -> bool {
        self.diffs.is_empty()
    }
}

/// The comparison of two whole snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotComparison {
    /// Number of entries extracted from the left snapshot.
    pub left_count: usize,
    /// Number of entries extracted from the right snapshot.
    pub right_count: usize,
    /// One comparison per positional pair, `min(left_count, right_count)`
    /// entries.
    pub entries: Vec<EntryComparison>,
}

impl SnapshotComparison {
    /// Returns `true` if the snapshots hold different numbers of entries.
    pub fn count_mismatch(&self) -> bool {
        self.left_count != self.right_count
    }

    /// Number of entry pairs actually compared.
    pub fn compared(&self) -> usize {
        self.entries.len()
    }
}

/// Compare two decoded blobs byte by byte over their shared prefix.
pub fn compare_blobs(index: usize, left: &[u8], right: &[u8]) -> EntryComparison {
    let shared = left.len().min(right.len());
    let mut diffs = Vec::new();

    for offset in 0..shared {
        if left[offset] != right[offset] {
            diffs.push(ByteDiff {
                index: offset,
                left: left[offset],
                right: right[offset],
                bits: differing_bits(left[offset], right[offset]),
            });
        }
    }

    EntryComparison {
        index,
        left_len: left.len(),
        right_len: right.len(),
        diffs,
    }
}

/// Extract, decode, and compare the `PixelConfig` entries of two snapshot
/// documents.
pub fn compare_snapshots(left: &Value, right: &Value) -> SnapshotComparison {
    let left_configs = extract_configs(left);
    let right_configs = extract_configs(right);

    let entries = left_configs
        .iter()
        .zip(&right_configs)
        .enumerate()
        .map(|(i, (l, r))| compare_blobs(i, &base64::decode(l), &base64::decode(r)))
        .collect();

    SnapshotComparison {
        left_count: left_configs.len(),
        right_count: right_configs.len(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identical_blobs_compare_clean() {
        let cmp = compare_blobs(0, &[0xDE, 0xAD], &[0xDE, 0xAD]);
        assert!(cmp.is_identical());
        assert!(!cmp.length_mismatch());
    }

    #[test]
    fn single_bit_difference_is_located() {
        // 0x0F vs 0x1F flips exactly bit 4.
        let cmp = compare_blobs(0, &[0x0F], &[0x1F]);
        assert_eq!(cmp.diffs.len(), 1);
        assert_eq!(cmp.diffs[0].index, 0);
        assert_eq!(cmp.diffs[0].left, 0x0F);
        assert_eq!(cmp.diffs[0].right, 0x1F);
        assert_eq!(cmp.diffs[0].bits, vec![4]);
    }

    #[test]
    fn comparison_truncates_to_shorter_blob() {
        let cmp = compare_blobs(0, &[0x00, 0x01, 0x02], &[0x00, 0xFF]);
        assert!(cmp.length_mismatch());
        assert_eq!(cmp.diffs.len(), 1);
        assert_eq!(cmp.diffs[0].index, 1);
    }

    #[test]
    fn snapshots_pair_entries_positionally() {
        // "AA==" -> [0x00], "AQ==" -> [0x01], "/w==" -> [0xFF]
        let left = json!({"a": {"PixelConfig": "AA=="}, "b": {"PixelConfig": "AQ=="}});
        let right = json!({"a": {"PixelConfig": "AA=="}, "b": {"PixelConfig": "/w=="}});

        let cmp = compare_snapshots(&left, &right);
        assert_eq!(cmp.left_count, 2);
        assert_eq!(cmp.right_count, 2);
        assert!(!cmp.count_mismatch());
        assert!(cmp.entries[0].is_identical());
        assert_eq!(cmp.entries[1].diffs.len(), 1);
        // 0x01 vs 0xFF: bits 1..=7 flip.
        assert_eq!(cmp.entries[1].diffs[0].bits, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn count_mismatch_compares_shared_prefix_only() {
        let left = json!([
            {"PixelConfig": "AA=="},
            {"PixelConfig": "AA=="},
            {"PixelConfig": "AA=="},
        ]);
        let right = json!([
            {"PixelConfig": "AA=="},
            {"PixelConfig": "AQ=="},
        ]);

        let cmp = compare_snapshots(&left, &right);
        assert!(cmp.count_mismatch());
        assert_eq!(cmp.left_count, 3);
        assert_eq!(cmp.right_count, 2);
        assert_eq!(cmp.compared(), 2);
    }

    #[test]
    fn no_entries_on_either_side_compares_nothing() {
        let left = json!({"PixelConfig": "AA=="});
        let right = json!({"unrelated": true});

        let cmp = compare_snapshots(&left, &right);
        assert_eq!(cmp.left_count, 1);
        assert_eq!(cmp.right_count, 0);
        assert_eq!(cmp.compared(), 0);
    }
}
