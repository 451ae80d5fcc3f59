//! `pxc` — compare the PixelConfig blobs of two mask snapshots.
//!
//! One-shot diagnostic: loads the two compiled-in snapshot files, pairs
//! their `PixelConfig` entries positionally, and reports byte- and bit-level
//! differences on stdout. A snapshot that cannot be read or parsed aborts
//! the run with the error on stderr and exit status 1.

use std::path::Path;

use tracing::info;

mod report;

/// The two snapshots under comparison. The tool diagnoses one specific pair
/// of mask exports; the paths are compiled in.
const LEFT_SNAPSHOT: &str = "masks/maskN.srvl";
const RIGHT_SNAPSHOT: &str = "masks/mask256_511_25_1.srvl";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    run(Path::new(LEFT_SNAPSHOT), Path::new(RIGHT_SNAPSHOT))
}

fn run(left_path: &Path, right_path: &Path) -> anyhow::Result<()> {
    info!(
        "comparing {} against {}",
        left_path.display(),
        right_path.display()
    );

    let left = pxc_snapshot::load_snapshot(left_path)?;
    let right = pxc_snapshot::load_snapshot(right_path)?;

    let comparison = pxc_diff::compare_snapshots(&left, &right);
    report::print_report(&comparison, &label(left_path), &label(right_path));

    Ok(())
}

/// Report lines name snapshots by file name, not full path.
fn label(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
