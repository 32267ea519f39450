//! Windowed transposable element density scanning.
//!
//! This crate locates TE "hotspots" and "coldspots" in a genome: it
//! partitions each scaffold into fixed-size windows, counts annotated
//! features per window, and scores each window against a genome-wide
//! expected baseline with a signed fold change.
//!
//! The scan makes two passes over a sorted annotation file: the first
//! counts records to derive the baseline, the second aggregates counts
//! per window and scores them.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use tescan_hotspots::{ScanParams, scan_bed_file, write_reports};
//!
//! let params = ScanParams::new(120_000_000, 10_000).unwrap();
//! let result = scan_bed_file(Path::new("input.bed"), &params).unwrap();
//!
//! println!("baseline: {}", result.baseline);
//! write_reports(&result.windows, "drosophilamelanogaster", Path::new(".")).unwrap();
//! ```

pub mod baseline;
pub mod consts;
pub mod errors;
pub mod report;
pub mod scan;

// re-exports
pub use baseline::{ScanParams, expected_per_window};
pub use errors::HotspotError;
pub use report::{ReportPaths, write_reports};
pub use scan::{ScanResult, Window, WindowScan, fold_change, scan_bed_file};
