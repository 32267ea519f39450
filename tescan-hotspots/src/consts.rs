pub const HOTSPOTS_CMD: &str = "hotspots";

/// Default window length in base pairs.
pub const DEFAULT_WINDOW_SIZE: u32 = 10_000;

/// Default directory for report files.
pub const DEFAULT_OUT_DIR: &str = ".";

/// Windows with |fold change| at or above this land in the filtered report.
pub const REPORT_FOLD_THRESHOLD: f64 = 3.0;
