//! Single-pass windowed aggregation and fold-change scoring.
//!
//! The scan partitions every scaffold into fixed-size windows
//! `[(k-1)*window_size, k*window_size)` indexed from k = 1, counts the
//! records whose `end` coordinate falls inside each window, and scores
//! each window against the genome-wide baseline. Input must be grouped
//! by scaffold and sorted by ascending `end` within each scaffold;
//! sortedness is assumed, not validated.
//!
//! Windows that contain no records are never emitted. The window index
//! jumps directly to the window containing each record, so a gap larger
//! than one window size skips the empty span without drifting the
//! coordinates of later windows.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tescan_core::models::{BedSource, Region};

use crate::baseline::{ScanParams, expected_per_window};
use crate::errors::HotspotError;

/// One closed, scored window. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Window {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub count: u64,
    pub fold_change: f64,
}

/// Signed fold change of an observed window count against the baseline.
///
/// Above the baseline the score is `count / baseline` (> 1); at or below
/// it the score is `-(baseline / count)` (≤ -1), so a window that exactly
/// matches the baseline scores -1. The ratio is deliberately asymmetric
/// (not a log fold change) and never lands strictly inside (-1, 1).
///
/// Returns `None` when the score is undefined: a zero count or a
/// non-positive baseline.
pub fn fold_change(count: u64, baseline: f64) -> Option<f64> {
    if count == 0 || baseline <= 0.0 {
        return None;
    }
    let count = count as f64;
    if count > baseline {
        Some(count / baseline)
    } else {
        Some(-(baseline / count))
    }
}

struct Accumulator {
    chr: String,
    window_index: u32,
    count: u64,
}

/// Accumulator state for one pass over a sorted record sequence.
///
/// Feed records in input order with [`WindowScan::push`]; call
/// [`WindowScan::finish`] once to close the final in-progress window and
/// take the emitted sequence. Emission order is scaffold-major,
/// window-index-minor, matching input order.
pub struct WindowScan {
    window_size: u32,
    baseline: f64,
    current: Option<Accumulator>,
    windows: Vec<Window>,
}

impl WindowScan {
    pub fn new(window_size: u32, baseline: f64) -> Self {
        WindowScan {
            window_size,
            baseline,
            current: None,
            windows: Vec::new(),
        }
    }

    /// Index of the window containing a record position: the smallest k
    /// with `end < k * window_size`.
    fn fit_index(&self, end: u32) -> u32 {
        end / self.window_size + 1
    }

    /// Exclusive upper bound of window k.
    fn window_limit(&self, window_index: u32) -> u64 {
        window_index as u64 * self.window_size as u64
    }

    pub fn push(&mut self, region: &Region) -> Result<(), HotspotError> {
        match &mut self.current {
            Some(acc) if acc.chr == region.chr => {
                if (region.end as u64) < acc.window_index as u64 * self.window_size as u64 {
                    acc.count += 1;
                    return Ok(());
                }
                // window boundary crossed: close below, record opens the next window
            }
            Some(_) => {
                // new scaffold: the open window closes under the old scaffold
            }
            None => {
                self.current = Some(Accumulator {
                    chr: region.chr.clone(),
                    window_index: self.fit_index(region.end),
                    count: 1,
                });
                return Ok(());
            }
        }

        self.close_current()?;
        self.current = Some(Accumulator {
            chr: region.chr.clone(),
            window_index: self.fit_index(region.end),
            count: 1,
        });
        Ok(())
    }

    /// Close the scan, emitting the final in-progress window. The loop in
    /// [`WindowScan::push`] only closes a window when a later record
    /// triggers it, so the trailing window needs this explicit close.
    pub fn finish(mut self) -> Result<Vec<Window>, HotspotError> {
        self.close_current()?;
        Ok(self.windows)
    }

    fn close_current(&mut self) -> Result<(), HotspotError> {
        let Some(acc) = self.current.take() else {
            return Ok(());
        };

        let start = (acc.window_index as u64 - 1) * self.window_size as u64;
        let end = self.window_limit(acc.window_index);
        let (start, end) = (start as u32, end as u32);

        let fold_change = fold_change(acc.count, self.baseline).ok_or_else(|| {
            HotspotError::UndefinedFoldChange {
                chr: acc.chr.clone(),
                start,
                end,
            }
        })?;

        self.windows.push(Window {
            chr: acc.chr,
            start,
            end,
            count: acc.count,
            fold_change,
        });
        Ok(())
    }
}

/// Result of a full scan over one annotation file.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub windows: Vec<Window>,
    pub total_records: u64,
    pub baseline: f64,
}

/// Scan a sorted BED-like annotation file for TE hotspots and coldspots.
///
/// Two passes over the file: the first counts records to derive the
/// genome-wide baseline, the second aggregates per-window counts and
/// scores them. Each pass gets its own reader, so the file is never held
/// in memory.
///
/// # Arguments:
/// - path: path to the sorted annotation file (plain or gzip'd)
/// - params: genome size and window size for this run
pub fn scan_bed_file(path: &Path, params: &ScanParams) -> Result<ScanResult, HotspotError> {
    let source = BedSource::open(path)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg} ({per_sec})")
            .unwrap()
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    spinner.set_message("Counting annotation records...");

    let mut total_records: u64 = 0;
    for record in source.records()? {
        record?;
        total_records += 1;
        spinner.inc(1);
    }
    spinner.finish_and_clear();

    if total_records == 0 {
        return Err(HotspotError::EmptyInput(path.to_path_buf()));
    }

    let baseline = expected_per_window(total_records, params);

    let mut scan = WindowScan::new(params.window_size, baseline);
    for record in source.records()? {
        scan.push(&record?)?;
    }

    Ok(ScanResult {
        windows: scan.finish()?,
        total_records,
        baseline,
    })
}
