//! Genome-wide expected TE density per window.

use crate::errors::HotspotError;

/// Fixed parameters of one scan run: total genome size and window length.
///
/// Both are supplied by the operator, not derived from the input, and hold
/// for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanParams {
    pub genome_size: u64,
    pub window_size: u32,
}

impl ScanParams {
    /// Validate and build scan parameters. Zero for either value is
    /// rejected here so downstream arithmetic never divides by zero.
    pub fn new(genome_size: u64, window_size: u32) -> Result<Self, HotspotError> {
        if genome_size == 0 {
            return Err(HotspotError::InvalidConfig(
                "genome size must be a positive number of base pairs".to_string(),
            ));
        }
        if window_size == 0 {
            return Err(HotspotError::InvalidConfig(
                "window size must be a positive number of base pairs".to_string(),
            ));
        }
        Ok(ScanParams {
            genome_size,
            window_size,
        })
    }
}

/// Expected number of records per window under a uniform genome-wide
/// distribution: `(total_records / genome_size) * window_size`.
///
/// The total must come from a full pass over the input before windowing
/// starts; the windowing pass consumes counts incrementally and cannot
/// know the global total up front.
pub fn expected_per_window(total_records: u64, params: &ScanParams) -> f64 {
    (total_records as f64 / params.genome_size as f64) * params.window_size as f64
}
