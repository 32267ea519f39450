use std::io;
use std::path::PathBuf;

use tescan_core::BedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotspotError {
    #[error("Invalid scan configuration: {0}")]
    InvalidConfig(String),

    #[error("No annotation records found in the file: {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("Fold change is undefined for window {chr}:{start}-{end} (zero count or zero baseline)")]
    UndefinedFoldChange { chr: String, start: u32, end: u32 },

    #[error(transparent)]
    Bed(#[from] BedError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
