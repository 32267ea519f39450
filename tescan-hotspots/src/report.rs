//! Tab-delimited hotspot report writing.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::consts::REPORT_FOLD_THRESHOLD;
use crate::errors::HotspotError;
use crate::scan::Window;

pub const REPORT_HEADER: &str = "Scaffold\tStart\tEnd\tFold Change\tSpecies Name";

/// Locations of the two report files written by [`write_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub full: PathBuf,
    pub filtered: PathBuf,
}

/// Write the full and filtered reports for one scan run.
///
/// `{species_label}Hotspots` gets every window in scan order;
/// `{species_label}Hotspots2` gets the subset with |fold change| at or
/// above [`REPORT_FOLD_THRESHOLD`]. The species label is attached to
/// every row. Each file is written to a `.tmp` sibling first and renamed
/// into place, so a failed run never leaves a complete-looking report.
pub fn write_reports(
    windows: &[Window],
    species_label: &str,
    out_dir: &Path,
) -> Result<ReportPaths, HotspotError> {
    let paths = ReportPaths {
        full: out_dir.join(format!("{species_label}Hotspots")),
        filtered: out_dir.join(format!("{species_label}Hotspots2")),
    };

    write_rows(&paths.full, windows.iter(), species_label)?;
    write_rows(
        &paths.filtered,
        windows
            .iter()
            .filter(|w| w.fold_change.abs() >= REPORT_FOLD_THRESHOLD),
        species_label,
    )?;

    Ok(paths)
}

fn write_rows<'a>(
    path: &Path,
    windows: impl Iterator<Item = &'a Window>,
    species_label: &str,
) -> Result<(), HotspotError> {
    let tmp_path = path.with_extension("tmp");

    let mut writer = BufWriter::new(File::create(&tmp_path)?);
    writeln!(writer, "{REPORT_HEADER}")?;
    for window in windows {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            window.chr, window.start, window.end, window.fold_change, species_label
        )?;
    }
    writer.flush()?;

    fs::rename(&tmp_path, path)?;
    Ok(())
}
