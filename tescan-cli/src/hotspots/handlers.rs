use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use tescan_hotspots::consts::*;
use tescan_hotspots::{ScanParams, scan_bed_file, write_reports};

pub fn run_hotspots(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to an annotation file is required.");

    let genus = matches
        .get_one::<String>("genus")
        .expect("A genus name is required.");

    let species = matches
        .get_one::<String>("species")
        .expect("A species name is required.");

    let genome_size: u64 = matches
        .get_one::<String>("genome-size")
        .expect("A genome size is required.")
        .parse()
        .context("GENOME_SIZE must be a positive integer")?;

    let window_size: u32 = match matches.get_one::<String>("interval") {
        Some(interval) => interval
            .parse()
            .context("INTERVAL must be a positive integer")?,
        None => DEFAULT_WINDOW_SIZE,
    };

    let out_dir = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or(DEFAULT_OUT_DIR);

    let params = ScanParams::new(genome_size, window_size)?;
    let species_label = format!("{genus}{species}");

    let result = scan_bed_file(Path::new(input), &params)?;
    let reports = write_reports(&result.windows, &species_label, Path::new(out_dir))?;

    println!("Total number of TEs counted: {}", result.total_records);
    println!(
        "The mean number of TEs per {} bases: {}",
        window_size, result.baseline
    );
    println!(
        "Wrote {} windows to {} (filtered report: {})",
        result.windows.len(),
        reports.full.display(),
        reports.filtered.display()
    );

    Ok(())
}
