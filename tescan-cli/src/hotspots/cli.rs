use clap::{Arg, Command, arg};

pub use tescan_hotspots::consts::*;

pub fn create_hotspots_cli() -> Command {
    Command::new(HOTSPOTS_CMD)
        .about("Score fixed-size genomic windows for TE enrichment against a genome-wide baseline.")
        .arg(
            Arg::new("input")
                .required(true)
                .help("Path to a sorted, tab-delimited TE annotation file (BED-like, .gz accepted)"),
        )
        .arg(
            Arg::new("genus")
                .required(true)
                .help("Genus name; concatenated with the species name to label rows and name output files"),
        )
        .arg(Arg::new("species").required(true).help("Species name"))
        .arg(
            Arg::new("genome-size")
                .required(true)
                .help("Total genome size in base pairs"),
        )
        .arg(Arg::new("interval").help("Window size in base pairs [default: 10000]"))
        .arg(
            arg!(--output <output>)
                .help("Directory to write the report files into [default: current directory]"),
        )
}
