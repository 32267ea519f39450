mod hotspots;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "tescan";
    pub const BIN_NAME: &str = "tescan";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Tools for locating transposable element hotspots and coldspots in sorted genome annotation data.")
        .subcommand_required(true)
        .subcommand(hotspots::cli::create_hotspots_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // HOTSPOTS
        //
        Some((hotspots::cli::HOTSPOTS_CMD, matches)) => {
            hotspots::handlers::run_hotspots(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
