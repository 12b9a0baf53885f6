// src/bin/cli.rs
use nirf_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = nirf_scrape::log::init() {
        eprintln!("Logging disabled: {e}");
    }
    cli::run()
}
