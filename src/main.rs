use std::path::Path;

use anyhow::Result;
use clap::Parser;

use spdx_catalog::cli::Cli;
use spdx_catalog::report::{load_catalog, resolve_all, to_json_line};

fn main() -> std::io::Result<()> {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let catalog = load_catalog(Path::new(&cli.licenses))?;
    for resolution in resolve_all(&catalog, &cli.ids, &cli.urls) {
        println!("{}", to_json_line(&resolution, cli.pretty)?);
    }
    Ok(())
}
