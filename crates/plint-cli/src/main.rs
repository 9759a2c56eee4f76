mod cli;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use clap::Parser;
use plint::{Atom, InteractionParams};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("plint v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let protein: Vec<Atom> = read_json(&cli.protein)?;
    let ligand: Vec<Atom> = read_json(&cli.ligand)?;
    let params: InteractionParams = match &cli.params {
        Some(path) => read_json(path)?,
        None => InteractionParams::default(),
    };
    info!(
        protein_atoms = protein.len(),
        ligand_atoms = ligand.len(),
        "Inputs loaded."
    );

    let result = plint::detect(&protein, &ligand, &params)?;
    info!(
        contacts = result.contacts.len(),
        warnings = result.warnings.len(),
        "Analysis complete."
    );

    let json = serde_json::to_string_pretty(&result).map_err(CliError::Serialize)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, json)?;
            info!("Result written to {}.", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
