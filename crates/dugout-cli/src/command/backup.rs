use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;

use crate::util::{self, Output};

use super::DirApp;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ExportArg {
    /// Output file path, or `-` for stdout [default: softball-roster-backup-<today>.csv]
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ImportArg {
    /// CSV file previously written by `export`
    path: PathBuf,
    /// Do not ask for confirmation
    #[arg(long)]
    yes: bool,
}

pub(crate) fn run_export(arg: &ExportArg, app: &DirApp) -> anyhow::Result<()> {
    let path = arg.output.clone().unwrap_or_else(|| {
        PathBuf::from(util::backup_file_name(chrono::Local::now().date_naive()))
    });
    let mut output = Output::from_output_path(path)?;
    app.export_csv(&mut output)?;
    output
        .flush()
        .with_context(|| format!("Failed to flush output to {}", output.display_path()))?;
    if let Output::File { path, .. } = &output {
        eprintln!("Exported {} players to {}", app.roster().len(), path.display());
    }
    Ok(())
}

pub(crate) fn run_import(arg: &ImportArg, app: &mut DirApp) -> anyhow::Result<()> {
    let file = File::open(&arg.path)
        .with_context(|| format!("Failed to open {}", arg.path.display()))?;
    let confirmed = arg.yes
        || util::confirm("Replace the current roster and season stats with the imported data?")?;
    if !confirmed {
        println!("Import cancelled.");
        return Ok(());
    }
    app.import_csv(BufReader::new(file), confirmed)
        .with_context(|| format!("Failed to import {}", arg.path.display()))?;
    println!(
        "Imported {} players from {}",
        app.roster().len(),
        arg.path.display()
    );
    Ok(())
}
