mod cli;
mod commands;
mod export;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use log::{debug, info};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
};

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let cli = Cli::parse();
    let layout = commands::load_layout(cli.layout.as_deref())?;
    debug!("Layout has {} keys", layout.num_keys());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Normalize { steno } => commands::normalize(&layout, &steno, &mut out)?,
        Command::SortKey { steno } => commands::sort_key(&layout, &steno, &mut out)?,
        Command::Sort {
            input,
            skip_invalid,
        } => {
            let count = match input {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open {}", path.display()))?;
                    commands::sort(&layout, BufReader::new(file), &mut out, skip_invalid)?
                }
                None => commands::sort(&layout, io::stdin().lock(), &mut out, skip_invalid)?,
            };
            debug!("Wrote {count} entries");
        }
        Command::Inspect { strokes, output } => match output {
            Some(path) => {
                export::export_inspect_to_path(&layout, &strokes, &path)?;
                info!("Strokes written to: {}", path.display());
            }
            None => export::write_inspect_csv(&layout, &strokes, &mut out)?,
        },
        Command::Layout => commands::print_layout(&layout, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
