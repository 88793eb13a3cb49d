use anyhow::{bail, Result};
use chartfix::process::{clean_directory_arg, process_list, run_directory};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Repair track names in rhythm-game MIDI charts from their song.ini
/// metadata.
#[derive(Parser, Debug)]
#[command(name = "chartfix", version)]
#[command(about = "Fix chart track names from song.ini metadata")]
struct Cli {
    /// Full path to a directory containing notes.mid and song.ini
    #[arg(long, value_name = "PATH")]
    dir: Option<String>,

    /// Path to a file listing one chart directory per line
    #[arg(long, value_name = "FILE")]
    list: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.dir.is_none() && cli.list.is_none() {
        bail!("nothing to do: pass --dir and/or --list");
    }

    if let Some(raw) = &cli.dir {
        let dir = clean_directory_arg(raw);
        if dir.is_dir() {
            run_directory(&dir);
        } else {
            warn!("directory does not exist: {}", dir.display());
        }
    }

    if let Some(list) = &cli.list {
        if list.is_file() {
            process_list(list)?;
        } else {
            warn!("file does not exist: {}", list.display());
        }
    }

    Ok(())
}
