// src/main.rs

use std::{env, fs::OpenOptions, path::PathBuf, process::ExitCode, sync::Mutex};

use anyhow::Result;
use clap::Parser;

use dirpick::{
    app::{Outcome, Picker, PickerMode},
    config::Config,
    ui,
};

/// Terminal file and folder picker.
///
/// Prints the selected path to stdout; exits with status 1 on cancellation.
#[derive(Parser, Debug)]
#[command(name = "dirpick", version, about)]
struct Cli {
    /// Directory to start browsing from
    start: Option<PathBuf>,

    /// Pick a folder instead of a file (confirm with 's')
    #[arg(short = 'f', long)]
    folder: bool,

    /// Hide files while picking a folder
    #[arg(long)]
    folders_only: bool,
}

fn main() -> Result<ExitCode> {
    init_logging()?;

    let cli = Cli::parse();
    let mut config = Config::load();
    if cli.folders_only {
        config.picker.folders_only = true;
    }

    let mode = if cli.folder {
        PickerMode::Folder
    } else {
        PickerMode::File
    };

    let mut picker = Picker::new(mode, cli.start, &config);
    match ui::run(&mut picker)? {
        Outcome::Selected(path) => {
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Cancelled => Ok(ExitCode::from(1)),
    }
}

/// The dialog owns the terminal, so logs go to a file instead: set
/// `DIRPICK_LOG=/path/to/log` to enable them.
fn init_logging() -> Result<()> {
    let Ok(path) = env::var("DIRPICK_LOG") else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    Ok(())
}
