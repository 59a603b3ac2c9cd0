//! dirinfo: inventory a directory tree and list the file extensions in it.
//!
//! Thin binary entry point. All logic lives in the `dirinfo-core`
//! and `dirinfo-cli` crates.
use anyhow::Context;
use clap::{ArgAction, Parser};
use dirinfo_cli::{App, SaveOptions};
use std::io;
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directory or `.json` file to process once, without prompting.
    /// Starts the interactive prompt when omitted.
    input: Option<PathBuf>,

    /// Save the resulting tree to this `.json` file (requires INPUT).
    #[arg(short, long, requires = "input")]
    output: Option<PathBuf>,

    /// Overwrite the `--output` file if it already exists.
    #[arg(short, long, requires = "output")]
    force: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the prompt transcript on stdout stays clean.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    tracing::info!("dirinfo starting");

    let mut app = App::new(io::stdin().lock(), io::stdout().lock());

    match &cli.input {
        Some(input) => {
            let save = cli.output.clone().map(|path| SaveOptions {
                path,
                overwrite: cli.force,
            });
            app.run_once(input, save.as_ref())?;
        }
        None => app.run().context("terminal I/O failed")?,
    }

    Ok(())
}
