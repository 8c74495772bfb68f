//! jsontree CLI.
//!
//! Prints the reference document rendered as JSON-like text.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use jsontree::{reference_document, render_with, CliResult, RenderOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsontree")]
#[command(about = "Render a JSON value tree as text", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,

    /// Print the reference document
    Sample {
        /// Escape strings and quote object keys
        #[arg(long)]
        escape: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_sample(escape: bool) -> CliResult<()> {
    let options = if escape {
        RenderOptions::escaped()
    } else {
        RenderOptions::faithful()
    };
    tracing::debug!(?options, "rendering reference document");

    let rendered = render_with(&reference_document(), options);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Version) => {
            println!("jsontree v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Commands::Sample { escape }) => print_sample(escape),
        None => {
            println!("jsontree v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
