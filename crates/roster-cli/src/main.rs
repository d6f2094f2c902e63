use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use roster_core::PatientStore;

mod menu;

#[derive(Debug, Parser)]
#[command(
    name = "roster",
    version,
    about = "Interactive console for managing a patient roster",
    long_about = "roster keeps a small in-memory roster of patient records.\n\n\
        Records are added, listed, updated, deleted, and looked up by their\n\
        numeric identifier through an interactive menu. Nothing is persisted;\n\
        the roster lives only for the session."
)]
struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // An interrupt during any prompt ends the session cleanly.
    ctrlc::set_handler(|| {
        println!("\n{}", menu::EXIT_NOTICE);
        process::exit(0);
    })?;

    tracing::debug!("session started");

    let mut store = PatientStore::new();
    menu::run(&mut io::stdin().lock(), &mut io::stdout(), &mut store)?;
    Ok(())
}

/// Initialize the log subscriber. `RUST_LOG` wins over the verbosity flag;
/// logs go to stderr so they never interleave with the menu.
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
