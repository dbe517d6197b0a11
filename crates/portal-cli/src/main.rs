//! Serial exerciser and operator console for the Mystery Melody Machine.
//!
//! Scripted mode walks the device through every portal command and checks
//! the acknowledgements; interactive mode gives an operator a line-based
//! console. Both are thin shells over [`portal_client::PortalClient`].

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use portal_client::{LinkError, PortalClient};
use tracing_subscriber::EnvFilter;

mod commands;
mod interactive;
mod script;

/// Exercise the Mystery Melody Machine serial portal protocol.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Serial port the device is attached to.
    #[arg(default_value = "/dev/ttyACM0")]
    port: String,

    /// Baud rate for the serial link.
    #[arg(long, default_value_t = 115_200)]
    baud: u32,

    /// Per-read timeout in milliseconds.
    #[arg(long, default_value_t = 1_000)]
    timeout_ms: u64,

    #[command(subcommand)]
    mode: Option<Mode>,
}

/// What to do with the open port.
#[derive(Debug, Clone, Copy, Subcommand)]
enum Mode {
    /// Run the scripted exercise sequence (the default).
    Test,
    /// Drop into the interactive operator console.
    Interactive,
}

fn run(cli: &Cli) -> Result<(), LinkError> {
    let port = portal_client::open(&cli.port, cli.baud, Duration::from_millis(cli.timeout_ms))?;
    println!("Connected to {} at {} baud", cli.port, cli.baud);
    let mut client = PortalClient::new(port);

    match cli.mode.unwrap_or(Mode::Test) {
        Mode::Test => script::run(&mut client),
        Mode::Interactive => interactive::run(&mut client),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Serial communication error: {err}");
        eprintln!("Make sure the device is connected and the correct port is specified");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
