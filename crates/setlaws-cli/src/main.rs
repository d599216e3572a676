use std::error::Error;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::relations::{self, RelationsArgs};
use config::InputArgs;

mod commands;
mod config;

#[derive(Parser, Debug)]
#[command(
    name = "setlaws",
    about = "Verify set-algebra identities and explain them in text or LaTeX"
)]
struct Cli {
    #[command(flatten)]
    input: InputArgs,
    /// Increase log verbosity (`-v` info, `-vv` debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check every law and print plain-text explanations.
    Verify,
    /// Print LaTeX derivations for every law.
    Latex,
    /// Describe pairwise subset relationships.
    Relations(RelationsArgs),
    /// Emit the verification report as canonical JSON.
    Report,
    /// Run the built-in textbook example.
    Demo,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    // An explicit RUST_LOG replaces the -v level entirely.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Verify => commands::verify::run(&cli.input),
        Command::Latex => commands::latex::run(&cli.input),
        Command::Relations(args) => relations::run(&cli.input, &args),
        Command::Report => commands::report::run(&cli.input),
        Command::Demo => commands::demo::run(&cli.input),
    }
}
