//! dtcgen - Design-to-code project generator
//!
//! This application turns a design-tool export into a buildable source
//! project by binding extracted design data into a template skeleton.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dtcgen::cli::{GenerateArgs, InspectArgs};

/// Design-to-code project generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a source project from a design export
    Generate(GenerateArgs),
    /// Print derived container configurations as JSON
    Inspect(InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
    }
}
