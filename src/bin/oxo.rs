//! oxo CLI - perfect-play Tic-Tac-Toe engine
//!
//! This CLI provides a unified interface for:
//! - Playing interactive games against the optimal engine
//! - Analyzing the game-theoretic value of positions
//! - Running engine-vs-engine self-play

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Perfect-play Tic-Tac-Toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(oxo::cli::commands::play::PlayArgs),

    /// Analyze a position under perfect play
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Play the engine against itself
    Selfplay(oxo::cli::commands::selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Selfplay(args) => oxo::cli::commands::selfplay::execute(args),
    }
}
