//! Analyze command - game-theoretic value and optimal moves for a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output,
    search,
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a position under perfect play")]
pub struct AnalyzeArgs {
    /// Position as 9 cell characters ('.', 'X', 'O'), e.g. "XOX.O...."
    pub position: String,

    /// Mark the engine plays, which is also the side to move: `x` or `o`
    #[arg(long, short = 'c', default_value = "x")]
    pub computer: String,

    /// Emit the decision as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct AnalysisReport {
    position: String,
    computer: Player,
    value: i32,
    optimal_moves: Vec<usize>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.position)?;
    let computer = Player::parse(&args.computer)?;
    let human = computer.opponent();

    let decision = search::decide(board, human, computer)?;

    if args.json {
        let report = AnalysisReport {
            position: args.position.clone(),
            computer,
            value: decision.value,
            optimal_moves: decision.optimal_moves,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_section("Position Analysis");
    println!("{board}\n");
    output::print_kv("Engine mark", &computer.to_string());
    output::print_kv("Value", describe_value(decision.value));
    output::print_kv("Optimal moves", &format_moves(&decision.optimal_moves));

    Ok(())
}

fn describe_value(value: i32) -> &'static str {
    match value {
        1 => "engine wins with perfect play",
        -1 => "engine loses with perfect play",
        _ => "draw with perfect play",
    }
}

fn format_moves(moves: &[usize]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
