//! Selfplay command - engine vs engine games

use anyhow::Result;
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    cli::output,
    search,
    tictactoe::{Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against itself")]
pub struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    };

    println!("Engine self-play: {} games", args.games);
    if let Some(seed) = args.seed {
        println!("Seed: {seed}");
    }

    let pb = output::create_selfplay_progress(args.games as u64);
    let mut x_wins = 0usize;
    let mut o_wins = 0usize;
    let mut draws = 0usize;

    for game_num in 1..=args.games {
        match play_one(&mut rng)? {
            GameOutcome::Win(Player::X) => x_wins += 1,
            GameOutcome::Win(Player::O) => o_wins += 1,
            GameOutcome::Draw => draws += 1,
        }
        pb.set_position(game_num as u64);
        pb.set_message(format!("X:{x_wins} O:{o_wins} D:{draws}"));
    }
    pb.finish();

    let total = args.games.max(1) as f64;
    output::print_section("Self-Play Results");
    output::print_kv("Total games", &args.games.to_string());
    output::print_kv(
        "X wins",
        &format!("{} ({:.1}%)", x_wins, x_wins as f64 / total * 100.0),
    );
    output::print_kv(
        "O wins",
        &format!("{} ({:.1}%)", o_wins, o_wins as f64 / total * 100.0),
    );
    output::print_kv(
        "Draws",
        &format!("{} ({:.1}%)", draws, draws as f64 / total * 100.0),
    );

    Ok(())
}

/// Play one game with both sides choosing optimally.
///
/// Each side calls the engine with itself as the maximizing mark, so the
/// same tie-break RNG drives both players.
fn play_one<R: Rng>(rng: &mut R) -> crate::Result<GameOutcome> {
    let mut game = Game::new();
    while !game.is_over() {
        let mover = game.to_move;
        let pos = search::best_move(game.board, mover.opponent(), mover, rng)?;
        game.play(pos)?;
    }
    Ok(game
        .outcome
        .expect("a finished game always has an outcome"))
}
