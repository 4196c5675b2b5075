//! Play command - interactive human vs engine game

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    cli::output,
    search,
    tictactoe::{Board, Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the engine")]
pub struct PlayArgs {
    /// Random seed for reproducible tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    run_game(&mut input, &mut rng)
}

/// Run one full game against the engine, reading human input from `input`.
///
/// X always makes the first move, so a human choosing O hands the opening
/// to the engine.
fn run_game<I: BufRead, R: Rng>(input: &mut I, rng: &mut R) -> Result<()> {
    let human = prompt_mark(input)?;
    let computer = human.opponent();
    println!("You play {human}, the computer plays {computer}. X moves first.");

    let mut game = Game::new();
    while !game.is_over() {
        output::print_board(&game.board);

        if game.to_move == human {
            let pos = prompt_move(input, &game.board)?;
            game.play(pos)?;
        } else {
            let pos = search::best_move(game.board, human, computer, rng)?;
            println!("Computer plays at position {pos}");
            game.play(pos)?;
        }
    }

    output::print_board(&game.board);
    match game.outcome {
        Some(GameOutcome::Win(winner)) if winner == computer => println!("Computer wins!"),
        Some(GameOutcome::Win(_)) => println!("You win!"),
        _ => println!("It's a draw!"),
    }

    Ok(())
}

/// Ask for the human's mark until a valid one is entered
fn prompt_mark<I: BufRead>(input: &mut I) -> Result<Player> {
    loop {
        print!("Choose your mark (X/O): ");
        std::io::stdout().flush()?;

        let line = read_line(input)?;
        match Player::parse(&line) {
            Ok(player) => return Ok(player),
            Err(_) => println!("Invalid choice. Please choose X or O."),
        }
    }
}

/// Ask for a move until a legal one for the given board is entered.
///
/// Out-of-range, occupied, and unparseable input is recovered here by
/// reprompting; the engine is never consulted about invalid moves.
fn prompt_move<I: BufRead>(input: &mut I, board: &Board) -> Result<usize> {
    loop {
        print!("Enter your move (0-8): ");
        std::io::stdout().flush()?;

        let line = read_line(input)?;
        match parse_move(&line, board) {
            Some(pos) => return Ok(pos),
            None => println!("Invalid move. Try again."),
        }
    }
}

/// Parse a move entry, requiring an in-range index on an empty cell
fn parse_move(line: &str, board: &Board) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|&pos| pos < 9 && board.is_empty(pos))
}

fn read_line<I: BufRead>(input: &mut I) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input ended before the game finished");
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_parse_move() {
        let board = Board::from_string("X........").unwrap();
        assert_eq!(parse_move("4\n", &board), Some(4));
        assert_eq!(parse_move(" 8 ", &board), Some(8));
        assert_eq!(parse_move("0", &board), None, "occupied cell");
        assert_eq!(parse_move("9", &board), None, "out of range");
        assert_eq!(parse_move("four", &board), None);
        assert_eq!(parse_move("-1", &board), None);
    }

    #[test]
    fn test_prompt_mark_reprompts_until_valid() {
        let mut input = Cursor::new("q\n7\n\no\n");
        assert_eq!(prompt_mark(&mut input).unwrap(), Player::O);
    }

    #[test]
    fn test_prompt_mark_fails_at_eof() {
        let mut input = Cursor::new("q\n");
        assert!(prompt_mark(&mut input).is_err());
    }

    #[test]
    fn test_prompt_move_skips_illegal_entries() {
        let board = Board::from_string("X........").unwrap();
        let mut input = Cursor::new("0\n9\nabc\n5\n");
        assert_eq!(prompt_move(&mut input, &board).unwrap(), 5);
    }

    #[test]
    fn test_full_game_runs_to_completion() {
        // The human plays X and blindly tries every cell each turn; the
        // occupied ones reprompt and consume the next line, so the script
        // is several passes over all nine cells.
        let mut script = String::from("x\n");
        for _ in 0..5 {
            for pos in 0..9 {
                script.push_str(&format!("{pos}\n"));
            }
        }

        let mut input = Cursor::new(script);
        let mut rng = StdRng::seed_from_u64(7);
        run_game(&mut input, &mut rng).unwrap();
    }
}
