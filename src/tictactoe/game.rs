//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress: the current board, whose turn it is, and the
/// history of moves played.
///
/// This is where turn alternation lives; the [`Board`] itself is
/// mark-agnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub board: Board,
    pub to_move: Player,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game on an empty board with X to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Player::X,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game has concluded, or the
    /// underlying placement error for an occupied or out-of-range cell.
    pub fn play(&mut self, position: usize) -> crate::Result<()> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let next = self.board.place(position, self.to_move)?;

        self.moves.push(Move {
            position,
            player: self.to_move,
        });

        if next.is_terminal() {
            self.outcome = Some(if let Some(winner) = next.winner() {
                GameOutcome::Win(winner)
            } else {
                GameOutcome::Draw
            });
        }

        self.board = next;
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Check if the game has concluded
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
