//! Exhaustive minimax search for perfect play.
//!
//! Every call is a fresh, stateless descent over the game tree rooted at
//! the given board. Depth is bounded by the 9 cells, so the search always
//! terminates; there is no pruning and no memoization, and every reachable
//! leaf of the remaining subtree is visited.

use rand::{Rng, prelude::IndexedRandom};
use serde::Serialize;

use crate::tictactoe::{Board, Player};

/// The game-theoretic value of a position together with every root move
/// that achieves it.
#[derive(Debug, Clone, Serialize)]
pub struct Decision {
    /// Position value from the computer's perspective: +1 win, 0 draw,
    /// -1 loss under optimal play by both sides.
    pub value: i32,
    /// All moves tied at the optimal value, in ascending position order.
    pub optimal_moves: Vec<usize>,
}

/// Evaluate a position under optimal play by both sides.
///
/// Returns +1 if `computer` wins, -1 if `human` wins, 0 for a draw, always
/// from the computer's perspective. `maximizing` selects which mark makes
/// the next move: the computer at maximizing nodes, the human at
/// minimizing nodes, flipping each ply.
pub fn evaluate(board: Board, maximizing: bool, human: Player, computer: Player) -> i32 {
    match board.winner() {
        Some(winner) if winner == computer => return 1,
        Some(_) => return -1,
        None => {}
    }
    if board.is_full() {
        return 0;
    }

    let mover = if maximizing { computer } else { human };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in board.legal_moves() {
        let next = board
            .place(mv, mover)
            .expect("legal move generation should not fail");
        let score = evaluate(next, !maximizing, human, computer);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Compute the optimal value of a position and every move achieving it.
///
/// Each root move is applied with the computer's mark and the resulting
/// board evaluated with the human to reply, so `value` is what the
/// computer can guarantee from here.
///
/// # Errors
///
/// Returns [`crate::Error::GameOver`] on a terminal board and
/// [`crate::Error::NoValidMoves`] when no legal move exists; callers are
/// expected to check [`Board::is_terminal`] before asking for a decision.
pub fn decide(board: Board, human: Player, computer: Player) -> crate::Result<Decision> {
    if board.is_terminal() {
        return Err(crate::Error::GameOver);
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(crate::Error::NoValidMoves);
    }

    let mut value = i32::MIN;
    let mut optimal_moves: Vec<usize> = Vec::new();

    for mv in moves {
        let next = board
            .place(mv, computer)
            .expect("legal move generation should not fail");
        let score = evaluate(next, false, human, computer);

        if score > value {
            value = score;
            optimal_moves.clear();
            optimal_moves.push(mv);
        } else if score == value {
            optimal_moves.push(mv);
        }
    }

    Ok(Decision {
        value,
        optimal_moves,
    })
}

/// Pick the computer's move: uniformly at random among all moves tied at
/// the optimal value.
///
/// The randomized tie-break avoids deterministic, exploitable play among
/// equally optimal alternatives without affecting optimality. The RNG is
/// supplied by the caller, so tie-breaking is reproducible under a seeded
/// generator.
///
/// # Errors
///
/// Same preconditions as [`decide`].
pub fn best_move<R: Rng + ?Sized>(
    board: Board,
    human: Player,
    computer: Player,
    rng: &mut R,
) -> crate::Result<usize> {
    let decision = decide(board, human, computer)?;
    decision
        .optimal_moves
        .choose(rng)
        .copied()
        .ok_or(crate::Error::NoValidMoves)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::tictactoe::Board;

    #[test]
    fn test_empty_board_is_a_draw() {
        let board = Board::new();
        assert_eq!(evaluate(board, true, Player::O, Player::X), 0);
    }

    #[test]
    fn test_immediate_win_is_unique_optimum() {
        // XX.
        // OO.
        // ...
        // X to move wins at 2; no other move is as good.
        let board = Board::from_string("XX.OO....").unwrap();
        let decision = decide(board, Player::O, Player::X).unwrap();
        assert_eq!(decision.value, 1);
        assert_eq!(decision.optimal_moves, vec![2]);

        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10 {
            assert_eq!(best_move(board, Player::O, Player::X, &mut rng).unwrap(), 2);
        }
    }

    #[test]
    fn test_block_when_no_win_available() {
        // XX.
        // .O.
        // ...
        // O to move as the computer has no win anywhere; blocking at 2 is
        // the unique move that avoids the loss, and best play then draws.
        let board = Board::from_string("XX..O....").unwrap();
        let decision = decide(board, Player::X, Player::O).unwrap();
        assert_eq!(decision.value, 0);
        assert_eq!(decision.optimal_moves, vec![2]);
    }

    #[test]
    fn test_takes_win_over_block() {
        // X.X
        // OO.
        // ...
        // X to move could block O's row at 5, but completing the top row
        // at 1 wins outright and is strictly better.
        let board = Board::from_string("X.XOO....").unwrap();
        let decision = decide(board, Player::O, Player::X).unwrap();
        assert_eq!(decision.value, 1);
        assert_eq!(decision.optimal_moves, vec![1]);
    }

    #[test]
    fn test_decide_rejects_terminal_board() {
        let won = Board::from_string("XXXOO....").unwrap();
        assert!(matches!(
            decide(won, Player::O, Player::X),
            Err(crate::Error::GameOver)
        ));

        let drawn = Board::from_string("XOXOXOOXO").unwrap();
        assert!(matches!(
            decide(drawn, Player::O, Player::X),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn test_decide_is_deterministic() {
        let board = Board::from_string("X...O....").unwrap();
        let first = decide(board, Player::O, Player::X).unwrap();
        let second = decide(board, Player::O, Player::X).unwrap();
        assert_eq!(first.value, second.value);
        assert_eq!(first.optimal_moves, second.optimal_moves);
    }

    #[test]
    fn test_best_move_deterministic_under_seed() {
        let board = Board::new();

        let mut rng1 = StdRng::seed_from_u64(12345);
        let mut rng2 = StdRng::seed_from_u64(12345);
        for _ in 0..5 {
            assert_eq!(
                best_move(board, Player::O, Player::X, &mut rng1).unwrap(),
                best_move(board, Player::O, Player::X, &mut rng2).unwrap()
            );
        }
    }

    #[test]
    fn test_opening_moves_all_draw() {
        // Perfect play draws from the empty board, so every opening reply
        // is tied at value 0 and remains a candidate.
        let board = Board::new();
        let decision = decide(board, Player::O, Player::X).unwrap();
        assert_eq!(decision.value, 0);
        assert_eq!(decision.optimal_moves, (0..9).collect::<Vec<_>>());
    }
}
