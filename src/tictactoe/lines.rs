//! Winning line analysis for Tic-Tac-Toe

use std::collections::HashSet;

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
///
/// The declaration order (rows, then columns, then diagonals) is the scan
/// order used by [`LineAnalyzer::first_winner`], so it is part of the
/// observable behavior on malformed boards.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Find the winner of the first completed line in declaration order.
    ///
    /// Boards constructed directly (rather than through legal play) can in
    /// principle complete lines for both marks; the first matching line
    /// decides, which preserves the fixed-order scan semantics.
    pub fn first_winner(cells: &[Cell; 9]) -> Option<Player> {
        WINNING_LINES.iter().find_map(|line| {
            let occupant = cells[line[0]];
            if occupant != Cell::Empty
                && cells[line[1]] == occupant
                && cells[line[2]] == occupant
            {
                occupant.to_player()
            } else {
                None
            }
        })
    }

    /// Find all positions that would immediately win for the player
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> HashSet<usize> {
        let mut moves = HashSet::new();
        for &line in &WINNING_LINES {
            if let Some(pos) = Self::winning_move_in_line(cells, player, &line) {
                moves.insert(pos);
            }
        }
        moves
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        // More than one empty cell, not a winning move
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 && empty_pos.is_some() {
            empty_pos
        } else {
            None
        }
    }
}
