//! Exhaustive reply selection for the book's side

use crate::{
    Result,
    board::{Board, Player},
    error::Error,
};

/// Score of a finished position from the book's point of view.
const BOOK_WIN: i32 = 10;
const BOOK_LOSS: i32 = -10;

fn score(board: &Board) -> i32 {
    match board.winner() {
        Some(Player::O) => BOOK_WIN,
        Some(Player::X) => BOOK_LOSS,
        None => 0,
    }
}

/// Exhaustively evaluate `board` with the given side to move.
///
/// A completed line is checked before fullness, so a won position scores
/// immediately even when empty squares remain. Plain recursion over every
/// empty square in row-major order; no pruning, no memoization.
pub fn search(board: &Board, book_to_move: bool) -> i32 {
    if board.winner().is_some() {
        return score(board);
    }
    if board.is_full() {
        return 0;
    }

    let mark = if book_to_move { Player::O } else { Player::X };
    let mut best = if book_to_move { i32::MIN } else { i32::MAX };

    for pos in board.empty_positions() {
        let next = board
            .place(pos, mark)
            .expect("empty positions are always playable");
        let value = search(&next, !book_to_move);
        best = if book_to_move {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

/// Pick the book's reply on a board where it is O's turn.
///
/// Candidates are tried in row-major order and compared with a strict
/// greater-than, so the first square reaching the best score is kept.
///
/// # Errors
///
/// Returns [`Error::NoValidMoves`] if the board has no empty square.
pub fn best_reply(board: &Board) -> Result<usize> {
    let mut best_score = i32::MIN;
    let mut best_pos = None;

    for pos in board.empty_positions() {
        let next = board
            .place(pos, Player::O)
            .expect("empty positions are always playable");
        let value = search(&next, false);
        if value > best_score {
            best_score = value;
            best_pos = Some(pos);
        }
    }

    best_pos.ok_or(Error::NoValidMoves)
}
