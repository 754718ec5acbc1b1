use super::board::Board;
use super::error::GameError;
use super::types::{Cell, Player};
use super::win_detector::check_win;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub index: usize,
    pub score: i32,
}

/// Game-theoretically optimal move for `player_to_move`, scored from
/// `auto_player`'s perspective. Exhaustive full-depth search; at 3x3
/// the worst case is 9! leaf evaluations, so no pruning is applied
/// (and none should be added without preserving the tie-break below).
///
/// Ties resolve to the lowest cell index: cells are scanned 0..9 and
/// the retained best is replaced only on a strictly better score, so
/// repeated calls on the same position return the same move.
///
/// The board is mutated during the search but restored before every
/// return, including error returns.
pub fn best_move(
    board: &mut Board,
    player_to_move: Player,
    auto_player: Player,
) -> Result<SearchResult, GameError> {
    if check_win(board)?.is_some() || board.is_full() {
        return Err(GameError::NoLegalMoves);
    }

    let maximizing = player_to_move == auto_player;
    let mut best: Option<SearchResult> = None;

    for index in board.empty_cells() {
        board.set(index, player_to_move.cell());
        let result = minimax(board, 1, player_to_move.opponent(), auto_player);
        board.set(index, Cell::Empty);
        let score = result?;

        let replace = match best {
            None => true,
            Some(current) => {
                if maximizing {
                    score > current.score
                } else {
                    score < current.score
                }
            }
        };
        if replace {
            best = Some(SearchResult { index, score });
        }
    }

    // The terminal check above guarantees at least one empty cell.
    best.ok_or(GameError::NoLegalMoves)
}

/// Score of the position with `player_to_move` to act, `depth` plies
/// below the root call. Wins for `auto_player` score `10 - depth`,
/// losses `depth - 10`, draws 0, so faster wins and slower losses are
/// preferred.
fn minimax(
    board: &mut Board,
    depth: i32,
    player_to_move: Player,
    auto_player: Player,
) -> Result<i32, GameError> {
    if let Some(winner) = check_win(board)? {
        return Ok(if winner == auto_player {
            10 - depth
        } else {
            depth - 10
        });
    }
    if board.is_full() {
        return Ok(0);
    }

    let maximizing = player_to_move == auto_player;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in board.empty_cells() {
        board.set(index, player_to_move.cell());
        let result = minimax(board, depth + 1, player_to_move.opponent(), auto_player);
        board.set(index, Cell::Empty);
        let score = result?;

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    Ok(best)
}
