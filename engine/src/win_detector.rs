use super::board::Board;
use super::error::GameError;
use super::types::Player;

/// The eight winning lines: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn line_for(board: &Board, player: Player) -> Option<[usize; 3]> {
    let mark = player.cell();
    WIN_LINES
        .iter()
        .find(|line| line.iter().all(|&index| board.get(index) == mark))
        .copied()
}

/// Winner of the board, if any. Both players are checked independently;
/// a board where both hold a complete line cannot arise through legal
/// play and is reported rather than silently resolved.
pub fn check_win(board: &Board) -> Result<Option<Player>, GameError> {
    Ok(check_win_with_line(board)?.map(|(player, _)| player))
}

pub fn check_win_with_line(board: &Board) -> Result<Option<(Player, [usize; 3])>, GameError> {
    let x_line = line_for(board, Player::X);
    let o_line = line_for(board, Player::O);

    match (x_line, o_line) {
        (Some(_), Some(_)) => Err(GameError::InconsistentBoardState),
        (Some(line), None) => Ok(Some((Player::X, line))),
        (None, Some(line)) => Ok(Some((Player::O, line))),
        (None, None) => Ok(None),
    }
}
