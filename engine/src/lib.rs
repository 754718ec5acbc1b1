mod board;
mod controller;
mod error;
mod minimax;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, Board};
pub use controller::GameController;
pub use error::GameError;
pub use minimax::{SearchResult, best_move};
pub use types::{Cell, GameMode, Outcome, Player};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
