#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    IndexOutOfRange { index: usize },
    IllegalMove { index: usize },
    NotYourTurn,
    NoLegalMoves,
    InconsistentBoardState,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::IndexOutOfRange { index } => {
                write!(f, "Cell index {} is out of bounds", index)
            }
            GameError::IllegalMove { index } => {
                write!(f, "Illegal move at cell {}", index)
            }
            GameError::NotYourTurn => write!(f, "Not your turn"),
            GameError::NoLegalMoves => write!(f, "No legal moves available"),
            GameError::InconsistentBoardState => {
                write!(f, "Inconsistent board: both players hold a winning line")
            }
        }
    }
}

impl std::error::Error for GameError {}
