use super::board::Board;
use super::error::GameError;
use super::minimax::best_move;
use super::types::{Cell, GameMode, Outcome, Player};
use super::win_detector::{check_win, check_win_with_line};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    NotStarted,
    InProgress,
    Terminal(Outcome),
}

/// Turn sequencer owning the board. `NotStarted -> InProgress ->
/// Terminal`; `Terminal` is absorbing until `reset` or `new_game`.
///
/// The controller is the only writer of board cells during a game. It
/// trusts the caller to invoke `apply_move` on behalf of the side to
/// move; the only identity check is `request_auto_move` refusing to
/// act for a non-delegated side.
#[derive(Clone, Debug)]
pub struct GameController {
    board: Board,
    mode: Option<GameMode>,
    phase: Phase,
    current_player: Player,
}

impl GameController {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            mode: None,
            phase: Phase::NotStarted,
            current_player: Player::X,
        }
    }

    /// Starts a game in `mode` from any state, discarding whatever was
    /// on the board. X always moves first.
    pub fn new_game(&mut self, mode: GameMode) {
        self.board = Board::new();
        self.mode = Some(mode);
        self.phase = Phase::InProgress;
        self.current_player = Player::X;
    }

    /// Returns to `NotStarted` with a fresh board and no mode selected.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.mode = None;
        self.phase = Phase::NotStarted;
        self.current_player = Player::X;
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn current_board(&self) -> [Cell; 9] {
        self.board.cells()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn current_outcome(&self) -> Outcome {
        match self.phase {
            Phase::Terminal(outcome) => outcome,
            _ => Outcome::InProgress,
        }
    }

    /// Winning triple once the game has been won. The
    /// inconsistent-board diagnostic propagates instead of being
    /// swallowed, even though the controller's exclusive ownership of
    /// the board keeps it unreachable through normal play.
    pub fn winning_line(&self) -> Result<Option<[usize; 3]>, GameError> {
        Ok(check_win_with_line(&self.board)?.map(|(_, line)| line))
    }

    /// Applies a move for the side to move. Valid only in
    /// `InProgress`; rejected moves leave the board untouched.
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, GameError> {
        if self.phase != Phase::InProgress {
            return Err(GameError::IllegalMove { index });
        }

        self.board.place_mark(index, self.current_player)?;
        self.refresh_phase()?;

        if self.phase == Phase::InProgress {
            self.current_player = self.current_player.opponent();
        }

        Ok(self.current_outcome())
    }

    /// Lets the delegated side pick and play its move.
    pub fn request_auto_move(&mut self) -> Result<(usize, Outcome), GameError> {
        if self.phase != Phase::InProgress {
            return Err(GameError::NoLegalMoves);
        }
        let auto_player = match self.mode {
            Some(GameMode::HumanVsAuto { auto_player }) => auto_player,
            _ => return Err(GameError::NotYourTurn),
        };
        if self.current_player != auto_player {
            return Err(GameError::NotYourTurn);
        }

        let result = best_move(&mut self.board, auto_player, auto_player)?;
        let outcome = self.apply_move(result.index)?;
        Ok((result.index, outcome))
    }

    fn refresh_phase(&mut self) -> Result<(), GameError> {
        if let Some(winner) = check_win(&self.board)? {
            self.phase = Phase::Terminal(Outcome::Win(winner));
        } else if self.board.is_full() {
            self.phase = Phase::Terminal(Outcome::Draw);
        }
        Ok(())
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
