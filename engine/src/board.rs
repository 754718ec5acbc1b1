use super::error::GameError;
use super::types::{Cell, Player};

pub const BOARD_CELLS: usize = 9;

/// 3x3 board, row-major: cells 0,1,2 are the top row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Builds a board from raw cells. The only way to reach a position
    /// the controller could not have produced; `check_win` reports
    /// `InconsistentBoardState` if both players hold a line.
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> [Cell; BOARD_CELLS] {
        self.cells
    }

    pub fn cell_at(&self, index: usize) -> Result<Cell, GameError> {
        if index >= BOARD_CELLS {
            return Err(GameError::IndexOutOfRange { index });
        }
        Ok(self.cells[index])
    }

    pub fn place_mark(&mut self, index: usize, player: Player) -> Result<(), GameError> {
        if index >= BOARD_CELLS {
            return Err(GameError::IndexOutOfRange { index });
        }
        if self.cells[index] != Cell::Empty {
            return Err(GameError::IllegalMove { index });
        }
        self.cells[index] = player.cell();
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Fresh snapshot of the empty cell indices, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Unchecked write for the search's hypothetical placements.
    /// Callers pass indices obtained from `empty_cells`.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    pub(crate) fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(!board.is_full());
        assert_eq!(board.empty_cells(), (0..BOARD_CELLS).collect::<Vec<_>>());
    }

    #[test]
    fn test_place_mark_sets_cell() {
        let mut board = Board::new();
        board.place_mark(4, Player::X).unwrap();
        assert_eq!(board.cell_at(4).unwrap(), Cell::X);
    }

    #[test]
    fn test_place_mark_out_of_range_rejected() {
        let mut board = Board::new();
        let result = board.place_mark(9, Player::X);
        assert_eq!(result, Err(GameError::IndexOutOfRange { index: 9 }));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_mark_on_occupied_cell_rejected() {
        let mut board = Board::new();
        board.place_mark(0, Player::X).unwrap();
        let before = board.clone();
        let result = board.place_mark(0, Player::O);
        assert_eq!(result, Err(GameError::IllegalMove { index: 0 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.cell_at(12),
            Err(GameError::IndexOutOfRange { index: 12 })
        );
    }

    #[test]
    fn test_empty_cells_ascending_after_moves() {
        let mut board = Board::new();
        board.place_mark(7, Player::X).unwrap();
        board.place_mark(2, Player::O).unwrap();
        board.place_mark(4, Player::X).unwrap();
        assert_eq!(board.empty_cells(), vec![0, 1, 3, 5, 6, 8]);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        let mut player = Player::X;
        for index in 0..BOARD_CELLS {
            board.place_mark(index, player).unwrap();
            player = player.opponent();
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }
}
