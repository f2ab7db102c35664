use super::board::{count_marks, make_board};
use super::types::{GameResult, Mark, PlaceMarkError};

/// Board plus a 1-based move counter. The parity of `turn` decides who
/// moves next, so the counter is always derived from the board contents
/// rather than trusted from external input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Vec<Vec<Mark>>,
    pub turn: usize,
}

impl TicTacToeGameState {
    pub fn new(size: usize) -> Self {
        Self {
            board: make_board(size),
            turn: 1,
        }
    }

    pub fn from_board(board: Vec<Vec<Mark>>) -> Self {
        let turn = count_marks(&board) + 1;
        Self { board, turn }
    }

    pub fn size(&self) -> usize {
        self.board.len()
    }

    pub fn current_mark(&self) -> Mark {
        if self.turn % 2 == 1 { Mark::X } else { Mark::O }
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.board[y][x] != Mark::Empty
    }

    /// The sole mutator: writes the current mover's mark and advances the
    /// turn counter. On error the board and counter are left untouched.
    pub fn place_mark(&mut self, x: usize, y: usize) -> Result<(), PlaceMarkError> {
        let size = self.size();
        if x >= size || y >= size {
            return Err(PlaceMarkError::OutOfBounds { x, y });
        }
        if self.board[y][x] != Mark::Empty {
            return Err(PlaceMarkError::CellOccupied { x, y });
        }

        self.board[y][x] = self.current_mark();
        self.turn += 1;
        Ok(())
    }

    /// Scans for a completed line: main diagonal, anti-diagonal, then for
    /// each index j the column j followed by the row j. The first match in
    /// that order wins; when several lines are complete at once only the
    /// first one is reported. Returns the winning line as a grid that is
    /// empty everywhere except the line's own cells.
    pub fn get_game_result(&self) -> (GameResult, Option<Vec<Vec<Mark>>>) {
        let size = self.size();

        if let Some(line) = self.check_diagonal() {
            return (GameResult::Line, Some(line));
        }
        if let Some(line) = self.check_anti_diagonal() {
            return (GameResult::Line, Some(line));
        }
        for j in 0..size {
            if let Some(line) = self.check_column(j) {
                return (GameResult::Line, Some(line));
            }
            if let Some(line) = self.check_row(j) {
                return (GameResult::Line, Some(line));
            }
        }

        if self.turn > size * size {
            return (GameResult::Stalemate, None);
        }

        (GameResult::None, None)
    }

    fn check_diagonal(&self) -> Option<Vec<Vec<Mark>>> {
        let cells: Vec<(usize, usize)> = (0..self.size()).map(|i| (i, i)).collect();
        self.extract_line(&cells)
    }

    fn check_anti_diagonal(&self) -> Option<Vec<Vec<Mark>>> {
        let size = self.size();
        let cells: Vec<(usize, usize)> = (0..size).map(|i| (i, size - 1 - i)).collect();
        self.extract_line(&cells)
    }

    fn check_column(&self, x: usize) -> Option<Vec<Vec<Mark>>> {
        let cells: Vec<(usize, usize)> = (0..self.size()).map(|y| (x, y)).collect();
        self.extract_line(&cells)
    }

    fn check_row(&self, y: usize) -> Option<Vec<Vec<Mark>>> {
        let cells: Vec<(usize, usize)> = (0..self.size()).map(|x| (x, y)).collect();
        self.extract_line(&cells)
    }

    fn extract_line(&self, cells: &[(usize, usize)]) -> Option<Vec<Vec<Mark>>> {
        let &(first_x, first_y) = cells.first()?;
        let mark = self.board[first_y][first_x];
        if mark == Mark::Empty {
            return None;
        }
        if cells.iter().any(|&(x, y)| self.board[y][x] != mark) {
            return None;
        }

        let mut line = make_board(self.size());
        for &(x, y) in cells {
            line[y][x] = mark;
        }
        Some(line)
    }
}
