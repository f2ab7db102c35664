use super::types::Mark;

pub fn make_board(size: usize) -> Vec<Vec<Mark>> {
    vec![vec![Mark::Empty; size]; size]
}

pub fn count_marks(board: &[Vec<Mark>]) -> usize {
    board
        .iter()
        .flatten()
        .filter(|&&cell| cell != Mark::Empty)
        .count()
}

/// Empty cells in row-major order. The search relies on this ordering for
/// its first-match tie-break.
pub fn get_available_moves(board: &[Vec<Mark>]) -> Vec<(usize, usize)> {
    let mut moves = Vec::new();
    for (y, row) in board.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push((x, y));
            }
        }
    }
    moves
}
