use super::board::get_available_moves;
use super::game_state::TicTacToeGameState;
use super::types::{GameResult, Position};

/// Exhaustive minimax over every legal continuation. Returns the optimal
/// score together with the move that achieves it, from the perspective of
/// the side that initiated the top-level call: +1 a win for that side, -1
/// a loss, 0 a draw. Among equally scored moves the first one in row-major
/// scan order is kept. Callers must check the game result first; with no
/// empty cells left the sentinel score and (0, 0) are returned.
pub fn calculate_move(state: &TicTacToeGameState, is_max: bool) -> (i32, Position) {
    let multiplier: i32 = if is_max { 1 } else { -1 };
    let mut best_score = if is_max { i32::MIN } else { i32::MAX };
    let mut best_position = Position::new(0, 0);

    for (x, y) in get_available_moves(&state.board) {
        let mut candidate = state.clone();
        if let Err(err) = candidate.place_mark(x, y) {
            // The cell was just verified empty, so this cannot be skipped.
            panic!("search failed to place a mark on an empty cell: {err}");
        }

        let (result, _) = candidate.get_game_result();
        if result == GameResult::Line {
            return (multiplier, Position::new(x, y));
        }
        if result == GameResult::Stalemate {
            return (0, Position::new(x, y));
        }

        let (score, _) = calculate_move(&candidate, !is_max);

        if (is_max && score > best_score) || (!is_max && score < best_score) {
            best_score = score;
            best_position = Position::new(x, y);
        }
    }

    (best_score, best_position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::types::Mark;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    fn state_from_rows(rows: [[Mark; 3]; 3]) -> TicTacToeGameState {
        TicTacToeGameState::from_board(rows.iter().map(|row| row.to_vec()).collect())
    }

    #[test]
    fn test_minimax_takes_immediate_win() {
        let state = state_from_rows([
            [X, E, E],
            [X, X, O],
            [E, E, O],
        ]);
        assert_eq!(state.turn, 6);

        let (score, position) = calculate_move(&state, true);

        assert_eq!(position, Position::new(2, 0));
        assert_eq!(score, 1);
    }

    #[test]
    fn test_minimax_blocks_winning_threat() {
        let state = state_from_rows([
            [O, E, E],
            [X, X, E],
            [E, E, E],
        ]);
        assert_eq!(state.turn, 4);

        let (score, position) = calculate_move(&state, true);

        assert_eq!(position, Position::new(2, 1));
        assert_eq!(score, 0);
    }

    #[test]
    fn test_minimax_empty_board_is_a_draw() {
        let state = TicTacToeGameState::new(3);

        let (score, position) = calculate_move(&state, true);

        assert_eq!(score, 0);
        // Every opening move draws under perfect play, so the first
        // candidate in scan order is kept.
        assert_eq!(position, Position::new(0, 0));
    }

    #[test]
    fn test_minimax_minimizing_level_scores_win_negative() {
        let state = state_from_rows([
            [X, E, E],
            [X, X, O],
            [E, E, O],
        ]);

        let (score, position) = calculate_move(&state, false);

        assert_eq!(position, Position::new(2, 0));
        assert_eq!(score, -1);
    }

    #[test]
    fn test_minimax_full_board_returns_sentinel() {
        let state = state_from_rows([
            [X, O, X],
            [X, O, O],
            [O, X, X],
        ]);

        let (score, position) = calculate_move(&state, true);

        assert_eq!(score, i32::MIN);
        assert_eq!(position, Position::new(0, 0));
    }
}
