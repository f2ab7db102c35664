use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use common::games::tictactoe::{GameResult, Mark, TicTacToeGameState, calculate_move};

use crate::log;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameStateRequest {
    pub board: Vec<Vec<Mark>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub board: Vec<Vec<Mark>>,
    pub result: GameResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_row: Option<Vec<Vec<Mark>>>,
    pub turn: usize,
    pub next_player: Mark,
}

/// Accepts the current board, plays the optimal reply when the game is
/// still open and responds with the new state of the game.
pub async fn handle_game_state(
    Json(request): Json<GameStateRequest>,
) -> Result<Json<GameStateResponse>, (StatusCode, String)> {
    if !is_square(&request.board) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Board must be a square grid".to_string(),
        ));
    }

    let mut state = TicTacToeGameState::from_board(request.board);

    let (mut result, mut winning_row) = state.get_game_result();
    if result == GameResult::None {
        let (_, position) = calculate_move(&state, true);
        if let Err(err) = state.place_mark(position.x, position.y) {
            log!("Failed to apply computed move: {}", err);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to apply computed move: {}", err),
            ));
        }
        (result, winning_row) = state.get_game_result();
    }

    let next_player = state.current_mark();
    Ok(Json(GameStateResponse {
        board: state.board,
        result,
        winning_row,
        turn: state.turn,
        next_player,
    }))
}

fn is_square(board: &[Vec<Mark>]) -> bool {
    let size = board.len();
    board.iter().all(|row| row.len() == size)
}
