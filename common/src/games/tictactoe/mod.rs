mod board;
mod bot_controller;
mod game_state;
mod types;

pub use board::{count_marks, get_available_moves, make_board};
pub use bot_controller::calculate_move;
pub use game_state::TicTacToeGameState;
pub use types::{GameResult, Mark, PlaceMarkError, Position};
