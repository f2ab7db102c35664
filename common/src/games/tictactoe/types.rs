use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single cell occupant. `X` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    #[serde(rename = "")]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

/// Outcome of evaluating a board. Derived on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    None,
    Line,
    Stalemate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceMarkError {
    #[error("position ({x}, {y}) is outside the board")]
    OutOfBounds { x: usize, y: usize },

    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: usize, y: usize },
}
