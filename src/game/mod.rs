//! Core Connect Four game logic: board representation, player types, and the
//! turn/terminal state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIM};
pub use player::Player;
pub use state::{Game, GameStatus, Placement};
