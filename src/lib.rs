//! # Connect Four Engine
//!
//! The rules engine for a two-player Connect Four game: board representation,
//! piece-drop validation, four-in-a-row detection across all orientations, and
//! the turn/terminal-state machine. The engine is pure logic with a
//! synchronous request/response API; rendering and input capture belong to the
//! host (this crate ships a terminal front end as one such host).
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`ui`] — Terminal front end (no game logic)
//!
//! ## Example
//!
//! ```
//! use connect_four_engine::game::{Game, GameStatus, Player};
//!
//! let mut game = Game::new(6, 7)?;
//! let placement = game.drop_piece(3)?;
//! assert_eq!(placement.player, Player::Red);
//! assert_eq!(placement.row, 5);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), connect_four_engine::error::GameError>(())
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
