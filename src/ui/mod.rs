//! Terminal front end for the engine. Maps key presses to `drop_piece` calls
//! and re-renders from the game state; contains no game logic of its own.

mod app;
mod game_view;

pub use app::App;
