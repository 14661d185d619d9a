use crate::error::GameError;

use super::board::{Cell, DEFAULT_COLS, DEFAULT_ROWS};
use super::{Board, Player};

/// Whether the game is still running, won, or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Result of an accepted drop: where the piece landed, who placed it, and the
/// status the game entered as a consequence. Not retained by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    pub status: GameStatus,
}

/// A single Connect Four game: one board, the player to move, and the
/// win/draw status. Each instance is fully independent; nothing is shared
/// between games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl Game {
    /// Create a new game on a `height` x `width` board, empty, Red to move.
    /// Both dimensions must be at least 4.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        Ok(Game {
            board: Board::new(height, width)?,
            current_player: Player::Red, // Red starts
            status: GameStatus::InProgress,
        })
    }

    /// Create a new game on the classic 6x7 board.
    pub fn default_size() -> Self {
        match Game::new(DEFAULT_ROWS, DEFAULT_COLS) {
            Ok(game) => game,
            Err(_) => unreachable!("default dimensions satisfy the minimum"),
        }
    }

    /// Create a new game from a configuration.
    pub fn from_config(config: &crate::config::GameConfig) -> Result<Self, GameError> {
        Game::new(config.height, config.width)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// Current status and whether further moves are accepted.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Occupant of a single cell; `OutOfBounds` outside the grid.
    pub fn cell(&self, row: usize, column: usize) -> Result<Cell, GameError> {
        self.board.get(row, column)
    }

    /// Drop the current player's piece in `column`. The only mutation the
    /// game exposes.
    ///
    /// Runs to completion synchronously: validate, place, check win, check
    /// draw, then toggle the turn. The draw check only runs when no win was
    /// found, so a board-filling winning piece yields `Won`, never `Drawn`.
    /// The turn does not toggle when the move is rejected or ends the game.
    /// Every rejection leaves the game untouched.
    pub fn drop_piece(&mut self, column: usize) -> Result<Placement, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player.to_cell())?;

        if self.board.check_win(player.to_cell()) {
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            self.status = GameStatus::Drawn;
        } else {
            self.current_player = player.other();
        }

        Ok(Placement {
            row,
            column,
            player,
            status: self.status,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::default_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let game = Game::default_size();
        assert_eq!(game.current_player(), Player::Red);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_terminal());
        for row in 0..game.height() {
            for col in 0..game.width() {
                assert_eq!(game.cell(row, col).unwrap(), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Game::new(3, 3),
            Err(GameError::InvalidDimensions { height: 3, width: 3 })
        );
        assert!(Game::new(4, 4).is_ok());
        assert!(Game::new(8, 9).is_ok());
    }

    #[test]
    fn test_from_config() {
        let config = crate::config::GameConfig { height: 5, width: 8 };
        let game = Game::from_config(&config).unwrap();
        assert_eq!(game.height(), 5);
        assert_eq!(game.width(), 8);

        let bad = crate::config::GameConfig { height: 2, width: 8 };
        assert_eq!(
            Game::from_config(&bad),
            Err(GameError::InvalidDimensions { height: 2, width: 8 })
        );
    }

    #[test]
    fn test_drop_toggles_turn() {
        let mut game = Game::default_size();
        let placement = game.drop_piece(3).unwrap();

        assert_eq!(placement.row, 5);
        assert_eq!(placement.column, 3);
        assert_eq!(placement.player, Player::Red);
        assert_eq!(placement.status, GameStatus::InProgress);
        assert_eq!(game.current_player(), Player::Yellow);
        assert_eq!(game.cell(5, 3).unwrap(), Cell::Red);
    }

    #[test]
    fn test_rejected_drop_is_noop() {
        let mut game = Game::default_size();
        let before = game.clone();

        for _ in 0..3 {
            assert_eq!(
                game.drop_piece(99),
                Err(GameError::InvalidColumn { column: 99, width: 7 })
            );
            assert_eq!(game, before);
        }
        // Turn did not toggle on rejection
        assert_eq!(game.current_player(), Player::Red);
    }

    #[test]
    fn test_column_full_rejection_preserves_state() {
        let mut game = Game::default_size();
        for _ in 0..6 {
            game.drop_piece(0).unwrap();
        }
        let before = game.clone();
        assert_eq!(
            game.drop_piece(0),
            Err(GameError::ColumnFull { column: 0 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_horizontal_win() {
        let mut game = Game::default_size();

        // Red on the bottom row of columns 0..=3, Yellow stacked above
        for col in 0..3 {
            assert_eq!(game.drop_piece(col).unwrap().status, GameStatus::InProgress);
            assert_eq!(game.drop_piece(col).unwrap().status, GameStatus::InProgress);
        }
        let placement = game.drop_piece(3).unwrap();

        assert_eq!(placement.status, GameStatus::Won(Player::Red));
        assert_eq!(game.status(), GameStatus::Won(Player::Red));
        assert!(game.is_terminal());
        // Winner keeps the turn; game-ending moves do not toggle
        assert_eq!(game.current_player(), Player::Red);
    }

    #[test]
    fn test_vertical_win() {
        let mut game = Game::default_size();

        // Red stacks column 0, Yellow stacks column 1
        for _ in 0..3 {
            game.drop_piece(0).unwrap();
            game.drop_piece(1).unwrap();
        }
        let placement = game.drop_piece(0).unwrap();

        assert_eq!(placement.status, GameStatus::Won(Player::Red));
        for row in 2..=5 {
            assert_eq!(game.cell(row, 0).unwrap(), Cell::Red);
        }
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut game = Game::default_size();

        // Red builds a / diagonal from (5,0) to (2,3)
        for &col in &[0, 1, 1, 2, 2, 3, 2, 3, 3, 0] {
            let placement = game.drop_piece(col).unwrap();
            assert_eq!(placement.status, GameStatus::InProgress);
        }
        let placement = game.drop_piece(3).unwrap();

        assert_eq!(placement.player, Player::Red);
        assert_eq!(placement.status, GameStatus::Won(Player::Red));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut game = Game::default_size();

        // Mirror image: Red builds a \ diagonal from (5,6) to (2,3)
        for &col in &[6, 5, 5, 4, 4, 3, 4, 3, 3, 6] {
            let placement = game.drop_piece(col).unwrap();
            assert_eq!(placement.status, GameStatus::InProgress);
        }
        let placement = game.drop_piece(3).unwrap();

        assert_eq!(placement.player, Player::Red);
        assert_eq!(placement.status, GameStatus::Won(Player::Red));
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = Game::default_size();
        for col in 0..3 {
            game.drop_piece(col).unwrap();
            game.drop_piece(col).unwrap();
        }
        game.drop_piece(3).unwrap(); // Red wins

        let before = game.clone();
        for col in 0..7 {
            assert_eq!(game.drop_piece(col), Err(GameError::GameOver));
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut game = Game::new(4, 4).unwrap();

        // Alternating drops that fill the 4x4 board with no four-in-a-row:
        // every column ends R,Y,R,Y or Y,R,Y,R bottom-up, rows pair colors in
        // twos, and both main diagonals are mixed.
        let moves = [0, 2, 1, 3, 2, 0, 3, 1, 0, 2, 1, 3, 2, 0, 3, 1];
        for (i, &col) in moves.iter().enumerate() {
            let placement = game.drop_piece(col).unwrap();
            if i < moves.len() - 1 {
                assert_eq!(placement.status, GameStatus::InProgress);
            } else {
                assert_eq!(placement.status, GameStatus::Drawn);
            }
        }

        assert_eq!(game.status(), GameStatus::Drawn);
        assert!(game.board().is_full());
        assert_eq!(game.drop_piece(0), Err(GameError::GameOver));
    }

    #[test]
    fn test_board_filling_win_is_won_not_drawn() {
        // Fill a 4x4 board so the final piece both completes the board and a
        // horizontal Yellow run across the top row. Column stacks bottom-up:
        //   col0: R Y R Y   col1: Y R R Y   col2: R R Y Y   col3: R Y R Y
        let mut game = Game::new(4, 4).unwrap();
        let moves = [
            0, 1, 2, 0, 3, 3, 2, 2, 1, 2, 0, 0, 1, 1, 3, 3,
        ];
        let mut last = None;
        for &col in &moves {
            last = Some(game.drop_piece(col).unwrap());
        }
        let last = last.unwrap();
        assert!(game.board().is_full());
        assert_eq!(last.status, GameStatus::Won(Player::Yellow));
        assert_eq!(game.status(), GameStatus::Won(Player::Yellow));
    }

    #[test]
    fn test_independent_games_do_not_interfere() {
        let mut a = Game::default_size();
        let mut b = Game::default_size();

        a.drop_piece(0).unwrap();
        assert_eq!(a.current_player(), Player::Yellow);
        assert_eq!(b.current_player(), Player::Red);
        assert_eq!(b.cell(5, 0).unwrap(), Cell::Empty);
    }
}
