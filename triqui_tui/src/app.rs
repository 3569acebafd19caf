//! Application state and intent handling.
//!
//! The app owns the single [`GameState`] of the session and translates
//! user intents (place, new game, save, load) into calls on the core,
//! re-reading its accessors afterwards. Rejected intents become messages,
//! never failures.

use std::path::PathBuf;
use triqui_core::{GameState, GameStatus, Position, SaveError, load, save};
use tracing::{debug, info, warn};

/// Main application state.
pub struct App {
    state: GameState,
    cursor: Position,
    save_path: PathBuf,
    message: String,
}

impl App {
    /// Creates the app with a fresh game.
    pub fn new(save_path: PathBuf) -> Self {
        Self {
            state: GameState::new(),
            cursor: Position::Center,
            save_path,
            message: "New game. Player X starts.".to_string(),
        }
    }

    /// Creates the app and immediately loads the saved session, falling
    /// back to a fresh game (with a message) when loading fails.
    pub fn resume(save_path: PathBuf) -> Self {
        let mut app = Self::new(save_path);
        app.load_game();
        app
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the current message line.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Moves the cursor to the given position.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Attempts a move at (row, col) and updates the message line.
    pub fn place_at(&mut self, row: usize, col: usize) {
        match self.state.try_move(row, col) {
            Ok(pos) => {
                debug!(position = %pos, "move accepted");
                self.message = match self.state.status() {
                    GameStatus::InProgress => {
                        format!("Player {}'s turn.", self.state.turn())
                    }
                    GameStatus::Won(player) => {
                        format!("Player {} wins! Press 'n' for a new game.", player)
                    }
                    GameStatus::Draw => {
                        "Draw! The board is full. Press 'n' for a new game.".to_string()
                    }
                };
            }
            Err(rejection) => {
                debug!(%rejection, "move rejected");
                self.message = format!("Move not allowed: {}.", rejection);
            }
        }
    }

    /// Attempts a move at the cursor.
    pub fn place_at_cursor(&mut self) {
        self.place_at(self.cursor.row(), self.cursor.col());
    }

    /// Starts a new game.
    pub fn new_game(&mut self) {
        info!("starting new game");
        self.state.reset();
        self.message = "New game. Player X starts.".to_string();
    }

    /// Saves the session to the configured path.
    pub fn save_game(&mut self) {
        match save(&self.state, &self.save_path) {
            Ok(()) => {
                self.message = format!("Game saved to {}.", self.save_path.display());
            }
            Err(err) => {
                warn!(error = %err, "save failed");
                self.message = format!("Could not save to {}: {}.", self.save_path.display(), err);
            }
        }
    }

    /// Loads the session from the configured path.
    ///
    /// On failure the running game is left untouched; the message
    /// distinguishes a missing file from a damaged one.
    pub fn load_game(&mut self) {
        match load(&self.save_path) {
            Ok(state) => {
                self.state = state;
                self.message = match self.state.status() {
                    GameStatus::InProgress => format!(
                        "Game loaded from {}. Player {}'s turn.",
                        self.save_path.display(),
                        self.state.turn()
                    ),
                    status => format!(
                        "Game loaded from {} (already finished: {}).",
                        self.save_path.display(),
                        status
                    ),
                };
            }
            Err(SaveError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                self.message = format!("Could not find the file {}.", self.save_path.display());
            }
            Err(SaveError::Io(err)) => {
                warn!(error = %err, "load failed");
                self.message = format!("Could not read {}: {}.", self.save_path.display(), err);
            }
            Err(SaveError::Corrupt(err)) => {
                warn!(error = %err, "corrupt save file");
                self.message = format!(
                    "{} is not a valid save file ({}).",
                    self.save_path.display(),
                    err
                );
            }
        }
    }
}
