//! Triqui core - game-state engine and saved-session codec
//!
//! Pure two-player 3x3 grid game logic: the authoritative board
//! representation, move validation, win/draw detection, and the versioned
//! payload format used to save and restore a session. There is no
//! dependency on any rendering technology; a presentation layer drives
//! the engine through [`GameState`] and re-reads its accessors after each
//! call.
//!
//! # Example
//!
//! ```
//! use triqui_core::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! assert!(game.attempt_move(0, 0)); // X takes the top-left corner
//! assert!(game.attempt_move(1, 1)); // O answers in the center
//! assert!(!game.attempt_move(1, 1)); // occupied: rejected, no side effect
//! assert_eq!(game.turn(), Player::X);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod invariants;
mod position;
mod rules;
mod save;
mod state;
mod types;

// Crate-level exports - domain types
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - cell addressing
pub use position::Position;

// Crate-level exports - game engine
pub use state::{GameState, MoveRejection};

// Crate-level exports - outcome rules
pub use rules::{has_winning_line, is_draw};

// Crate-level exports - invariants
pub use invariants::{
    ExclusiveWinnerInvariant, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    StatusConsistentInvariant, TriquiInvariants,
};

// Crate-level exports - saved-session codec
pub use save::{CorruptPayload, SaveError, decode, encode, load, save, SAVE_VERSION};
