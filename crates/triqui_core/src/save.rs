//! Saved-session payload codec.
//!
//! A session is persisted as a self-describing, versioned JSON document:
//! a version marker, the 9 squares in row-major order, the player to move,
//! and the status. Decoding validates the document against the game
//! invariants, so a hand-edited or foreign save cannot smuggle an
//! impossible state into a running session.

use crate::invariants::{InvariantSet, TriquiInvariants};
use crate::state::GameState;
use crate::types::{Board, GameStatus, Player, Square};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use tracing::{info, instrument};

/// Version tag written into every payload.
pub const SAVE_VERSION: u32 = 1;

/// On-disk payload for a saved session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedGame {
    /// Format version tag.
    version: u32,
    /// Squares in row-major order.
    board: [Square; 9],
    /// Player to move.
    turn: Player,
    /// Game status.
    status: GameStatus,
}

impl SavedGame {
    fn from_state(state: &GameState) -> Self {
        Self {
            version: SAVE_VERSION,
            board: *state.board().squares(),
            turn: state.turn(),
            status: state.status(),
        }
    }
}

/// Structural or semantic defect in a payload.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CorruptPayload {
    /// The payload is not a well-formed document.
    #[display("payload is not a valid save document: {reason}")]
    Malformed {
        /// Parser diagnostic.
        reason: String,
    },

    /// The version tag is not one this codec understands.
    #[display("unrecognized save version {found} (expected {SAVE_VERSION})")]
    UnknownVersion {
        /// Version tag found in the payload.
        found: u32,
    },

    /// The decoded state violates a game invariant.
    #[display("saved state violates game invariants: {reason}")]
    InvalidState {
        /// Violated invariant descriptions.
        reason: String,
    },
}

/// Failure while saving or restoring a session.
///
/// Storage failures stay distinct from payload corruption so callers can
/// message "could not find the file" and "the file is not a valid save"
/// differently.
#[derive(Debug, Display, Error, From)]
pub enum SaveError {
    /// The underlying storage could not be read or written.
    #[display("save file I/O error: {_0}")]
    Io(#[error(source)] io::Error),

    /// The payload was read but is not a valid saved session.
    #[display("{_0}")]
    Corrupt(#[error(source)] CorruptPayload),
}

/// Encodes a game state into its textual payload.
#[instrument(skip(state))]
pub fn encode(state: &GameState) -> Result<String, SaveError> {
    let payload = SavedGame::from_state(state);
    serde_json::to_string_pretty(&payload).map_err(|err| SaveError::Io(io::Error::from(err)))
}

/// Decodes a payload back into a game state.
///
/// Fails with [`CorruptPayload`] when the document is malformed, carries
/// an unrecognized version tag, or decodes to a board/turn/status
/// combination no reachable game can produce. The caller's in-memory
/// state is never touched.
#[instrument(skip(payload))]
pub fn decode(payload: &str) -> Result<GameState, SaveError> {
    let saved: SavedGame =
        serde_json::from_str(payload).map_err(|err| CorruptPayload::Malformed {
            reason: err.to_string(),
        })?;

    if saved.version != SAVE_VERSION {
        return Err(CorruptPayload::UnknownVersion {
            found: saved.version,
        }
        .into());
    }

    let state = GameState::from_parts(Board::from_squares(saved.board), saved.turn, saved.status);

    TriquiInvariants::check_all(&state).map_err(|violations| {
        let reason = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        CorruptPayload::InvalidState { reason }
    })?;

    Ok(state)
}

/// Saves a session to the given path, replacing any existing file.
#[instrument(skip(state), fields(path = %path.display()))]
pub fn save(state: &GameState, path: &Path) -> Result<(), SaveError> {
    let payload = encode(state)?;
    std::fs::write(path, payload)?;
    info!("session saved");
    Ok(())
}

/// Restores a session from the given path.
#[instrument(fields(path = %path.display()))]
pub fn load(path: &Path) -> Result<GameState, SaveError> {
    let payload = std::fs::read_to_string(path)?;
    let state = decode(&payload)?;
    info!(status = %state.status(), "session restored");
    Ok(state)
}
