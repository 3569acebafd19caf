//! Tests for the saved-session codec against the public API.

use triqui_core::{
    CorruptPayload, GameState, GameStatus, Player, SaveError, decode, encode, load, save,
};

fn played(moves: &[(usize, usize)]) -> GameState {
    let mut state = GameState::new();
    for (row, col) in moves {
        assert!(state.attempt_move(*row, *col));
    }
    state
}

#[test]
fn test_every_accessor_survives_round_trip() {
    let state = played(&[(0, 0), (1, 1), (0, 1), (2, 2)]);
    let restored = decode(&encode(&state).unwrap()).unwrap();

    assert_eq!(restored.turn(), state.turn());
    assert_eq!(restored.status(), state.status());
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(restored.cell(row, col), state.cell(row, col));
        }
    }
}

#[test]
fn test_round_trip_of_terminal_states() {
    let won = played(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(won.status(), GameStatus::Won(Player::X));
    assert_eq!(decode(&encode(&won).unwrap()).unwrap(), won);

    let drawn = played(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    assert_eq!(drawn.status(), GameStatus::Draw);
    assert_eq!(decode(&encode(&drawn).unwrap()).unwrap(), drawn);
}

#[test]
fn test_restored_game_keeps_playing() {
    let state = played(&[(0, 0), (1, 1)]);
    let mut restored = decode(&encode(&state).unwrap()).unwrap();

    // X moved, O moved; X is up again and play continues normally.
    assert_eq!(restored.turn(), Player::X);
    assert!(restored.attempt_move(0, 1));
    assert!(!restored.attempt_move(1, 1));
}

#[test]
fn test_corrupt_load_leaves_current_session_alone() {
    // Unrecognized version tag: decoding fails and the session we already
    // hold stays exactly as it was.
    let session = played(&[(2, 2)]);
    let payload = encode(&GameState::new())
        .unwrap()
        .replace("\"version\": 1", "\"version\": 7");

    let result = decode(&payload);
    assert!(matches!(
        result,
        Err(SaveError::Corrupt(CorruptPayload::UnknownVersion { found: 7 }))
    ));
    assert_eq!(session, played(&[(2, 2)]));
}

#[test]
fn test_garbage_and_truncated_payloads_are_corrupt() {
    for payload in ["", "{", "[1, 2, 3]", "{\"version\": 1}"] {
        match decode(payload) {
            Err(SaveError::Corrupt(CorruptPayload::Malformed { .. })) => {}
            other => panic!("payload {:?}: expected malformed, got {:?}", payload, other),
        }
    }
}

#[test]
fn test_file_round_trip_and_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partida.triqui");

    let first = played(&[(0, 0)]);
    save(&first, &path).unwrap();
    assert_eq!(load(&path).unwrap(), first);

    // Saving again replaces the previous session.
    let second = played(&[(1, 1), (2, 2), (0, 1)]);
    save(&second, &path).unwrap();
    assert_eq!(load(&path).unwrap(), second);
}

#[test]
fn test_missing_file_is_distinguished_from_corruption() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.triqui");

    match load(&missing) {
        Err(SaveError::Io(err)) => {
            assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected I/O error, got {:?}", other),
    }

    // A present-but-damaged file is corruption, not I/O.
    let damaged = dir.path().join("damaged.triqui");
    std::fs::write(&damaged, "definitely not a save").unwrap();
    assert!(matches!(
        load(&damaged),
        Err(SaveError::Corrupt(CorruptPayload::Malformed { .. }))
    ));
}
