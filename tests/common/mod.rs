//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::path::PathBuf;

use tally_contacts::ContactStore;
use tally_core::{Accumulator, DisplayState, EngineError, Key};
use tally_types::Digit;

/// Keys for a compact sequence such as `"3+12="`; whitespace is ignored.
pub fn keys(sequence: &str) -> Vec<Key> {
    sequence
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Key::from_char(c).expect("valid key"))
        .collect()
}

/// Press every key of `sequence`, stopping at the first error.
pub fn press(acc: &mut Accumulator, sequence: &str) -> Result<DisplayState, EngineError> {
    let mut state = acc.display();
    for key in keys(sequence) {
        state = acc.press(key)?;
    }
    Ok(state)
}

/// Result of `sequence` on a fresh accumulator.
pub fn evaluate(sequence: &str) -> Result<DisplayState, EngineError> {
    press(&mut Accumulator::new(), sequence)
}

pub fn digit(value: u8) -> Digit {
    Digit::new(value).expect("digit in range")
}

/// A store backed by a file in a fresh temporary directory.
pub struct TempStore {
    pub dir: tempfile::TempDir,
    pub path: PathBuf,
    pub store: ContactStore,
}

pub fn temp_store() -> TempStore {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("data").join("contacts.db");
    let store = ContactStore::open(&path).expect("open contact store");
    TempStore { dir, path, store }
}
