//! Board and theme persistence on top of a [`KeyValueStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Loading never fails: unreadable storage or a corrupt blob yields the
//! default board (or light theme) and a warning in the log. Saving reports
//! errors so the caller can log them and keep running in memory.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use crate::state::board::BoardState;
use crate::state::ui::Theme;
use crate::util::storage::{KeyValueStore, StorageError};

/// Errors from writing persisted state.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to encode board state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load the board stored under `key`, or the default board.
pub fn load_board(store: &dyn KeyValueStore, key: &str) -> BoardState {
    match store.get(key) {
        Ok(raw) => BoardState::load_or_default(raw.as_deref()),
        Err(err) => {
            log::warn!("could not read board state: {err}");
            BoardState::default()
        }
    }
}

/// Write the board under `key`.
///
/// # Errors
///
/// Returns [`PersistError`] if encoding or the store write fails.
pub fn save_board(store: &mut dyn KeyValueStore, key: &str, board: &BoardState) -> Result<(), PersistError> {
    let raw = board.to_json()?;
    store.set(key, &raw)?;
    Ok(())
}

/// Load the theme stored under `key`, defaulting to light.
pub fn load_theme(store: &dyn KeyValueStore, key: &str) -> Theme {
    match store.get(key) {
        Ok(raw) => Theme::from_stored(raw.as_deref()),
        Err(err) => {
            log::warn!("could not read theme: {err}");
            Theme::default()
        }
    }
}

/// Write the theme under `key`.
///
/// # Errors
///
/// Returns [`PersistError::Storage`] if the store write fails.
pub fn save_theme(store: &mut dyn KeyValueStore, key: &str, theme: Theme) -> Result<(), PersistError> {
    store.set(key, theme.as_str())?;
    Ok(())
}
