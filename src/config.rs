//! Application configuration.
//!
//! The browser build has no environment to read from, so configuration is a
//! plain value built once by the board page and handed to the Interaction
//! Layer. Tests construct their own with different keys.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage key of the persisted Board State blob.
pub const BOARD_STATE_KEY: &str = "kanbanState";

/// Storage key of the persisted theme flag.
pub const THEME_KEY: &str = "kanbanTheme";

/// Storage keys used by the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub board_key: String,
    pub theme_key: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_key: BOARD_STATE_KEY.to_owned(),
            theme_key: THEME_KEY.to_owned(),
        }
    }
}
