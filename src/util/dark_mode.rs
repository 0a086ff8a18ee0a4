//! Theme application.
//!
//! Applies the `dark-mode` class to `<body>` for the current [`Theme`].
//! Reading and writing the persisted flag lives in `util::persistence`;
//! this module only touches the document. Outside the browser it is a no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::ui::Theme;

/// Class toggled on `<body>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark-mode";

/// Add or remove [`DARK_CLASS`] on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body
                .class_list()
                .toggle_with_force(DARK_CLASS, theme == Theme::Dark);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
