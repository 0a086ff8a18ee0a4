//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The app has a single page. It owns startup (storage, state contexts,
//! listener binding) and delegates rendering to `components`.

pub mod board;
