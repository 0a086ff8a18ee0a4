//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `board` is the persisted model and the only place tasks are mutated.
//! `ui` holds transient view state (theme, search, modal, drag) that
//! components read from context but that never enters the board blob.

pub mod board;
pub mod ui;
