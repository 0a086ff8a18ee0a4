//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! theme class) and the pure render model from component code so both can
//! be tested natively.

pub mod board_view;
pub mod clock;
pub mod dark_mode;
pub mod persistence;
pub mod storage;
