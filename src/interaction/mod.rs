//! Interaction layer: DOM events in, state transitions out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered markup carries `data-*` attributes only. A single set of
//! delegated listeners on the app root describes each event
//! (`event`), resolves it to an intent (`intent`), and applies it through
//! the controller (`controller`), which persists every board change.
//! `delegate` guarantees the listeners are attached exactly once; `dom` is
//! the browser half of that.

pub mod controller;
pub mod delegate;
#[cfg(feature = "csr")]
pub mod dom;
pub mod event;
pub mod intent;
