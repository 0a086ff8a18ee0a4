//! One-time delegated listener binding.
//!
//! SYSTEM CONTEXT
//! ==============
//! All interaction listeners live on a single container element that is
//! created once and never re-rendered. Cards, columns, and modals inside it
//! are rebuilt freely; they carry `data-*` attributes instead of listeners,
//! so a render can never add a second copy of a handler.
//!
//! [`Bindings::install`] is the only way listeners are attached, and the host
//! refuses a second install. Renderers never receive a [`ListenerHost`].

#[cfg(test)]
#[path = "delegate_test.rs"]
mod delegate_test;

use std::rc::Rc;

use crate::interaction::controller::Response;
use crate::interaction::event::{DomEvent, EventKind};

/// Shared handler invoked for every delegated event.
pub type Handler = Rc<dyn Fn(&DomEvent) -> Response>;

/// Errors from installing bindings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// The host already carries the interaction listeners.
    #[error("interaction listeners are already bound")]
    AlreadyBound,

    /// The host refused a listener.
    #[error("failed to attach {kind} listener: {reason}")]
    Attach { kind: &'static str, reason: String },
}

/// Something listeners can be attached to: the root element in the browser,
/// a recording fake in tests.
pub trait ListenerHost {
    /// Whether interaction listeners were already installed on this host.
    fn is_bound(&self) -> bool;

    /// Record that interaction listeners are installed.
    fn mark_bound(&mut self);

    /// Attach `handler` for events of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Attach`] if the host cannot take the listener.
    fn listen(&mut self, kind: EventKind, handler: Handler) -> Result<(), BindError>;
}

/// Proof that the listeners were installed.
#[derive(Debug)]
pub struct Bindings {
    kinds: Vec<EventKind>,
}

impl Bindings {
    /// Attach one listener per [`EventKind`] to `host`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::AlreadyBound`] if `host` was bound before, or the
    /// first [`BindError::Attach`] failure. A failed install still leaves the
    /// host bound, so it is never retried onto the same host.
    pub fn install<H: ListenerHost + ?Sized>(host: &mut H, handler: Handler) -> Result<Self, BindError> {
        if host.is_bound() {
            return Err(BindError::AlreadyBound);
        }
        // Marked first: listeners attached before a failure stay attached,
        // and a retry must not add them again.
        host.mark_bound();
        for kind in EventKind::ALL {
            host.listen(kind, Rc::clone(&handler))?;
        }
        Ok(Self {
            kinds: EventKind::ALL.to_vec(),
        })
    }

    /// Event kinds that received a listener.
    #[must_use]
    pub fn kinds(&self) -> &[EventKind] {
        &self.kinds
    }
}
