//! Side effects requested by the event handler.
//!
//! Everything in the booking flow is in-memory, so the only effect the plugin
//! host has to carry out is hiding the floating pane. Rendering is signalled
//! separately through the `bool` returned by
//! [`handle_event`](super::handle_event).

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane (the user pressed `q` outside a text field).
    CloseFocus,
}
