//! The capability every reactive network component implements.
//!
//! Layers, projections and loggers all react to the same stream of
//! [`Event`] values. [`EventListener`] is the single seam between them and
//! the engine: the engine calls [`EventListener::handle`] once per
//! dispatched event, and each component decides which variants it cares
//! about. Whether an unrecognised variant is ignored or treated as an
//! error is the component's choice.

use tracing::trace;

use crate::event::Event;

/// A component that reacts to network events.
pub trait EventListener {
    /// Apply whatever state change `event` implies for this component.
    fn handle(&mut self, event: &Event);
}

impl<L: EventListener + ?Sized> EventListener for &mut L {
    fn handle(&mut self, event: &Event) {
        (**self).handle(event);
    }
}

impl<L: EventListener + ?Sized> EventListener for Box<L> {
    fn handle(&mut self, event: &Event) {
        (**self).handle(event);
    }
}

/// Deliver `event` to every listener, in iteration order.
///
/// Returns the number of listeners that received the event.
pub fn broadcast<L, I>(listeners: I, event: &Event) -> usize
where
    L: EventListener,
    I: IntoIterator<Item = L>,
{
    let mut delivered: usize = 0;
    for mut listener in listeners {
        listener.handle(event);
        delivered = delivered.saturating_add(1);
    }
    trace!(event = %event.kind(), delivered, "event broadcast");
    delivered
}
