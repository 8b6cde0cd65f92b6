//! Act - Batching collaborator wrapped around every handler invocation.
//!
//! A handler typically writes signals owned by a controlling component.
//! `act` runs the handler and then settles the reactive graph, so effects
//! derived from those writes have run before the next simulated event.

use spark_signals::flush_sync;

use crate::error::HandlerResult;

/// Runs a handler invocation and settles the state updates it queued.
pub trait Act {
    fn act(&self, f: &mut dyn FnMut() -> HandlerResult) -> HandlerResult;
}

/// Default [`Act`]: runs the closure, then flushes pending signal effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignalAct;

impl Act for SignalAct {
    fn act(&self, f: &mut dyn FnMut() -> HandlerResult) -> HandlerResult {
        let result = f();
        // Settle even when the handler failed; its writes already happened
        flush_sync();
        result
    }
}
