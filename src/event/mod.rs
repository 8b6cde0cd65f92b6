//! Event Core - Names, payloads and dispatch.
//!
//! - **Names** - `EventName` and its handler-prop table
//! - **Payload** - `EventBuilder` factories for host-component payloads
//! - **Dispatch** - Enabled-handler lookup, bubbling, act + flush

mod dispatch;
mod names;
mod payload;

pub use dispatch::*;
pub use names::*;
pub use payload::*;
