//! Render Engine - The rendered tree interactions are simulated against.
//!
//! The engine provides the collaborators the event core consumes:
//! - RenderTree: Element allocation, parent context, queries, unmount
//! - ElementHandle: Opaque element reference (type tag, props, ancestors)
//! - Props: Values, flags and event handlers keyed by handler-prop name
//! - Act: Settles reactive state after each handler invocation
//!
//! # Architecture
//!
//! ```text
//! View (host)            <- handler lookup may bubble here
//!   Field (composite)    <- skipped by the host-parent walk
//!     TextInput (host)   <- interaction target
//! ```

mod act;
mod props;
mod tree;

pub use act::*;
pub use props::*;
pub use tree::*;
