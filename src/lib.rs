//! # spark-user-event
//!
//! Simulated user interactions for reactive component trees in tests.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals): a
//! controlling component owns its displayed value in a signal, and every
//! simulated event settles the reactive graph before the next one is sent.
//!
//! ## Architecture
//!
//! An interaction is one cooperative async routine. Each step waits on the
//! session's scheduler, builds a payload, and dispatches it:
//!
//! ```text
//! type_text → parse_keys → [wait → EventBuilder → Dispatcher → handler → act]*
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - Render tree, element handles, props, act
//! - [`event`] - Event names, payload builder, dispatcher
//! - [`user_event`] - Sessions, key parser, press and type drivers
//! - [`scheduler`] - Tokio-backed waits (real or paused time)
//! - [`config`] - Process-wide defaults
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```ignore
//! use spark_user_event::{user_event, EventName, Props, RenderTree, TypeOptions};
//!
//! let tree = RenderTree::new();
//! tree.host("TextInput", Props::new().test_id("input").on(EventName::ChangeText, |e| {
//!     println!("text: {:?}", e.text());
//! }), |_| {});
//!
//! let user = user_event::setup();
//! user.type_text(&tree.get_by_test_id("input")?, "hi", TypeOptions::default()).await?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod scheduler;
pub mod user_event;

// Re-export commonly used items
pub use config::{configure, get_config, reset_config, Config, HostComponentNames};

pub use engine::{
    Act, ElementHandle, EventHandler, NodeKind, PointerEvents, PropValue, Props, RenderTree,
    ResponderCallback, SignalAct,
};

pub use error::{
    BoxError, HandlerResult, KeyParseError, QueryError, UnknownEventName, UserEventError,
};

pub use event::{
    ContentSize, Dispatcher, EventBuilder, EventFlags, EventName, EventPayload, Propagation,
    TextRange,
};

pub use scheduler::{LocalBoxFuture, Scheduler, TokioScheduler};

pub use user_event::{
    parse_keys, setup, setup_with, KeyToken, LongPressOptions, SetupOptions, SpecialKey,
    TypeOptions, UserEvent,
};
