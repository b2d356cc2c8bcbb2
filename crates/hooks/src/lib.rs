//! Document lifecycle hooks: events, the hook abstraction, and dispatch.
//!
//! The host document framework owns persistence and UI; it calls into a
//! [`HookRegistry`] at each lifecycle point and aborts the commit on `Err`.

pub mod hook;
pub mod lifecycle;
pub mod registry;

pub use hook::{DocumentHook, FnHook};
pub use lifecycle::{DocEvent, UnknownDocEvent};
pub use registry::HookRegistry;
