//! Entity kinds and validated entity instances.

mod descriptor;
mod hooks;
mod instance;
pub mod keys;

pub use descriptor::{EntityDescriptor, DEFAULT_IDENTITY_ATTRIBUTE};
pub use hooks::{AugmentHook, Hooks, PostHook, PreHook};
pub use instance::{filter_keys, Entity};
