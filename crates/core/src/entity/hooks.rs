use std::fmt;
use std::sync::Arc;

use crate::storage::Attributes;
use crate::verb::Verb;

/// Precondition check run before a write. Returning false vetoes the operation.
pub type PreHook = Arc<dyn Fn(Verb, &Attributes, Option<&Attributes>) -> bool + Send + Sync>;

/// Postcondition task run after a committed write. The result is only logged.
pub type PostHook = Arc<dyn Fn(Verb, &Attributes, Option<&Attributes>) -> bool + Send + Sync>;

/// Injects derived attributes into an item right before it is persisted.
pub type AugmentHook = Arc<dyn Fn(Attributes) -> Attributes + Send + Sync>;

/// Per-entity-kind hook functions. Every hook defaults to a no-op.
#[derive(Clone)]
pub struct Hooks {
    pub(crate) pre: PreHook,
    pub(crate) post: PostHook,
    pub(crate) augment: AugmentHook,
}

impl Hooks {
    pub fn pre(&self, verb: Verb, data: &Attributes, existing: Option<&Attributes>) -> bool {
        (self.pre)(verb, data, existing)
    }

    pub fn post(&self, verb: Verb, data: &Attributes, existing: Option<&Attributes>) -> bool {
        (self.post)(verb, data, existing)
    }

    pub fn augment(&self, item: Attributes) -> Attributes {
        (self.augment)(item)
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self {
            pre: Arc::new(|_: Verb, _: &Attributes, _: Option<&Attributes>| true),
            post: Arc::new(|_: Verb, _: &Attributes, _: Option<&Attributes>| true),
            augment: Arc::new(|item: Attributes| item),
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}
