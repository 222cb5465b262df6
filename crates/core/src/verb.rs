use std::fmt;

use serde::{Deserialize, Serialize};

/// Operation label passed to entity hooks.
///
/// The labels follow HTTP verb semantics but no transport is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verb {
    Create,
    Replace,
    PartialUpdate,
    Delete,
    Read,
}

impl Verb {
    /// Returns the label used in logs and hook dispatch.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Create => "CREATE",
            Verb::Replace => "REPLACE",
            Verb::PartialUpdate => "PARTIAL_UPDATE",
            Verb::Delete => "DELETE",
            Verb::Read => "READ",
        }
    }

    /// Returns the HTTP method this verb is modeled on.
    pub fn http_method(&self) -> &'static str {
        match self {
            Verb::Create => "POST",
            Verb::Replace => "PUT",
            Verb::PartialUpdate => "PATCH",
            Verb::Delete => "DELETE",
            Verb::Read => "GET",
        }
    }

    /// Whether the verb fails with `NotFound` unless the item already exists.
    pub fn requires_existing_item(&self) -> bool {
        matches!(self, Verb::Replace | Verb::PartialUpdate | Verb::Delete)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
