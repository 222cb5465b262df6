use serde::Serialize;

use crate::storage::Attributes;

/// Result of a read.
///
/// A point lookup that finds nothing is [`ReadOutcome::Absent`]; a scan that
/// finds nothing is an empty [`ReadOutcome::Items`]. The two are never
/// conflated. Serializes as the item, the list, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReadOutcome {
    /// The item addressed by an identity.
    Item(Attributes),
    /// Every item of the entity kind, in store order.
    Items(Vec<Attributes>),
    /// An identity was given and no item carries it.
    Absent,
}

impl ReadOutcome {
    pub fn is_absent(&self) -> bool {
        matches!(self, ReadOutcome::Absent)
    }

    pub fn into_item(self) -> Option<Attributes> {
        match self {
            ReadOutcome::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn into_items(self) -> Option<Vec<Attributes>> {
        match self {
            ReadOutcome::Items(items) => Some(items),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_is_not_an_empty_list() {
        assert_ne!(ReadOutcome::Absent, ReadOutcome::Items(Vec::new()));
        assert!(ReadOutcome::Absent.is_absent());
        assert!(!ReadOutcome::Items(Vec::new()).is_absent());
    }

    #[test]
    fn test_serialization() {
        let item = json!({"name": "Jeanne"}).as_object().cloned().unwrap();

        assert_eq!(
            serde_json::to_value(ReadOutcome::Item(item.clone())).unwrap(),
            json!({"name": "Jeanne"})
        );
        assert_eq!(
            serde_json::to_value(ReadOutcome::Items(vec![item])).unwrap(),
            json!([{"name": "Jeanne"}])
        );
        assert_eq!(serde_json::to_value(ReadOutcome::Absent).unwrap(), json!(null));
    }

    #[test]
    fn test_accessors() {
        let item = json!({"uid": "1"}).as_object().cloned().unwrap();

        assert_eq!(ReadOutcome::Item(item.clone()).into_item(), Some(item.clone()));
        assert_eq!(ReadOutcome::Item(item.clone()).into_items(), None);
        assert_eq!(
            ReadOutcome::Items(vec![item.clone()]).into_items(),
            Some(vec![item])
        );
        assert_eq!(ReadOutcome::Absent.into_item(), None);
    }
}
