//! Pretty output formatting.

use dynamore_core::{Attributes, ReadOutcome, Verb};
use serde_json::Value;

/// Format one item as indented `name: value` lines, sorted by name.
pub fn format_item(item: &Attributes) -> String {
    let mut names: Vec<_> = item.keys().collect();
    names.sort();
    names
        .into_iter()
        .map(|name| format!("  {}: {}", name, format_value(&item[name])))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format every item of a scan.
pub fn format_items(items: &[Attributes]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

/// Format the outcome of `verb` for display.
pub fn format_outcome(verb: Verb, outcome: &ReadOutcome) -> String {
    match outcome {
        ReadOutcome::Item(item) => match verb {
            Verb::Create => format!("Created:\n{}", format_item(item)),
            Verb::Replace => format!("Replaced:\n{}", format_item(item)),
            Verb::PartialUpdate => format!("Updated:\n{}", format_item(item)),
            Verb::Delete => format!("Deleted:\n{}", format_item(item)),
            Verb::Read => format_item(item),
        },
        ReadOutcome::Items(items) => format_items(items),
        ReadOutcome::Absent => "Not found.".to_string(),
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jeanne() -> Attributes {
        json!({"name": "Jeanne", "age": 123, "address": {"city": "Paris"}})
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_format_item_sorts_attributes() {
        assert_eq!(
            format_item(&jeanne()),
            "  address: {\"city\":\"Paris\"}\n  age: 123\n  name: Jeanne"
        );
    }

    #[test]
    fn test_format_outcome_labels_verb() {
        let output = format_outcome(Verb::Create, &ReadOutcome::Item(jeanne()));
        assert!(output.starts_with("Created:\n"));

        let output = format_outcome(Verb::Read, &ReadOutcome::Item(jeanne()));
        assert!(output.starts_with("  address"));
    }

    #[test]
    fn test_format_empty_and_absent() {
        assert_eq!(
            format_outcome(Verb::Read, &ReadOutcome::Items(Vec::new())),
            "No items found."
        );
        assert_eq!(format_outcome(Verb::Read, &ReadOutcome::Absent), "Not found.");
    }

    #[test]
    fn test_format_items_header() {
        let output = format_items(&[jeanne(), jeanne()]);
        assert!(output.starts_with("ITEMS (2)\n"));
    }
}
