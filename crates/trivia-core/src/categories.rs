//! Category lookup map.

use std::collections::BTreeMap;

use crate::model::{Category, CategoryId};

/// Map category ids to their labels.
///
/// Serializes as a JSON object keyed by the stringified id, e.g.
/// `{"1": "Science", "2": "Art"}`. Later duplicates win.
pub fn aggregate_categories(categories: &[Category]) -> BTreeMap<CategoryId, String> {
    categories
        .iter()
        .map(|c| (c.id, c.label.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: CategoryId, label: &str) -> Category {
        Category {
            id,
            label: label.into(),
        }
    }

    #[test]
    fn maps_ids_to_labels() {
        let map = aggregate_categories(&[category(2, "Art"), category(1, "Science")]);
        assert_eq!(map.get(&1).map(String::as_str), Some("Science"));
        assert_eq!(map.get(&2).map(String::as_str), Some("Art"));
    }

    #[test]
    fn serializes_with_string_keys() {
        let map = aggregate_categories(&[category(1, "Science"), category(6, "Sports")]);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"1": "Science", "6": "Sports"})
        );
    }

    #[test]
    fn empty_input_gives_empty_map() {
        assert!(aggregate_categories(&[]).is_empty());
    }
}
