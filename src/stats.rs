use std::collections::HashMap;

use serde_json::Value;

use crate::catalog::StatSelector;
use crate::model::{MISSING_STAT, StatEntry};
use crate::value::{array_at, str_at};

/// Stats of one document indexed by `(category, name)`, where name is the
/// canonical stat name, its short display name, or its display name.
///
/// When a canonical name and an alias of a different stat collide, the
/// canonical name wins. Among aliases the later registration wins.
pub struct CategoryIndex<'a> {
    entries: HashMap<(String, String), &'a Value>,
}

impl<'a> CategoryIndex<'a> {
    pub fn build(stats: &'a Value) -> Self {
        let mut entries = HashMap::new();
        let categories = array_at(stats, "categories");

        for category in categories {
            let Some(cat_name) = str_at(category, "name") else {
                continue;
            };
            for stat in array_at(category, "stats") {
                for alias in ["shortDisplayName", "displayName"] {
                    if let Some(name) = str_at(stat, alias) {
                        entries.insert((cat_name.clone(), name), stat);
                    }
                }
            }
        }
        for category in categories {
            let Some(cat_name) = str_at(category, "name") else {
                continue;
            };
            for stat in array_at(category, "stats") {
                if let Some(name) = str_at(stat, "name") {
                    entries.insert((cat_name.clone(), name), stat);
                }
            }
        }

        Self { entries }
    }

    pub fn get(&self, category: &str, field: &str) -> Option<&'a Value> {
        self.entries
            .get(&(category.to_string(), field.to_string()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One entry per selector, in selector order. Missing stats read [`MISSING_STAT`].
pub fn project_stats(stats: &Value, selectors: &[StatSelector]) -> Vec<StatEntry> {
    let index = CategoryIndex::build(stats);
    selectors
        .iter()
        .map(|selector| {
            let value = index
                .get(selector.category, selector.field)
                .and_then(|stat| str_at(stat, "displayValue"))
                .unwrap_or_else(|| MISSING_STAT.to_string());
            StatEntry {
                label: selector.label.to_string(),
                category: selector.category.to_string(),
                field: selector.field.to_string(),
                value,
                description: selector.description.to_string(),
            }
        })
        .collect()
}
