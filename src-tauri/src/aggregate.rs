// src-tauri/src/aggregate.rs
// Groups shopping items by the recipe they came from, for display and print.

use crate::types::ShoppingItem;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{Display, Write};

pub const MISC_GROUP_NAME: &str = "Miscellaneous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingGroup<'a> {
    /// Originating recipe id; `None` for the miscellaneous group.
    pub recipe_id: Option<String>,
    pub name: String,
    pub items: Vec<&'a ShoppingItem>,
}

/// Groups emitted in first-seen order; items keep their relative order.
/// A group's display name comes from the first item that opened it.
/// Items with no recipe id, or an empty one, share the miscellaneous group.
pub fn group_by_recipe(items: &[ShoppingItem]) -> Vec<ShoppingGroup<'_>> {
    let mut groups: Vec<ShoppingGroup<'_>> = Vec::new();
    let mut index_by_key: HashMap<Option<&str>, usize> = HashMap::new();

    for item in items {
        let key = non_empty(item.recipe_id.as_deref());
        let index = *index_by_key.entry(key).or_insert_with(|| {
            groups.push(ShoppingGroup {
                recipe_id: key.map(str::to_string),
                name: non_empty(item.recipe_name.as_deref())
                    .unwrap_or(MISC_GROUP_NAME)
                    .to_string(),
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[index].items.push(item);
    }

    groups
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Plain-text checklist of the shopping list.
pub fn render_printable<Tz>(items: &[ShoppingItem], generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    let _ = writeln!(out, "Shopping List");
    let _ = writeln!(
        out,
        "Generated on {} at {}",
        generated_at.format("%Y-%m-%d"),
        generated_at.format("%H:%M")
    );

    if items.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Your shopping list is empty.");
    }

    for group in group_by_recipe(items) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", group.name);
        for item in group.items {
            let mark = if item.is_checked { 'x' } else { ' ' };
            let _ = writeln!(out, "  [{}] {}", mark, item.text);
        }
    }

    let _ = writeln!(out);
    let _ = write!(out, "Recipe Box - Your Personal Recipe Collection");
    out
}
