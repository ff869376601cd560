// src-tauri/src/shopping_list.rs
use crate::error::{RecipeBoxError, Result};
use crate::persistence::{Persisted, Persistence, WriteMode, SHOPPING_LIST_KEY};
use crate::types::ShoppingItem;
use crate::utils::generate_id;
use std::collections::HashSet;
use tracing::{debug, info};

pub struct ShoppingListRepository {
    items: Vec<ShoppingItem>,
    mode: WriteMode,
    persistence: Persistence,
}

impl ShoppingListRepository {
    pub fn load(persistence: Persistence) -> Persisted<Self> {
        persistence
            .load(SHOPPING_LIST_KEY)
            .map(|loaded| ShoppingListRepository {
                items: loaded.items,
                mode: loaded.mode,
                persistence,
            })
    }

    pub fn is_writable(&self) -> bool {
        self.mode == WriteMode::WriteThrough
    }

    pub fn list(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends every ingredient whose text is not already on the list
    /// (ignoring case), including duplicates within `ingredients` itself.
    /// Blank lines are skipped. Returns how many items were appended; the
    /// list is written once for the whole batch.
    pub fn merge_ingredients<S: AsRef<str>>(
        &mut self,
        recipe_id: Option<&str>,
        recipe_name: Option<&str>,
        ingredients: &[S],
    ) -> Persisted<usize> {
        let mut seen: HashSet<String> = self.items.iter().map(|i| fold(&i.text)).collect();
        let mut added = 0;

        for ingredient in ingredients {
            let text: &str = ingredient.as_ref();
            if text.trim().is_empty() {
                continue;
            }
            if !seen.insert(fold(text)) {
                continue;
            }
            self.items.push(ShoppingItem {
                id: generate_id(),
                text: text.to_string(),
                is_checked: false,
                recipe_id: recipe_id.map(str::to_string),
                recipe_name: recipe_name.map(str::to_string),
            });
            added += 1;
        }

        info!(
            recipe_id = recipe_id.unwrap_or("-"),
            offered = ingredients.len(),
            added,
            "merged ingredients into shopping list"
        );
        self.persist(added)
    }

    pub fn set_checked(&mut self, item_id: &str, checked: bool) -> Result<Persisted<()>> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| RecipeBoxError::item_not_found(item_id))?;
        item.is_checked = checked;
        debug!(item_id, checked, "set shopping item checked state");
        Ok(self.persist(()))
    }

    pub fn remove(&mut self, item_id: &str) -> Result<Persisted<ShoppingItem>> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| RecipeBoxError::item_not_found(item_id))?;
        let removed = self.items.remove(index);
        debug!(item_id, text = %removed.text, "removed shopping item");
        Ok(self.persist(removed))
    }

    /// Empties the list and returns how many items were dropped.
    pub fn clear(&mut self) -> Persisted<usize> {
        let count = self.items.len();
        self.items.clear();
        info!(count, "cleared shopping list");
        self.persist(count)
    }

    fn persist<V>(&self, value: V) -> Persisted<V> {
        self.persistence
            .write_through(SHOPPING_LIST_KEY, self.mode, &self.items, value)
    }
}

fn fold(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn repo() -> (Arc<MemoryStore>, ShoppingListRepository) {
        let store = Arc::new(MemoryStore::new());
        let repo = ShoppingListRepository::load(Persistence::new(store.clone())).into_value();
        (store, repo)
    }

    #[test]
    fn merge_skips_case_insensitive_duplicates() {
        let (_store, mut repo) = repo();
        let added = repo
            .merge_ingredients(Some("r1"), Some("Tea"), &["1 tea bag", "1 cup water"])
            .into_value();
        assert_eq!(added, 2);

        let added = repo
            .merge_ingredients(Some("r2"), Some("Cocoa"), &["1 CUP WATER", "2 tbsp cocoa"])
            .into_value();
        assert_eq!(added, 1);

        let texts: Vec<&str> = repo.list().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["1 tea bag", "1 cup water", "2 tbsp cocoa"]);
        // The first copy keeps its attribution
        assert_eq!(repo.list()[1].recipe_name.as_deref(), Some("Tea"));
        assert_eq!(repo.list()[2].recipe_id.as_deref(), Some("r2"));
    }

    #[test]
    fn merging_the_same_list_twice_adds_nothing_the_second_time() {
        let (_store, mut repo) = repo();
        let ingredients = vec!["Salt".to_string(), "Pepper".to_string()];
        assert_eq!(repo.merge_ingredients(Some("r1"), Some("Soup"), &ingredients).value, 2);
        assert_eq!(repo.merge_ingredients(Some("r1"), Some("Soup"), &ingredients).value, 0);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn duplicates_within_one_batch_are_collapsed() {
        let (_store, mut repo) = repo();
        let added = repo
            .merge_ingredients(None, None, &["Eggs", "eggs", "  ", "Milk"])
            .into_value();
        assert_eq!(added, 2);
        assert!(repo.list().iter().all(|i| i.recipe_id.is_none() && !i.is_checked));
    }

    #[test]
    fn merged_text_is_kept_verbatim() {
        let (_store, mut repo) = repo();
        repo.merge_ingredients(Some("r1"), Some("Soup"), &["  2 Cups Broth"])
            .into_value();
        assert_eq!(repo.list()[0].text, "  2 Cups Broth");
    }

    #[test]
    fn set_checked_remove_and_clear() {
        let (store, mut repo) = repo();
        repo.merge_ingredients(Some("r1"), Some("Tea"), &["a", "b", "c"])
            .into_value();
        let first = repo.list()[0].id.clone();
        let second = repo.list()[1].id.clone();

        repo.set_checked(&first, true).unwrap().into_value();
        assert!(repo.get(&first).unwrap().is_checked);
        repo.set_checked(&first, false).unwrap().into_value();
        assert!(!repo.get(&first).unwrap().is_checked);

        let removed = repo.remove(&second).unwrap().into_value();
        assert_eq!(removed.text, "b");
        assert_eq!(repo.len(), 2);

        assert_eq!(repo.clear().into_value(), 2);
        assert!(repo.is_empty());
        assert_eq!(store.get(SHOPPING_LIST_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn unknown_item_ids_report_not_found() {
        let (_store, mut repo) = repo();
        repo.merge_ingredients(None, None, &["a"]).into_value();
        assert!(repo.set_checked("nope", true).unwrap_err().is_not_found());
        assert!(repo.remove("nope").unwrap_err().is_not_found());
        assert_eq!(repo.len(), 1);
    }
}
