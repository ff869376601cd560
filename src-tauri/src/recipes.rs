// src-tauri/src/recipes.rs
use crate::error::{RecipeBoxError, Result};
use crate::persistence::{Persisted, Persistence, WriteMode, RECIPES_KEY};
use crate::types::{Recipe, RecipeInput};
use crate::utils::generate_id;
use chrono::Utc;
use tracing::{debug, info};

/// The recipe collection, kept in insertion order and written through to
/// storage after every mutation.
pub struct RecipeRepository {
    recipes: Vec<Recipe>,
    mode: WriteMode,
    persistence: Persistence,
}

impl RecipeRepository {
    pub fn load(persistence: Persistence) -> Persisted<Self> {
        persistence.load(RECIPES_KEY).map(|loaded| RecipeRepository {
            recipes: loaded.items,
            mode: loaded.mode,
            persistence,
        })
    }

    /// False when the stored recipes could not be read at startup.
    pub fn is_writable(&self) -> bool {
        self.mode == WriteMode::WriteThrough
    }

    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn add(&mut self, input: RecipeInput) -> Result<Persisted<Recipe>> {
        let input = input.normalize()?;
        let recipe = Recipe {
            id: generate_id(),
            name: input.name,
            category: input.category,
            time: input.time,
            servings: input.servings,
            ingredients: input.ingredients,
            instructions: input.instructions,
            image_url: input.image_url,
            is_favorite: false,
            date_created: Utc::now(),
        };
        info!(id = %recipe.id, name = %recipe.name, "adding recipe");
        self.recipes.push(recipe.clone());
        Ok(self.persist(recipe))
    }

    /// Replaces the editable fields of `id`. The id, creation date and
    /// favorite flag are carried forward from the existing record; only
    /// `toggle_favorite` changes the flag.
    pub fn update(&mut self, id: &str, input: RecipeInput) -> Result<Persisted<Recipe>> {
        let index = self.index_of(id)?;
        let input = input.normalize()?;

        let existing = &self.recipes[index];
        let updated = Recipe {
            id: existing.id.clone(),
            name: input.name,
            category: input.category,
            time: input.time,
            servings: input.servings,
            ingredients: input.ingredients,
            instructions: input.instructions,
            image_url: input.image_url,
            is_favorite: existing.is_favorite,
            date_created: existing.date_created,
        };
        info!(id, name = %updated.name, "updating recipe");
        self.recipes[index] = updated.clone();
        Ok(self.persist(updated))
    }

    /// Deletes `id`. Shopping items that came from it are left alone.
    pub fn remove(&mut self, id: &str) -> Result<Persisted<Recipe>> {
        let index = self.index_of(id)?;
        let removed = self.recipes.remove(index);
        info!(id, name = %removed.name, "deleted recipe");
        Ok(self.persist(removed))
    }

    /// Flips the favorite flag and returns its new value.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<Persisted<bool>> {
        let index = self.index_of(id)?;
        let recipe = &mut self.recipes[index];
        recipe.is_favorite = !recipe.is_favorite;
        let now_favorite = recipe.is_favorite;
        debug!(id, favorite = now_favorite, "toggled favorite");
        Ok(self.persist(now_favorite))
    }

    /// Appends already-built records (sample data) in one write.
    pub(crate) fn extend(&mut self, recipes: Vec<Recipe>) -> Persisted<usize> {
        let count = recipes.len();
        self.recipes.extend(recipes);
        self.persist(count)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| RecipeBoxError::recipe_not_found(id))
    }

    fn persist<V>(&self, value: V) -> Persisted<V> {
        self.persistence
            .write_through(RECIPES_KEY, self.mode, &self.recipes, value)
    }
}
