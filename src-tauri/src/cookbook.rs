// src-tauri/src/cookbook.rs
use crate::config::AppConfig;
use crate::debounce::SearchDebouncer;
use crate::error::{RecipeBoxError, Result};
use crate::persistence::{Persisted, Persistence};
use crate::query::RecipeQuery;
use crate::recipes::RecipeRepository;
use crate::samples::sample_recipes;
use crate::shopping_list::ShoppingListRepository;
use crate::store::{KeyValueStore, MemoryStore, SqliteStore};
use crate::types::Recipe;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Feedback for adding a recipe's ingredients to the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSummary {
    pub added: usize,
    pub recipe_name: String,
}

impl fmt::Display for MergeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.added {
            0 => write!(f, "All ingredients are already in your shopping list."),
            1 => write!(f, "1 ingredient from \"{}\" added to shopping list!", self.recipe_name),
            n => write!(
                f,
                "{} ingredients from \"{}\" added to shopping list!",
                n, self.recipe_name
            ),
        }
    }
}

/// Both collections, loaded together from one store.
pub struct Cookbook {
    recipes: RecipeRepository,
    shopping: ShoppingListRepository,
    search: SearchDebouncer,
}

impl Cookbook {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Persisted<Self> {
        let persistence = Persistence::new(store);
        let recipes = RecipeRepository::load(persistence.clone());
        let shopping = ShoppingListRepository::load(persistence);

        let (recipes, shopping) = recipes.absorb(shopping);
        info!(
            recipes = recipes.value.len(),
            shopping_items = shopping.len(),
            durable = recipes.is_durable(),
            "cookbook loaded"
        );
        recipes.map(|recipes| Cookbook {
            recipes,
            shopping,
            search: SearchDebouncer::default(),
        })
    }

    /// Startup path: opens the configured database (falling back to a
    /// session-only store), loads both collections and seeds samples.
    /// Storage problems are logged, never fatal.
    pub fn bootstrap(config: &AppConfig) -> Cookbook {
        let store: Arc<dyn KeyValueStore> = match SqliteStore::open(&config.db_path) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                error!(
                    path = %config.db_path.display(),
                    error = %e,
                    "database unavailable, changes will not survive a restart"
                );
                Arc::new(MemoryStore::new())
            }
        };

        let opened = Cookbook::open(store);
        if let Some(e) = &opened.warning {
            warn!(error = %e, "cookbook opened without durable storage");
        }
        let mut cookbook = opened.into_value();

        if config.seed_samples {
            if let Err(e) = cookbook.seed_samples_if_empty().into_result() {
                warn!(error = %e, "sample recipes were not saved");
            }
        }
        cookbook
    }

    pub fn recipes(&self) -> &RecipeRepository {
        &self.recipes
    }

    pub fn recipes_mut(&mut self) -> &mut RecipeRepository {
        &mut self.recipes
    }

    pub fn shopping_list(&self) -> &ShoppingListRepository {
        &self.shopping
    }

    pub fn shopping_list_mut(&mut self) -> &mut ShoppingListRepository {
        &mut self.shopping
    }

    pub fn filter(&self, query: &RecipeQuery) -> Vec<&Recipe> {
        query.apply(self.recipes.list())
    }

    /// Installs the sample recipes when the catalog is empty. Returns how
    /// many were added. A catalog that could not be read is not seeded.
    pub fn seed_samples_if_empty(&mut self) -> Persisted<usize> {
        if !self.recipes.is_writable() {
            warn!("stored recipes unreadable, skipping sample recipes");
            return Persisted::durable(0);
        }
        if !self.recipes.is_empty() {
            return Persisted::durable(0);
        }
        let seeded = self.recipes.extend(sample_recipes());
        info!(count = seeded.value, "installed sample recipes");
        seeded
    }

    /// Records a keystroke in the search box. The search runs once typing
    /// pauses; see `poll_search`.
    pub fn search_input(&mut self, term: impl Into<String>, now: Instant) {
        self.search.input(term, now);
    }

    /// Once the search term has settled, runs `query` with that term in
    /// place of its own. `None` while input is still arriving or when
    /// nothing was typed.
    pub fn poll_search(&mut self, query: &RecipeQuery, now: Instant) -> Option<Vec<&Recipe>> {
        let term = self.search.poll(now)?;
        debug!(term = %term, "search settled");
        let query = RecipeQuery {
            search: term,
            ..query.clone()
        };
        Some(query.apply(self.recipes.list()))
    }

    /// Merges every ingredient of `recipe_id` into the shopping list,
    /// attributed to that recipe.
    pub fn add_recipe_to_shopping_list(&mut self, recipe_id: &str) -> Result<Persisted<MergeSummary>> {
        let recipe = self
            .recipes
            .get(recipe_id)
            .ok_or_else(|| RecipeBoxError::recipe_not_found(recipe_id))?;

        let recipe_name = recipe.name.clone();
        let merged = self.shopping.merge_ingredients(
            Some(recipe.id.as_str()),
            Some(recipe.name.as_str()),
            recipe.ingredients.as_slice(),
        );
        Ok(merged.map(|added| MergeSummary { added, recipe_name }))
    }
}
