// src-tauri/src/commands.rs
// Commands invoked by the webview frontend.

use crate::aggregate::{group_by_recipe, render_printable};
use crate::cookbook::{Cookbook, MergeSummary};
use crate::persistence::MutationResponse;
use crate::query::RecipeQuery;
use crate::types::{Recipe, RecipeInput, ShoppingItem};
use crate::utils;
use chrono::Local;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;
use tauri::{command, State};

pub struct AppState {
    pub cookbook: Mutex<Cookbook>,
}

impl AppState {
    pub fn new(cookbook: Cookbook) -> Self {
        AppState {
            cookbook: Mutex::new(cookbook),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Cookbook>, String> {
        self.cookbook
            .lock()
            .map_err(|e| format!("Cookbook lock failed: {}", e))
    }
}

// --- Recipes ---

#[command]
pub fn list_recipes(state: State<AppState>) -> Result<Vec<Recipe>, String> {
    Ok(state.lock()?.recipes().list().to_vec())
}

#[command]
pub fn get_recipe(state: State<AppState>, recipe_id: String) -> Result<Option<Recipe>, String> {
    Ok(state.lock()?.recipes().get(&recipe_id).cloned())
}

#[command]
pub fn add_recipe(state: State<AppState>, input: RecipeInput) -> Result<MutationResponse<Recipe>, String> {
    let mut cookbook = state.lock()?;
    cookbook
        .recipes_mut()
        .add(input)
        .map(Into::into)
        .map_err(|e| e.to_string())
}

#[command]
pub fn update_recipe(
    state: State<AppState>,
    recipe_id: String,
    input: RecipeInput,
) -> Result<MutationResponse<Recipe>, String> {
    let mut cookbook = state.lock()?;
    cookbook
        .recipes_mut()
        .update(&recipe_id, input)
        .map(Into::into)
        .map_err(|e| e.to_string())
}

#[command]
pub fn delete_recipe(state: State<AppState>, recipe_id: String) -> Result<MutationResponse<Recipe>, String> {
    let mut cookbook = state.lock()?;
    cookbook
        .recipes_mut()
        .remove(&recipe_id)
        .map(Into::into)
        .map_err(|e| e.to_string())
}

#[command]
pub fn toggle_favorite(state: State<AppState>, recipe_id: String) -> Result<MutationResponse<bool>, String> {
    let mut cookbook = state.lock()?;
    cookbook
        .recipes_mut()
        .toggle_favorite(&recipe_id)
        .map(Into::into)
        .map_err(|e| e.to_string())
}

#[command]
pub fn filter_recipes(state: State<AppState>, query: RecipeQuery) -> Result<Vec<Recipe>, String> {
    let cookbook = state.lock()?;
    Ok(cookbook.filter(&query).into_iter().cloned().collect())
}

#[command]
pub fn search_input(state: State<AppState>, term: String) -> Result<(), String> {
    state.lock()?.search_input(term, Instant::now());
    Ok(())
}

/// Polled by the frontend; returns the filtered recipes once typing pauses.
#[command]
pub fn poll_search(state: State<AppState>, query: RecipeQuery) -> Result<Option<Vec<Recipe>>, String> {
    let mut cookbook = state.lock()?;
    Ok(cookbook
        .poll_search(&query, Instant::now())
        .map(|recipes| recipes.into_iter().cloned().collect()))
}

// --- Shopping list ---

#[command]
pub fn list_shopping_items(state: State<AppState>) -> Result<Vec<ShoppingItem>, String> {
    Ok(state.lock()?.shopping_list().list().to_vec())
}

#[command]
pub fn add_recipe_to_shopping_list(
    state: State<AppState>,
    recipe_id: String,
) -> Result<MutationResponse<MergeSummary>, String> {
    let mut cookbook = state.lock()?;
    cookbook
        .add_recipe_to_shopping_list(&recipe_id)
        .map(Into::into)
        .map_err(|e| e.to_string())
}

#[command]
pub fn merge_ingredients(
    state: State<AppState>,
    recipe_id: Option<String>,
    recipe_name: Option<String>,
    ingredients: Vec<String>,
) -> Result<MutationResponse<usize>, String> {
    let mut cookbook = state.lock()?;
    Ok(cookbook
        .shopping_list_mut()
        .merge_ingredients(recipe_id.as_deref(), recipe_name.as_deref(), &ingredients)
        .into())
}

#[command]
pub fn set_shopping_item_checked(
    state: State<AppState>,
    item_id: String,
    checked: bool,
) -> Result<MutationResponse<()>, String> {
    let mut cookbook = state.lock()?;
    cookbook
        .shopping_list_mut()
        .set_checked(&item_id, checked)
        .map(Into::into)
        .map_err(|e| e.to_string())
}

#[command]
pub fn remove_shopping_item(
    state: State<AppState>,
    item_id: String,
) -> Result<MutationResponse<ShoppingItem>, String> {
    let mut cookbook = state.lock()?;
    cookbook
        .shopping_list_mut()
        .remove(&item_id)
        .map(Into::into)
        .map_err(|e| e.to_string())
}

#[command]
pub fn clear_shopping_list(state: State<AppState>) -> Result<MutationResponse<usize>, String> {
    let mut cookbook = state.lock()?;
    Ok(cookbook.shopping_list_mut().clear().into())
}

#[command]
pub fn group_shopping_list(state: State<AppState>) -> Result<serde_json::Value, String> {
    let cookbook = state.lock()?;
    serde_json::to_value(group_by_recipe(cookbook.shopping_list().list()))
        .map_err(|e| format!("Failed to serialize shopping groups: {}", e))
}

#[command]
pub fn printable_shopping_list(state: State<AppState>) -> Result<String, String> {
    let cookbook = state.lock()?;
    Ok(render_printable(cookbook.shopping_list().list(), &Local::now()))
}

#[command]
pub fn generate_id() -> String {
    utils::generate_id()
}
