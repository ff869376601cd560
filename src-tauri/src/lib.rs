// src-tauri/src/lib.rs
// Recipe catalog and shopping list backend. Everything except `commands`
// and `run` is independent of the webview shell.

pub mod aggregate;
pub mod config;
pub mod cookbook;
pub mod db;
pub mod debounce;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod query;
pub mod recipes;
pub mod samples;
pub mod shopping_list;
pub mod store;
pub mod types;
pub mod utils;

#[cfg(feature = "desktop")]
pub mod commands;

pub use aggregate::{group_by_recipe, render_printable, ShoppingGroup};
pub use config::AppConfig;
pub use cookbook::{Cookbook, MergeSummary};
pub use error::{ConfigError, EntityKind, RecipeBoxError, StorageError};
pub use persistence::{Loaded, MutationResponse, Persisted, Persistence, WriteMode};
pub use query::{filter_recipes, RecipeQuery};
pub use recipes::RecipeRepository;
pub use shopping_list::ShoppingListRepository;
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
pub use types::{Category, CategoryFilter, Recipe, RecipeInput, ShoppingItem};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::AppState;
    use std::path::PathBuf;

    logging::init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "could not resolve database path, using working directory");
        AppConfig {
            db_path: PathBuf::from(db::DB_FILE_NAME),
            seed_samples: true,
        }
    });
    let cookbook = Cookbook::bootstrap(&config);

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(AppState::new(cookbook))
        .invoke_handler(tauri::generate_handler![
            commands::list_recipes,
            commands::get_recipe,
            commands::add_recipe,
            commands::update_recipe,
            commands::delete_recipe,
            commands::toggle_favorite,
            commands::filter_recipes,
            commands::search_input,
            commands::poll_search,
            commands::list_shopping_items,
            commands::add_recipe_to_shopping_list,
            commands::merge_ingredients,
            commands::set_shopping_item_checked,
            commands::remove_shopping_item,
            commands::clear_shopping_list,
            commands::group_shopping_list,
            commands::printable_shopping_list,
            commands::generate_id
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
