// src-tauri/src/query.rs
use crate::types::{CategoryFilter, Recipe};
use serde::{Deserialize, Serialize};

/// Browse state sent by the frontend's search box, category select and
/// favorites toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub favorites_only: bool,
}

impl RecipeQuery {
    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        filter_recipes(recipes, &self.search, self.category, self.favorites_only)
    }
}

/// Visible subset of `recipes`, in their original order.
///
/// The search term is trimmed and matched case-insensitively against the
/// name and each ingredient line; the category and favorites restrictions
/// are ANDed on top.
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    search_term: &str,
    category: CategoryFilter,
    favorites_only: bool,
) -> Vec<&'a Recipe> {
    let term = search_term.trim().to_lowercase();

    recipes
        .iter()
        .filter(|r| term.is_empty() || matches_term(r, &term))
        .filter(|r| category.matches(r.category))
        .filter(|r| !favorites_only || r.is_favorite)
        .collect()
}

fn matches_term(recipe: &Recipe, term: &str) -> bool {
    recipe.name.to_lowercase().contains(term)
        || recipe
            .ingredients
            .iter()
            .any(|line| line.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use chrono::Utc;

    fn recipe(id: &str, name: &str, category: Category, ingredients: &[&str], favorite: bool) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            category,
            time: 10,
            servings: 2,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: String::new(),
            image_url: None,
            is_favorite: favorite,
            date_created: Utc::now(),
        }
    }

    fn catalog() -> Vec<Recipe> {
        vec![
            recipe("1", "Tomato Basil Soup", Category::Lunch, &["2 cans tomatoes", "Basil"], false),
            recipe("2", "Banana Bites", Category::Snack, &["1 ripe banana", "Peanut butter"], true),
            recipe("3", "Sausage and Veggies", Category::Dinner, &["1 zucchini", "Fresh BASIL"], true),
            recipe("4", "Scramble", Category::Breakfast, &["4 eggs"], false),
        ]
    }

    fn ids(found: &[&Recipe]) -> Vec<String> {
        found.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn no_filters_returns_everything_in_order() {
        let all = catalog();
        let found = filter_recipes(&all, "", CategoryFilter::All, false);
        assert_eq!(found.len(), all.len());
        assert!(found.iter().zip(&all).all(|(a, b)| *a == b));
    }

    #[test]
    fn search_matches_name_and_ingredients_ignoring_case() {
        let all = catalog();
        assert_eq!(ids(&filter_recipes(&all, "  basil ", CategoryFilter::All, false)), ["1", "3"]);
        assert_eq!(ids(&filter_recipes(&all, "BANANA", CategoryFilter::All, false)), ["2"]);
        assert_eq!(ids(&filter_recipes(&all, "egg", CategoryFilter::All, false)), ["4"]);
        assert!(filter_recipes(&all, "lasagna", CategoryFilter::All, false).is_empty());
    }

    #[test]
    fn filters_compose_with_and() {
        let all = catalog();
        let dinner = CategoryFilter::Only(Category::Dinner);
        assert_eq!(ids(&filter_recipes(&all, "basil", dinner, false)), ["3"]);
        assert_eq!(ids(&filter_recipes(&all, "", CategoryFilter::All, true)), ["2", "3"]);
        assert_eq!(ids(&filter_recipes(&all, "basil", CategoryFilter::All, true)), ["3"]);
        let lunch = CategoryFilter::Only(Category::Lunch);
        assert!(filter_recipes(&all, "", lunch, true).is_empty());
    }

    #[test]
    fn query_value_applies_the_same_filters() {
        let all = catalog();
        let query: RecipeQuery =
            serde_json::from_str(r#"{"search":"banana","category":"snack","favoritesOnly":true}"#).unwrap();
        assert_eq!(ids(&query.apply(&all)), ["2"]);
        assert_eq!(RecipeQuery::default().apply(&all).len(), 4);
    }
}
