// src-tauri/src/samples.rs
// Starter recipes installed for a first-time user.

use crate::types::{Category, Recipe};
use crate::utils::generate_id;
use chrono::Utc;

struct Sample {
    name: &'static str,
    category: Category,
    time: u32,
    servings: u32,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
    image_url: Option<&'static str>,
    is_favorite: bool,
}

const SAMPLES: &[Sample] = &[
    Sample {
        name: "Veggie Breakfast Scramble",
        category: Category::Breakfast,
        time: 15,
        servings: 2,
        ingredients: &[
            "4 large eggs",
            "1/2 red bell pepper, diced",
            "1/2 green bell pepper, diced",
            "1/4 cup diced onion",
            "1 cup fresh spinach",
            "1 tbsp olive oil",
            "Salt and pepper to taste",
            "1/4 cup shredded cheddar cheese",
        ],
        instructions: &[
            "Heat olive oil in a non-stick skillet over medium heat.",
            "Add diced onions and bell peppers, sauté for 3-4 minutes until softened.",
            "Add spinach and cook until wilted, about 1 minute.",
            "Whisk eggs in a bowl, season with salt and pepper.",
            "Pour eggs over vegetables and gently stir as they cook.",
            "When eggs are almost set, sprinkle cheese on top and cover until melted.",
            "Serve hot with toast or avocado slices.",
        ],
        image_url: None,
        is_favorite: false,
    },
    Sample {
        name: "Tomato Basil Soup",
        category: Category::Lunch,
        time: 25,
        servings: 2,
        ingredients: &[
            "2 tbsp olive oil",
            "1 large onion, chopped",
            "2 cloves garlic, minced",
            "2 cans (14 oz each) diced tomatoes",
            "2 cups vegetable broth",
            "1/4 cup fresh basil leaves, plus more for garnish",
            "1 tsp sugar",
            "1/2 cup heavy cream",
            "Salt and pepper to taste",
        ],
        instructions: &[
            "Heat olive oil in a large pot over medium heat.",
            "Add onions and cook until translucent, about 5 minutes.",
            "Add garlic and cook for another minute.",
            "Add diced tomatoes, vegetable broth, basil, and sugar.",
            "Bring to a boil, then reduce heat and simmer for 15 minutes.",
            "Use an immersion blender to puree the soup until smooth.",
            "Stir in heavy cream and season with salt and pepper.",
            "Serve hot, garnished with fresh basil leaves.",
        ],
        image_url: Some("https://via.placeholder.com/400x300?text=Tomato+Basil+Soup"),
        is_favorite: false,
    },
    Sample {
        name: "Peanut Butter Banana Bites",
        category: Category::Snack,
        time: 10,
        servings: 1,
        ingredients: &[
            "1 ripe banana",
            "2 tbsp peanut butter",
            "1/4 cup chocolate chips, melted",
            "2 tbsp chopped peanuts (optional)",
        ],
        instructions: &[
            "Slice the banana into 1/2 inch thick rounds.",
            "Spread a small amount of peanut butter on top of each banana slice.",
            "Stack another banana slice on top to create a sandwich.",
            "Dip each sandwich halfway into melted chocolate.",
            "Sprinkle with chopped peanuts if desired.",
            "Place on a parchment-lined tray and freeze for at least 1 hour.",
            "Store in an airtight container in the freezer.",
        ],
        image_url: Some("https://via.placeholder.com/400x300?text=Peanut+Butter+Banana+Bites"),
        is_favorite: true,
    },
    Sample {
        name: "One-Pan Sausage and Veggies",
        category: Category::Dinner,
        time: 30,
        servings: 3,
        ingredients: &[
            "1 lb smoked sausage, sliced",
            "2 cups baby red potatoes, quartered",
            "1 red bell pepper, chopped",
            "1 zucchini, chopped",
            "1 yellow squash, chopped",
            "1/2 red onion, chopped",
            "2 tbsp olive oil",
            "2 tsp Italian seasoning",
            "1 tsp garlic powder",
            "Salt and pepper to taste",
            "Fresh parsley for garnish",
        ],
        instructions: &[
            "Preheat oven to 400°F (200°C).",
            "In a large mixing bowl, combine all chopped vegetables and sliced sausage.",
            "Drizzle with olive oil and add all seasonings.",
            "Toss until everything is evenly coated.",
            "Spread mixture onto a large baking sheet in a single layer.",
            "Bake for 20-25 minutes, stirring halfway through, until vegetables are tender.",
            "Garnish with fresh parsley before serving.",
        ],
        image_url: Some("https://via.placeholder.com/400x300?text=One-Pan+Sausage+and+Veggies"),
        is_favorite: false,
    },
];

pub fn sample_recipes() -> Vec<Recipe> {
    let now = Utc::now();
    SAMPLES
        .iter()
        .map(|s| Recipe {
            id: generate_id(),
            name: s.name.to_string(),
            category: s.category,
            time: s.time,
            servings: s.servings,
            ingredients: s.ingredients.iter().map(|i| i.to_string()).collect(),
            instructions: s.instructions.join("\n"),
            image_url: s.image_url.map(str::to_string),
            is_favorite: s.is_favorite,
            date_created: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_cover_several_categories_and_one_favorite() {
        let recipes = sample_recipes();
        assert_eq!(recipes.len(), 4);
        assert_eq!(recipes.iter().filter(|r| r.is_favorite).count(), 1);
        assert!(recipes.iter().all(|r| r.time > 0 && r.servings > 0));
        assert!(recipes.iter().all(|r| r.steps().count() >= 7));
        assert_eq!(recipes[2].name, "Peanut Butter Banana Bites");
    }
}
