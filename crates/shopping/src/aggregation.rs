use std::collections::HashMap;

use grocery_shared::recipe::{Recipe, RecipeId};
use grocery_shared::shopping::GroceryItem;
use ulid::Ulid;

use crate::categorization::categorize;
use crate::ingredient::{coerce_quantity, format_quantity, parse_ingredient};

/// Serving counts chosen by the user, keyed by recipe.
///
/// Recipes without an entry use their own `servings`. Every stored value is
/// at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServingOverrides(HashMap<RecipeId, u32>);

impl ServingOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, recipe_id: RecipeId) -> Option<u32> {
        self.0.get(&recipe_id).copied()
    }

    pub fn set(&mut self, recipe_id: RecipeId, servings: u32) -> u32 {
        let servings = servings.max(1);
        self.0.insert(recipe_id, servings);
        servings
    }

    /// Move the effective serving count by `delta`, never below 1.
    pub fn adjust(&mut self, recipe: &Recipe, delta: i32) -> u32 {
        let current = i64::from(self.effective(recipe));
        let next = (current + i64::from(delta)).clamp(1, i64::from(u32::MAX)) as u32;
        self.set(recipe.id, next)
    }

    pub fn effective(&self, recipe: &Recipe) -> u32 {
        self.get(recipe.id).unwrap_or(recipe.servings).max(1)
    }

    /// Multiplier applied to the recipe's ingredient amounts.
    ///
    /// A recipe declaring zero servings counts as one.
    pub fn scale_factor(&self, recipe: &Recipe) -> f64 {
        f64::from(self.effective(recipe)) / f64::from(recipe.servings.max(1))
    }
}

/// Build the consolidated shopping list for the selected recipes
///
/// Ingredients sharing a lowercase name collapse into one item. Amounts with the
/// same unit are summed; anything else is appended as `" + <amount> <unit>"`.
/// Items keep the order in which their name was first seen.
pub fn generate(recipes: &[Recipe], overrides: &ServingOverrides) -> Vec<GroceryItem> {
    let mut items: Vec<GroceryItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for recipe in recipes {
        let factor = overrides.scale_factor(recipe);

        for line in recipe.ingredients.iter().filter(|l| !l.trim().is_empty()) {
            let parsed = parse_ingredient(line);
            let amount = parsed.amount() * factor;

            if let Some(&position) = index.get(&parsed.key()) {
                let item = &mut items[position];
                item.source_recipe_ids.push(recipe.id);
                item.source_recipe_names.push(recipe.title.clone());

                match coerce_quantity(&item.quantity) {
                    Some(existing) if item.unit == parsed.unit => {
                        item.quantity = format_quantity(existing + amount);
                    }
                    _ => {
                        item.quantity = format!(
                            "{} + {} {}",
                            item.quantity,
                            format_quantity(amount),
                            parsed.unit
                        );
                    }
                }

                continue;
            }

            index.insert(parsed.key(), items.len());
            items.push(GroceryItem {
                id: Ulid::new().to_string(),
                category: categorize(&parsed.name),
                quantity: format_quantity(amount),
                unit: parsed.unit,
                name: parsed.name,
                source_recipe_ids: vec![recipe.id],
                source_recipe_names: vec![recipe.title.clone()],
                checked: false,
                notes: None,
            });
        }
    }

    tracing::debug!(
        recipes = recipes.len(),
        items = items.len(),
        "grocery list generated"
    );

    items
}

/// One unparsed item per non-blank line of free text.
pub fn custom_items(raw: &str) -> Vec<GroceryItem> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| GroceryItem::custom(Ulid::new().to_string(), line))
        .collect()
}
