use grocery_shared::recipe::{Recipe, RecipeId};
use grocery_shared::shopping::{Category, GroceryItem, Progress};
use strum::VariantArray;

use crate::aggregation::{ServingOverrides, custom_items, generate};

/// Shopping list being edited by one user session.
///
/// Owns the selected recipes, the serving overrides and the live items.
/// Mutations act on the current items until the next `regenerate`, which
/// replaces them wholesale (checked flags included).
#[derive(Debug, Clone)]
pub struct GroceryList {
    name: String,
    recipes: Vec<Recipe>,
    overrides: ServingOverrides,
    items: Vec<GroceryItem>,
}

impl GroceryList {
    pub fn new(name: impl Into<String>, recipes: Vec<Recipe>) -> Self {
        let mut list = Self {
            name: name.into(),
            recipes,
            overrides: ServingOverrides::new(),
            items: Vec::new(),
        };
        list.regenerate();
        list
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn overrides(&self) -> &ServingOverrides {
        &self.overrides
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn regenerate(&mut self) -> &[GroceryItem] {
        self.items = generate(&self.recipes, &self.overrides);
        &self.items
    }

    /// Change the serving count of one recipe; the items are left as they are
    /// until the next `regenerate`.
    pub fn adjust_servings(&mut self, recipe_id: RecipeId, delta: i32) -> Option<u32> {
        let Some(recipe) = self.recipes.iter().find(|r| r.id == recipe_id) else {
            tracing::debug!(recipe_id, "serving adjustment for unknown recipe ignored");
            return None;
        };

        Some(self.overrides.adjust(recipe, delta))
    }

    pub fn toggle_checked(&mut self, item_id: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) else {
            return false;
        };

        item.checked = !item.checked;
        true
    }

    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        self.items.len() != before
    }

    pub fn add_custom_items(&mut self, raw: &str) -> usize {
        let added = custom_items(raw);
        let count = added.len();
        self.items.extend(added);

        if count > 0 {
            tracing::info!(count, "custom items added");
        }

        count
    }

    /// Uncheck everything for the next shopping trip.
    pub fn reset_checked(&mut self) {
        for item in &mut self.items {
            item.checked = false;
        }
    }

    pub fn progress(&self) -> Progress {
        Progress::from_items(&self.items)
    }

    /// Items per category, canonical order, empty categories omitted.
    pub fn grouped(&self) -> Vec<(Category, Vec<&GroceryItem>)> {
        group_by_category(&self.items)
    }
}

pub(crate) fn group_by_category(items: &[GroceryItem]) -> Vec<(Category, Vec<&GroceryItem>)> {
    Category::VARIANTS
        .iter()
        .filter_map(|category| {
            let matching: Vec<_> = items.iter().filter(|i| i.category == *category).collect();
            (!matching.is_empty()).then_some((*category, matching))
        })
        .collect()
}
