use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::RecipeId;

/// Shopping aisle grouping, declared in display order.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Fresh vegetables, fruit and herbs
    Produce,
    /// Poultry, red meat and cured meat
    Meat,
    /// Fish and shellfish
    Seafood,
    /// Milk, cheese, butter, cream, yogurt and eggs
    Dairy,
    /// Bread, pasta, rice, flour and cereals
    Grains,
    Frozen,
    /// Oils, sauces, spices, canned and baking goods
    Pantry,
    #[default]
    Other,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Meat => "Meat & Seafood",
            Category::Seafood => "Seafood",
            Category::Dairy => "Dairy & Eggs",
            Category::Grains => "Grains & Bread",
            Category::Frozen => "Frozen",
            Category::Pantry => "Pantry & Spices",
            Category::Other => "Other",
        }
    }
}

/// One line of the shopping list.
///
/// `quantity` stays textual: unit mismatches produce compound expressions
/// such as `"1 + 200 g"` which are never reduced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub category: Category,
    pub source_recipe_ids: Vec<RecipeId>,
    pub source_recipe_names: Vec<String>,
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl GroceryItem {
    /// Item typed in by the user, kept verbatim.
    pub fn custom(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity: "1".to_owned(),
            unit: String::new(),
            category: Category::Other,
            source_recipe_ids: Vec::new(),
            source_recipe_names: Vec::new(),
            checked: false,
            notes: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub checked: usize,
    pub total: usize,
}

impl Progress {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a GroceryItem>) -> Self {
        items.into_iter().fold(Self::default(), |mut acc, item| {
            acc.total += 1;
            if item.checked {
                acc.checked += 1;
            }
            acc
        })
    }

    /// Completion rounded to the nearest whole percent.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }

        ((self.checked as f64 / self.total as f64) * 100.0).round() as u32
    }
}
