use serde::{Deserialize, Serialize};

pub type RecipeId = u64;

/// Recipe as handed over by the favorites collaborator.
///
/// Only `servings` and `ingredients` drive list generation; `image` is carried
/// through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Recipe {
    pub fn new(
        id: RecipeId,
        title: impl Into<String>,
        servings: u32,
        ingredients: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            servings,
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            image: None,
        }
    }

    /// Decode the JSON array of saved recipes.
    pub fn list_from_json(value: &str) -> crate::Result<Vec<Recipe>> {
        Ok(serde_json::from_str(value)?)
    }
}
