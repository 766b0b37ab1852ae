pub mod aggregation;
pub mod categorization;
pub mod ingredient;
pub mod list;
pub mod render;

// Re-export commonly used types
pub use aggregation::{ServingOverrides, custom_items, generate};
pub use categorization::categorize;
pub use ingredient::{ParsedIngredient, parse_ingredient};
pub use list::GroceryList;
pub use render::{TextRenderer, export_file_name};
