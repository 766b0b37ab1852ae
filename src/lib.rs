pub mod config;
pub mod error;
pub mod export;
pub mod groceries;
pub mod observability;

pub use crate::config::Config;
pub use error::AppError;
pub use export::{Delivery, FileSink, ListDocument, ListSink, share_or_copy};
pub use groceries::Groceries;

pub use grocery_shared::recipe::Recipe;
pub use grocery_shared::shopping::{Category, GroceryItem, Progress};
pub use grocery_shopping::{GroceryList, ServingOverrides, TextRenderer};
