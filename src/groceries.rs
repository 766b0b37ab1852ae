use std::path::PathBuf;

use grocery_shared::recipe::Recipe;
use grocery_shopping::{GroceryList, TextRenderer, export_file_name};
use time::{Date, OffsetDateTime};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::export::{Delivery, FileSink, ListDocument, ListSink, share_or_copy};

/// Entry point for callers: opens lists and sends rendered copies out.
#[derive(Debug, Clone)]
pub struct Groceries {
    renderer: TextRenderer,
    exports: FileSink,
}

impl Groceries {
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate().map_err(AppError::Validation)?;

        let renderer = TextRenderer::new(
            config.render.checked_glyph.as_str(),
            config.render.unchecked_glyph.as_str(),
            &config.render.date_format,
        )?;

        Ok(Self {
            renderer,
            exports: FileSink::new(&config.export.dir),
        })
    }

    /// Start a list for the selected recipes, named after today's date.
    pub fn open_list(&self, recipes: Vec<Recipe>) -> GroceryList {
        self.open_list_on(recipes, today())
    }

    pub fn open_list_on(&self, recipes: Vec<Recipe>, date: Date) -> GroceryList {
        let list = GroceryList::new(self.renderer.default_list_name(date), recipes);

        tracing::info!(
            list = list.name(),
            recipes = list.recipes().len(),
            items = list.items().len(),
            "grocery list opened"
        );

        list
    }

    pub fn document(&self, list: &GroceryList) -> ListDocument {
        self.document_on(list, today())
    }

    pub fn document_on(&self, list: &GroceryList, date: Date) -> ListDocument {
        ListDocument {
            title: list.name().to_owned(),
            file_name: export_file_name(list.name()),
            content: self.renderer.render_list(list, date),
        }
    }

    /// Write the list into the configured export directory.
    pub fn export(&self, list: &GroceryList) -> Result<PathBuf> {
        let document = self.document(list);
        self.exports.deliver(&document)?;
        Ok(self.exports.path_for(&document))
    }

    pub fn share(
        &self,
        list: &GroceryList,
        share: &dyn ListSink,
        clipboard: &dyn ListSink,
    ) -> Result<Delivery> {
        share_or_copy(share, clipboard, &self.document(list))
    }
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
