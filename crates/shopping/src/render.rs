use grocery_shared::bail;
use grocery_shared::recipe::Recipe;
use grocery_shared::shopping::GroceryItem;
use time::Date;
use time::format_description::{self, BorrowedFormatItem, OwnedFormatItem};
use time::macros::date;

use crate::aggregation::ServingOverrides;
use crate::list::{GroceryList, group_by_category};

pub const DEFAULT_CHECKED_GLYPH: &str = "✓";
pub const DEFAULT_UNCHECKED_GLYPH: &str = "☐";
pub const DEFAULT_DATE_FORMAT: &str = "[month padding:none]/[day padding:none]/[year]";

/// Plain-text rendering of a shopping list.
///
/// The output is the single document handed to file export, share and
/// clipboard alike.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    checked_glyph: String,
    unchecked_glyph: String,
    date_format: OwnedFormatItem,
}

impl TextRenderer {
    pub fn new(
        checked_glyph: impl Into<String>,
        unchecked_glyph: impl Into<String>,
        date_format: &str,
    ) -> grocery_shared::Result<Self> {
        let checked_glyph = checked_glyph.into();
        let unchecked_glyph = unchecked_glyph.into();

        if checked_glyph.is_empty() || unchecked_glyph.is_empty() {
            bail!("checkbox glyphs must not be empty");
        }

        let date_format = format_description::parse_owned::<2>(date_format)
            .map_err(|e| grocery_shared::Error::Format(e.to_string()))?;

        // Reject descriptions asking for time-of-day or offset components.
        date!(2024 - 01 - 01)
            .format(&date_format)
            .map_err(|e| grocery_shared::Error::Format(e.to_string()))?;

        Ok(Self {
            checked_glyph,
            unchecked_glyph,
            date_format,
        })
    }

    pub fn format_date(&self, date: Date) -> String {
        date.format(&self.date_format)
            .unwrap_or_else(|_| date.to_string())
    }

    pub fn default_list_name(&self, date: Date) -> String {
        format!("Shopping List - {}", self.format_date(date))
    }

    pub fn render(
        &self,
        list_name: &str,
        recipes: &[Recipe],
        overrides: &ServingOverrides,
        items: &[GroceryItem],
        date: Date,
    ) -> String {
        let mut content = format!(
            "{list_name}\n{}\n\n",
            "=".repeat(list_name.chars().count())
        );

        content.push_str("Recipes:\n");
        for recipe in recipes {
            content += &format!(
                "• {} ({} servings)\n",
                recipe.title,
                overrides.effective(recipe)
            );
        }
        content.push('\n');

        for (category, category_items) in group_by_category(items) {
            content += &format!("{}:\n", category.display_name());
            for item in category_items {
                let checkmark = if item.checked {
                    &self.checked_glyph
                } else {
                    &self.unchecked_glyph
                };
                content += &format!(
                    "{checkmark} {} {} {}\n",
                    item.quantity, item.unit, item.name
                );
            }
            content.push('\n');
        }

        content += &format!("Generated on {}", self.format_date(date));
        content
    }

    pub fn render_list(&self, list: &GroceryList, date: Date) -> String {
        self.render(
            list.name(),
            list.recipes(),
            list.overrides(),
            list.items(),
            date,
        )
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        let date_format: &[BorrowedFormatItem<'_>] = time::macros::format_description!(
            "[month padding:none]/[day padding:none]/[year]"
        );

        Self {
            checked_glyph: DEFAULT_CHECKED_GLYPH.to_owned(),
            unchecked_glyph: DEFAULT_UNCHECKED_GLYPH.to_owned(),
            date_format: OwnedFormatItem::from(date_format),
        }
    }
}

/// Download name for a list: anything but ASCII letters and digits becomes `_`.
pub fn export_file_name(list_name: &str) -> String {
    let stem: String = list_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    format!("{stem}.txt")
}
