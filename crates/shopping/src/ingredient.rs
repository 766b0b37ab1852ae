use std::sync::LazyLock;

use regex::Regex;

/// Leading amount, optional unit word, then the ingredient name.
///
/// A fraction such as `1/2` is captured as one opaque token.
static RE_INGREDIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?(?:/[0-9]+)?)\s*([A-Za-z0-9_]+)?\s+(.+)").unwrap()
});

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIngredient {
    pub quantity: String,
    pub unit: String,
    pub name: String,
}

impl ParsedIngredient {
    /// Merge key shared by every spelling of the same ingredient.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Numeric amount, or 1 when the token is not a plain decimal.
    pub fn amount(&self) -> f64 {
        coerce_quantity(&self.quantity).unwrap_or(1.0)
    }
}

/// Split a free-text line like `"2 cups flour"` into quantity, unit and name
///
/// Lines without a leading amount become a single unit-less item.
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    if let Some(caps) = RE_INGREDIENT.captures(line) {
        return ParsedIngredient {
            quantity: caps[1].to_owned(),
            unit: caps
                .get(2)
                .map(|m| m.as_str().to_owned())
                .unwrap_or_default(),
            name: caps[3].trim().to_owned(),
        };
    }

    ParsedIngredient {
        quantity: "1".to_owned(),
        unit: String::new(),
        name: line.trim().to_owned(),
    }
}

/// Strict decimal parsing of a whole quantity string.
///
/// Fractions (`"1/2"`) and compound expressions (`"2 + 3 cups"`) are not numbers.
pub fn coerce_quantity(quantity: &str) -> Option<f64> {
    quantity
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Shortest decimal form: `2.0` renders as `"2"`, `0.5` as `"0.5"`.
pub fn format_quantity(value: f64) -> String {
    format!("{value}")
}
