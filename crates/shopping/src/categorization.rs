use std::sync::LazyLock;

use grocery_shared::shopping::Category;
use regex::Regex;

/// Keyword patterns in precedence order; the first match wins.
///
/// Matching is by substring, so `"bell pepper"` and `"black pepper"` both land
/// in produce before pantry gets a chance.
static CATEGORY_PATTERNS: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    [
        (
            Category::Produce,
            "tomato|onion|garlic|pepper|lettuce|spinach|carrot|celery|potato|mushroom|herb|parsley|cilantro|basil|lemon|lime|apple|banana|avocado|cucumber|zucchini|broccoli|cauliflower",
        ),
        (
            Category::Meat,
            "chicken|beef|pork|turkey|lamb|bacon|sausage|ham|ground",
        ),
        (
            Category::Seafood,
            "fish|salmon|tuna|shrimp|crab|lobster|cod|tilapia|mussels|clams",
        ),
        (
            Category::Dairy,
            "milk|cheese|butter|cream|yogurt|egg|sour cream|cottage cheese|mozzarella|cheddar|parmesan",
        ),
        (
            Category::Grains,
            "bread|pasta|rice|flour|oats|quinoa|barley|cereal|crackers|tortilla|bagel|roll",
        ),
        (Category::Frozen, "frozen|ice cream|popsicle"),
        (
            Category::Pantry,
            "oil|vinegar|salt|pepper|spice|sauce|stock|broth|can|jar|bottle|sugar|honey|vanilla|baking",
        ),
    ]
    .into_iter()
    .map(|(category, keywords)| {
        let pattern = format!("(?i)(?:{keywords})");
        (category, Regex::new(&pattern).unwrap())
    })
    .collect()
});

/// Assign the shopping aisle for an ingredient name
///
/// Returns `Category::Other` when no keyword matches.
pub fn categorize(ingredient_name: &str) -> Category {
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(ingredient_name))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}
