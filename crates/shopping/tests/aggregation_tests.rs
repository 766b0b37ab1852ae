use grocery_shared::recipe::Recipe;
use grocery_shared::shopping::{Category, GroceryItem};
use grocery_shopping::{ServingOverrides, generate};

fn find<'a>(items: &'a [GroceryItem], name: &str) -> &'a GroceryItem {
    items
        .iter()
        .find(|i| i.name == name)
        .unwrap_or_else(|| panic!("{name} should be on the list"))
}

#[test]
fn test_same_ingredient_merges_across_recipes() {
    let recipes = vec![
        Recipe::new(1, "Pancakes", 2, ["1 cup flour"]),
        Recipe::new(2, "Waffles", 4, ["1 cup flour"]),
    ];

    let items = generate(&recipes, &ServingOverrides::new());

    assert_eq!(items.len(), 1);
    let flour = &items[0];
    assert_eq!(flour.name, "flour");
    assert_eq!(flour.quantity, "2");
    assert_eq!(flour.unit, "cup");
    assert_eq!(flour.category, Category::Grains);
    assert_eq!(flour.source_recipe_ids, vec![1, 2]);
    assert_eq!(flour.source_recipe_names, vec!["Pancakes", "Waffles"]);
    assert!(!flour.checked);
}

#[test]
fn test_serving_override_scales_quantities() {
    let cake = Recipe::new(7, "Cake", 4, ["2 cups sugar", "3 eggs"]);
    let mut overrides = ServingOverrides::new();
    overrides.set(cake.id, 8);

    let items = generate(&[cake], &overrides);

    assert_eq!(find(&items, "sugar").quantity, "4");
    assert_eq!(find(&items, "eggs").quantity, "6");
}

#[test]
fn test_scaling_down_produces_decimals() {
    let stew = Recipe::new(1, "Stew", 4, ["3 carrots"]);
    let mut overrides = ServingOverrides::new();
    overrides.set(stew.id, 2);

    let items = generate(&[stew], &overrides);

    assert_eq!(find(&items, "carrots").quantity, "1.5");
}

#[test]
fn test_unit_mismatch_concatenates() {
    let recipes = vec![
        Recipe::new(1, "Risotto", 1, ["1 cup rice"]),
        Recipe::new(2, "Pilaf", 1, ["200 g rice"]),
    ];

    let items = generate(&recipes, &ServingOverrides::new());

    assert_eq!(items.len(), 1);
    let rice = &items[0];
    assert_eq!(rice.quantity, "1 + 200 g");
    assert_eq!(rice.unit, "cup");
    assert!(rice.quantity.contains('1'));
    assert!(rice.quantity.contains("200 g"));
}

#[test]
fn test_fraction_is_opaque() {
    let recipes = vec![
        Recipe::new(1, "Cookies", 1, ["1/2 cup butter"]),
        Recipe::new(2, "Scones", 1, ["1/2 cup butter"]),
    ];

    let items = generate(&recipes, &ServingOverrides::new());

    // each "1/2" counts as one when scaled
    assert_eq!(items[0].quantity, "2");
    assert_eq!(items[0].unit, "cup");
}

#[test]
fn test_categorization_of_parsed_names() {
    let recipes = vec![Recipe::new(
        1,
        "Mixed grill",
        2,
        [
            "2 lbs chicken breast",
            "1 bunch spinach",
            "3 oz salmon",
            "1 tsp truffle dust",
        ],
    )];

    let items = generate(&recipes, &ServingOverrides::new());

    assert_eq!(find(&items, "chicken breast").category, Category::Meat);
    assert_eq!(find(&items, "spinach").category, Category::Produce);
    assert_eq!(find(&items, "salmon").category, Category::Seafood);
    assert_eq!(find(&items, "truffle dust").category, Category::Other);
}

#[test]
fn test_items_follow_first_insertion_order() {
    let recipes = vec![
        Recipe::new(1, "A", 1, ["1 onion", "2 cups milk"]),
        Recipe::new(2, "B", 1, ["1 lemon", "1 Onion", "2 cups milk"]),
    ];

    let items = generate(&recipes, &ServingOverrides::new());

    let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["onion", "milk", "lemon"]);
    assert_eq!(find(&items, "milk").quantity, "4");
    assert_eq!(find(&items, "onion").source_recipe_names, vec!["A", "B"]);
}

#[test]
fn test_repeated_ingredient_in_one_recipe_duplicates_sources() {
    let recipes = vec![Recipe::new(5, "Salad", 1, ["1 tomato", "2 tomato"])];

    let items = generate(&recipes, &ServingOverrides::new());

    assert_eq!(items[0].quantity, "3");
    assert_eq!(items[0].source_recipe_ids, vec![5, 5]);
    assert_eq!(items[0].source_recipe_names, vec!["Salad", "Salad"]);
}

#[test]
fn test_empty_inputs_yield_empty_list() {
    assert!(generate(&[], &ServingOverrides::new()).is_empty());

    let bare = Recipe::new(1, "Water", 1, Vec::<String>::new());
    assert!(generate(&[bare], &ServingOverrides::new()).is_empty());
}

#[test]
fn test_generate_does_not_mutate_recipes() {
    let recipes = vec![Recipe::new(1, "Soup", 2, ["2 cups stock"])];
    let snapshot = recipes.clone();
    let mut overrides = ServingOverrides::new();
    overrides.set(1, 6);

    generate(&recipes, &overrides);

    assert_eq!(recipes, snapshot);
}

#[test]
fn test_regeneration_is_stable_apart_from_ids() {
    let recipes = vec![
        Recipe::new(1, "Tacos", 4, ["1 lb ground beef", "8 tortillas", "1 cup cheddar"]),
        Recipe::new(2, "Nachos", 2, ["1 cup cheddar", "1 bag chips"]),
    ];
    let mut overrides = ServingOverrides::new();
    overrides.set(2, 4);

    let first = generate(&recipes, &overrides);
    let second = generate(&recipes, &overrides);

    let strip = |items: &[GroceryItem]| {
        items
            .iter()
            .map(|i| GroceryItem {
                id: String::new(),
                ..i.clone()
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(strip(&first), strip(&second));
    assert_ne!(first[0].id, second[0].id);
}
