//! Scenario tests for taste-profile inference.

use chrono::Utc;
use forkful_core::types::{Ingredient, Recipe, SavedRecipe};
use forkful_core::{analyze_recipes, format_taste_profile};
use uuid::Uuid;

fn saved_recipe(
    name: &str,
    difficulty: &str,
    total_time: i32,
    is_loved: bool,
    ingredients: &[&str],
) -> SavedRecipe {
    SavedRecipe {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        saved_at: Utc::now(),
        is_loved,
        recipe: Recipe {
            name: name.to_string(),
            description: String::new(),
            prep_time: 10,
            cook_time: total_time - 10,
            total_time,
            servings: 2,
            difficulty: difficulty.to_string(),
            ingredients: ingredients
                .iter()
                .map(|item| Ingredient {
                    item: item.to_string(),
                    amount: "1".to_string(),
                    notes: None,
                })
                .collect(),
            instructions: vec!["Cook.".to_string()],
            tips: None,
            nutrition: None,
        },
    }
}

#[test]
fn loved_recipes_override_the_analysis_set() {
    let recipes = vec![
        saved_recipe(
            "Spicy Thai Basil Chicken",
            "Easy",
            30,
            true,
            &["chicken breast", "fresh basil"],
        ),
        saved_recipe(
            "Classic Italian Pasta",
            "Medium",
            45,
            false,
            &["spaghetti", "parmesan"],
        ),
        saved_recipe(
            "Korean BBQ Bowl",
            "Easy",
            40,
            false,
            &["beef short ribs", "rice"],
        ),
    ];

    let profile = analyze_recipes(&recipes).expect("non-empty input must yield a profile");

    // Only the loved recipe is analyzed: Italian and Korean leave no trace.
    assert_eq!(profile.favorite_cuisines, vec!["Thai"]);
    assert_eq!(profile.average_cooking_time, 30);
    assert_eq!(profile.preferred_difficulty, vec!["Easy"]);
    assert!(profile
        .favorite_ingredients
        .iter()
        .all(|i| !i.contains("spaghetti") && !i.contains("ribs")));
}

#[test]
fn without_loved_recipes_all_saved_recipes_count() {
    let recipes = vec![
        saved_recipe("Spicy Thai Basil Chicken", "Easy", 30, false, &[]),
        saved_recipe("Classic Italian Pasta", "Medium", 45, false, &[]),
        saved_recipe("Korean BBQ Bowl", "Easy", 40, false, &[]),
    ];

    let profile = analyze_recipes(&recipes).unwrap();

    // round((30 + 45 + 40) / 3) = round(38.33) = 38
    assert_eq!(profile.average_cooking_time, 38);
    assert_eq!(profile.preferred_difficulty, vec!["Easy", "Medium"]);
    assert_eq!(profile.favorite_cuisines.len(), 3);
}

#[test]
fn cuisine_list_is_capped_at_three() {
    let recipes = vec![
        saved_recipe("Thai green curry", "Easy", 30, false, &[]),
        saved_recipe("Thai red curry", "Easy", 30, false, &[]),
        saved_recipe("Italian ragu", "Easy", 30, false, &[]),
        saved_recipe("Mexican tacos", "Easy", 30, false, &[]),
        saved_recipe("Korean fried chicken", "Easy", 30, false, &[]),
        saved_recipe("French onion soup", "Easy", 30, false, &[]),
    ];

    let profile = analyze_recipes(&recipes).unwrap();
    assert_eq!(profile.favorite_cuisines.len(), 3);
    // "thai" counted twice, so it ranks first.
    assert_eq!(profile.favorite_cuisines[0], "Thai");
}

#[test]
fn favorite_ingredients_are_capped_at_ten_and_longer_than_two_chars() {
    let many: Vec<String> = (0..15).map(|i| format!("ingredient number{i}")).collect();
    let refs: Vec<&str> = many.iter().map(String::as_str).collect();
    let recipes = vec![saved_recipe("Stew", "Easy", 60, false, &refs)];

    let profile = analyze_recipes(&recipes).unwrap();
    assert_eq!(profile.favorite_ingredients.len(), 10);
    assert!(profile.favorite_ingredients.iter().all(|i| i.len() > 2));
}

#[test]
fn formatted_profile_round_trips_the_scenario() {
    let recipes = vec![saved_recipe(
        "Spicy Thai Basil Chicken",
        "Easy",
        30,
        true,
        &["chicken breast"],
    )];
    let profile = analyze_recipes(&recipes).unwrap();
    let text = format_taste_profile(&profile);

    assert!(text.contains("Favorite cuisines: Thai"));
    assert!(text.contains("Average preferred cooking time: 30 minutes"));
    assert!(text.contains("chicken breast"));
}
