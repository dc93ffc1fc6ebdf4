//! End-to-end generation tests against the fake provider.

use forkful_core::llm::{FakeProvider, FAKE_RECIPE_JSON};
use forkful_core::types::RecipePreferences;
use forkful_core::{generate_recipe, GenerateError};

fn preferences() -> RecipePreferences {
    RecipePreferences {
        cuisine_type: "Mexican".to_string(),
        dietary_restrictions: vec!["Vegetarian".to_string()],
        skill_level: "Beginner".to_string(),
        max_cooking_time: 20,
        servings: 2,
        meal_type: "Dinner".to_string(),
        additional_instructions: "Extra spicy".to_string(),
        macro_targets: None,
        taste_profile: None,
    }
}

#[tokio::test]
async fn generates_a_recipe_from_a_bare_json_response() {
    let provider = FakeProvider::default();
    let recipe = generate_recipe(&provider, &preferences()).await.unwrap();
    assert_eq!(recipe.name, "Garlic Butter Pasta");
    assert_eq!(recipe.difficulty, "Easy");
    assert_eq!(recipe.ingredients.len(), 3);
}

#[tokio::test]
async fn fence_wrapped_response_parses_identically() {
    let fenced = format!("```json\n{}\n```", FAKE_RECIPE_JSON);
    let plain_provider = FakeProvider::default();
    let fenced_provider = FakeProvider::with_response("Mexican", &fenced);

    let plain = generate_recipe(&plain_provider, &preferences()).await.unwrap();
    let from_fence = generate_recipe(&fenced_provider, &preferences())
        .await
        .unwrap();

    assert_eq!(plain, from_fence);
}

#[tokio::test]
async fn prose_response_fails_with_parse_error_carrying_raw_text() {
    let provider = FakeProvider::new()
        .with_default_response("Sorry, I cannot produce a recipe for that.");

    let err = generate_recipe(&provider, &preferences()).await.unwrap_err();
    match &err {
        GenerateError::InvalidRecipe { raw, .. } => {
            assert!(raw.contains("Sorry"));
        }
        other => panic!("expected InvalidRecipe, got {other:?}"),
    }
}

#[tokio::test]
async fn provider_failure_propagates() {
    let provider = FakeProvider::new();
    let err = generate_recipe(&provider, &preferences()).await.unwrap_err();
    assert!(matches!(err, GenerateError::Provider(_)));
}
