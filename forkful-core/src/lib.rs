pub mod generate;
pub mod llm;
pub mod taste;
pub mod types;

pub use generate::{
    extract_json_payload, generate_recipe, parse_recipe_response, render_generation_prompt,
    GenerateError, GENERATION_MAX_TOKENS,
};
pub use llm::{create_provider_from_env, ClaudeProvider, FakeProvider, LlmError, LlmProvider};
pub use taste::{analyze_recipes, format_taste_profile};
pub use types::{
    Ingredient, MacroTargets, NutritionInfo, Recipe, RecipePreferences, SavedRecipe, TasteProfile,
    UserProfile,
};
