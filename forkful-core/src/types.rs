//! Wire types shared by the generation gateway, the taste-profile analyzer,
//! and the HTTP API. Everything serializes as camelCase JSON: these shapes
//! are the external contract, and the model is instructed to emit exactly
//! this format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Per-serving nutritional goals. All fields optional; an absent field
/// means "no target".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MacroTargets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fats: Option<i32>,
}

impl MacroTargets {
    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein.is_none()
            && self.carbs.is_none()
            && self.fats.is_none()
    }
}

/// Preference summary derived from a user's saved recipes.
///
/// Recomputed on demand by the analyzer; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TasteProfile {
    /// Top cuisines by mention count, title-cased, at most 3.
    pub favorite_cuisines: Vec<String>,
    pub common_dietary_restrictions: Vec<String>,
    /// All observed difficulty values, ranked by frequency.
    pub preferred_difficulty: Vec<String>,
    /// Rounded mean of totalTime across the analysis set, in minutes.
    pub average_cooking_time: i32,
    /// Top ingredient head nouns by count, at most 10.
    pub favorite_ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_preferences: Option<MacroTargets>,
}

/// Structured user input driving a single generation call.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipePreferences {
    pub cuisine_type: String,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    pub skill_level: String,
    /// Minutes.
    pub max_cooking_time: i32,
    pub servings: i32,
    pub meal_type: String,
    #[serde(default)]
    pub additional_instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_targets: Option<MacroTargets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taste_profile: Option<TasteProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionInfo {
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fats: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub item: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One generated recipe. Immutable after generation except for save-time
/// metadata (see [`SavedRecipe`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub description: String,
    /// Minutes.
    pub prep_time: i32,
    /// Minutes.
    pub cook_time: i32,
    /// Minutes.
    pub total_time: i32,
    pub servings: i32,
    /// "Easy" | "Medium" | "Hard".
    pub difficulty: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionInfo>,
}

/// A recipe a user chose to keep, plus the store-assigned metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub is_loved: bool,
    #[serde(flatten)]
    pub recipe: Recipe,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: Uuid,
    pub email: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_json_uses_camel_case() {
        let recipe = Recipe {
            name: "Test".to_string(),
            description: "A test".to_string(),
            prep_time: 5,
            cook_time: 10,
            total_time: 15,
            servings: 2,
            difficulty: "Easy".to_string(),
            ingredients: vec![],
            instructions: vec![],
            tips: None,
            nutrition: None,
        };

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["prepTime"], 5);
        assert_eq!(json["totalTime"], 15);
        assert!(json.get("tips").is_none());
    }

    #[test]
    fn saved_recipe_flattens_recipe_fields() {
        let json = serde_json::json!({
            "id": "8c2df3e5-95ab-4a0a-9c8b-7a25cfa07708",
            "userId": "1f6ea6a0-43dd-45a1-b7a9-8f4c1a3d9b11",
            "savedAt": "2026-01-05T12:00:00Z",
            "isLoved": true,
            "name": "Soup",
            "description": "Warm",
            "prepTime": 5,
            "cookTime": 20,
            "totalTime": 25,
            "servings": 4,
            "difficulty": "Easy",
            "ingredients": [],
            "instructions": []
        });

        let saved: SavedRecipe = serde_json::from_value(json).unwrap();
        assert!(saved.is_loved);
        assert_eq!(saved.recipe.name, "Soup");
        assert_eq!(saved.recipe.total_time, 25);
    }

    #[test]
    fn macro_targets_default_is_empty() {
        assert!(MacroTargets::default().is_empty());
        let targets = MacroTargets {
            protein: Some(30),
            ..MacroTargets::default()
        };
        assert!(!targets.is_empty());
    }
}
