//! Recipe generation: prompt rendering and response parsing.
//!
//! The generation contract is strict: the model is instructed to answer
//! with a single JSON object matching [`Recipe`], and the response is
//! parsed after stripping an optional markdown code fence. One call per
//! invocation; failures surface as [`GenerateError`].

use thiserror::Error;

use crate::llm::{LlmError, LlmProvider};
use crate::taste::format_taste_profile;
use crate::types::{Recipe, RecipePreferences};

/// Completion-token budget for a single generation call.
pub const GENERATION_MAX_TOKENS: u32 = 4000;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Provider(#[from] LlmError),

    /// The response text could not be reduced to a single JSON payload.
    #[error("ambiguous model response: {reason}")]
    AmbiguousPayload { reason: String, raw: String },

    /// The JSON payload did not deserialize into a recipe.
    #[error("invalid recipe payload: {source}")]
    InvalidRecipe {
        source: serde_json::Error,
        raw: String,
    },
}

impl GenerateError {
    /// The raw model text, for diagnostic logging. Never shown to end
    /// users.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            GenerateError::Provider(_) => None,
            GenerateError::AmbiguousPayload { raw, .. } => Some(raw),
            GenerateError::InvalidRecipe { raw, .. } => Some(raw),
        }
    }
}

/// Generate one recipe from the given preferences.
pub async fn generate_recipe(
    provider: &dyn LlmProvider,
    preferences: &RecipePreferences,
) -> Result<Recipe, GenerateError> {
    let prompt = render_generation_prompt(preferences);

    tracing::debug!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        "requesting recipe generation"
    );

    let text = provider.complete(&prompt, GENERATION_MAX_TOKENS).await?;
    parse_recipe_response(&text)
}

/// Render the natural-language generation prompt. Every preference field is
/// embedded; the optional macro targets and taste profile append extra
/// guidance blocks.
pub fn render_generation_prompt(preferences: &RecipePreferences) -> String {
    let restrictions = if preferences.dietary_restrictions.is_empty() {
        "None".to_string()
    } else {
        preferences.dietary_restrictions.join(", ")
    };

    let mut prompt = format!(
        "Generate a complete recipe based on these preferences:\n\
         Cuisine Type: {}\n\
         Dietary Restrictions: {}\n\
         Skill Level: {}\n\
         Maximum Cooking Time: {} minutes\n\
         Servings: {}\n\
         Meal Type: {}\n\
         Additional Instructions: {}\n",
        preferences.cuisine_type,
        restrictions,
        preferences.skill_level,
        preferences.max_cooking_time,
        preferences.servings,
        preferences.meal_type,
        preferences.additional_instructions,
    );

    if let Some(targets) = preferences.macro_targets.as_ref().filter(|t| !t.is_empty()) {
        prompt.push_str("\nTarget macros per serving:\n");
        if let Some(calories) = targets.calories {
            prompt.push_str(&format!("Calories: {} kcal\n", calories));
        }
        if let Some(protein) = targets.protein {
            prompt.push_str(&format!("Protein: {}g\n", protein));
        }
        if let Some(carbs) = targets.carbs {
            prompt.push_str(&format!("Carbs: {}g\n", carbs));
        }
        if let Some(fats) = targets.fats {
            prompt.push_str(&format!("Fats: {}g\n", fats));
        }
    }

    if let Some(profile) = &preferences.taste_profile {
        prompt.push_str(
            "\nThe user's taste profile, inferred from recipes they have saved:\n",
        );
        prompt.push_str(&format_taste_profile(profile));
        prompt.push_str(
            "\nBias the recipe toward these preferences where they do not conflict \
             with the explicit criteria above.\n",
        );
    }

    prompt.push_str(
        r#"
Please create an original, detailed recipe that matches ALL of these criteria.

IMPORTANT: You must respond with ONLY a valid JSON object in this exact format. Do not include any text, explanations, or markdown formatting outside the JSON structure:

{
  "name": "Recipe Name",
  "description": "Brief description of the dish (2-3 sentences)",
  "prepTime": number (in minutes),
  "cookTime": number (in minutes),
  "totalTime": number (in minutes),
  "servings": number,
  "difficulty": "Easy" | "Medium" | "Hard",
  "ingredients": [
    {
      "item": "ingredient name",
      "amount": "quantity and unit",
      "notes": "optional preparation notes"
    }
  ],
  "instructions": [
    "Step 1 description",
    "Step 2 description"
  ],
  "tips": [
    "Optional cooking tip 1",
    "Optional cooking tip 2"
  ],
  "nutrition": {
    "calories": number (per serving),
    "protein": number (grams),
    "carbs": number (grams),
    "fats": number (grams)
  }
}

DO NOT include markdown code blocks or any text outside the JSON object. Your entire response must be valid JSON only."#,
    );

    prompt
}

/// Parse model text into a [`Recipe`], stripping an optional markdown code
/// fence first.
pub fn parse_recipe_response(raw: &str) -> Result<Recipe, GenerateError> {
    let payload = extract_json_payload(raw)?;
    serde_json::from_str(payload).map_err(|source| GenerateError::InvalidRecipe {
        source,
        raw: raw.to_string(),
    })
}

/// Extract the JSON payload from a model response.
///
/// Models occasionally wrap the payload in a ```json fence despite the
/// instructions. Accepted inputs: bare JSON, or a single fence (```json or
/// ```) wrapping the whole payload. Anything else - text outside the fence,
/// or a fence inside the payload - is ambiguous and rejected.
pub fn extract_json_payload(raw: &str) -> Result<&str, GenerateError> {
    let trimmed = raw.trim();

    if !trimmed.contains("```") {
        return Ok(trimmed);
    }

    let ambiguous = |reason: &str| GenerateError::AmbiguousPayload {
        reason: reason.to_string(),
        raw: raw.to_string(),
    };

    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .ok_or_else(|| ambiguous("code fence is not at the start of the response"))?;

    let body = body
        .strip_suffix("```")
        .ok_or_else(|| ambiguous("code fence is not closed at the end of the response"))?;

    if body.contains("```") {
        return Err(ambiguous("multiple code fences in the response"));
    }

    Ok(body.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MacroTargets;

    fn preferences() -> RecipePreferences {
        RecipePreferences {
            cuisine_type: "Mexican".to_string(),
            dietary_restrictions: vec![],
            skill_level: "Beginner".to_string(),
            max_cooking_time: 20,
            servings: 2,
            meal_type: "Dinner".to_string(),
            additional_instructions: String::new(),
            macro_targets: None,
            taste_profile: None,
        }
    }

    #[test]
    fn prompt_embeds_cuisine_and_time() {
        let prompt = render_generation_prompt(&preferences());
        assert!(prompt.contains("Mexican"));
        assert!(prompt.contains("20 minutes"));
        assert!(prompt.contains("Servings: 2"));
    }

    #[test]
    fn prompt_renders_empty_restrictions_as_none() {
        let prompt = render_generation_prompt(&preferences());
        assert!(prompt.contains("Dietary Restrictions: None"));

        let mut prefs = preferences();
        prefs.dietary_restrictions = vec!["Vegan".to_string(), "Gluten-Free".to_string()];
        let prompt = render_generation_prompt(&prefs);
        assert!(prompt.contains("Dietary Restrictions: Vegan, Gluten-Free"));
    }

    #[test]
    fn prompt_includes_macro_targets_when_set() {
        let mut prefs = preferences();
        prefs.macro_targets = Some(MacroTargets {
            calories: Some(600),
            protein: Some(40),
            carbs: None,
            fats: None,
        });
        let prompt = render_generation_prompt(&prefs);
        assert!(prompt.contains("Calories: 600 kcal"));
        assert!(prompt.contains("Protein: 40g"));
        assert!(!prompt.contains("Carbs:"));
    }

    #[test]
    fn extract_passes_bare_json_through() {
        assert_eq!(extract_json_payload(r#"{"a": 1}"#).unwrap(), r#"{"a": 1}"#);
        assert_eq!(
            extract_json_payload("  {\"a\": 1}\n").unwrap(),
            r#"{"a": 1}"#
        );
    }

    #[test]
    fn extract_strips_json_fence() {
        let fenced = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json_payload(fenced).unwrap(), r#"{"a": 1}"#);

        let bare_fence = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json_payload(bare_fence).unwrap(), r#"{"a": 1}"#);
    }

    #[test]
    fn extract_rejects_text_outside_fence() {
        let raw = "Here is your recipe:\n```json\n{\"a\": 1}\n```";
        assert!(matches!(
            extract_json_payload(raw),
            Err(GenerateError::AmbiguousPayload { .. })
        ));
    }

    #[test]
    fn extract_rejects_interior_fences() {
        let raw = "```json\n{\"a\": 1}\n```\n```json\n{\"b\": 2}\n```";
        assert!(matches!(
            extract_json_payload(raw),
            Err(GenerateError::AmbiguousPayload { .. })
        ));
    }

    #[test]
    fn fenced_and_bare_payloads_parse_identically() {
        let bare = crate::llm::FAKE_RECIPE_JSON;
        let fenced = format!("```json\n{}\n```", bare);

        let from_bare = parse_recipe_response(bare).unwrap();
        let from_fenced = parse_recipe_response(&fenced).unwrap();
        assert_eq!(from_bare, from_fenced);
    }

    #[test]
    fn invalid_payload_carries_raw_text_for_logging() {
        let err = parse_recipe_response("not even json").unwrap_err();
        assert_eq!(err.raw_response(), Some("not even json"));
    }
}
