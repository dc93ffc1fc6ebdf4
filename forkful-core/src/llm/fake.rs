//! Fake LLM provider for testing.
//!
//! Returns deterministic responses based on prompt matching, so tests run
//! without network access or API costs.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A fake LLM provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring. If no match is found, returns a default response or error.
#[derive(Debug)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
}

/// A complete, schema-conforming recipe payload used as the default fake
/// response.
pub const FAKE_RECIPE_JSON: &str = r#"{
  "name": "Garlic Butter Pasta",
  "description": "A quick weeknight pasta tossed in garlic butter. Comes together in one pan.",
  "prepTime": 10,
  "cookTime": 15,
  "totalTime": 25,
  "servings": 2,
  "difficulty": "Easy",
  "ingredients": [
    {"item": "spaghetti", "amount": "200g"},
    {"item": "garlic cloves", "amount": "4", "notes": "thinly sliced"},
    {"item": "butter", "amount": "3 tbsp"}
  ],
  "instructions": [
    "Cook the spaghetti in salted water until al dente.",
    "Melt the butter and soften the garlic over low heat.",
    "Toss the drained pasta in the garlic butter and serve."
  ],
  "tips": ["Reserve a cup of pasta water to loosen the sauce."]
}"#;

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some(FAKE_RECIPE_JSON.to_string()),
        }
    }
}

#[allow(dead_code)]
impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
        }
    }

    /// Create a FakeProvider that returns a specific response for prompts
    /// containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str, _max_tokens: u32) -> Result<String, LlmError> {
        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        // Return default or error
        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                &prompt[..prompt.len().min(100)]
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_provider_matching() {
        let provider = FakeProvider::with_response("hello", "world");
        let result = provider.complete("Say hello to the user", 64).await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_provider_case_insensitive() {
        let provider = FakeProvider::with_response("HELLO", "world");
        let result = provider.complete("hello there", 64).await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_provider_no_match() {
        let provider = FakeProvider::new();
        let result = provider.complete("random prompt", 64).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_default_response_is_valid_recipe_json() {
        let provider = FakeProvider::default();
        let result = provider.complete("anything", 64).await.unwrap();
        let recipe: crate::types::Recipe = serde_json::from_str(&result).unwrap();
        assert_eq!(recipe.total_time, 25);
    }
}
