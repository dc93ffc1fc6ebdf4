//! Taste-profile inference over a user's saved recipes.
//!
//! The analyzer is a pure function: the caller fetches the recipes (scoped
//! to one user) and passes them in, so there is no ambient identity state
//! and no I/O here.

use crate::types::{MacroTargets, SavedRecipe, TasteProfile};

/// Cuisine names matched (lower-cased) against recipe names and
/// descriptions.
const CUISINE_VOCABULARY: [&str; 11] = [
    "italian",
    "mexican",
    "chinese",
    "japanese",
    "indian",
    "thai",
    "french",
    "mediterranean",
    "american",
    "korean",
    "middle eastern",
];

/// Dietary restrictions inferred from recipe text. Hyphens are matched as
/// spaces ("gluten-free" matches "gluten free").
const RESTRICTION_VOCABULARY: [&str; 6] = [
    "vegetarian",
    "vegan",
    "gluten-free",
    "dairy-free",
    "low-carb",
    "keto",
];

/// Preparation descriptors stripped from ingredient items before reducing
/// to the head noun phrase.
const PREP_DESCRIPTORS: [&str; 10] = [
    "fresh", "dried", "chopped", "minced", "sliced", "diced", "ground", "whole", "raw", "cooked",
];

/// A restriction is included when strictly more than this fraction of the
/// analysis set matches it.
const RESTRICTION_MATCH_THRESHOLD: f64 = 0.3;

const MAX_FAVORITE_CUISINES: usize = 3;
const MAX_FAVORITE_INGREDIENTS: usize = 10;

/// Derive a [`TasteProfile`] from a user's saved recipes.
///
/// Returns `None` when the user has no saved recipes. When any recipe is
/// loved, only loved recipes are analyzed; otherwise all saved recipes are.
pub fn analyze_recipes(saved: &[SavedRecipe]) -> Option<TasteProfile> {
    if saved.is_empty() {
        return None;
    }

    let loved: Vec<&SavedRecipe> = saved.iter().filter(|r| r.is_loved).collect();
    let analysis_set: Vec<&SavedRecipe> = if loved.is_empty() {
        saved.iter().collect()
    } else {
        loved
    };

    let favorite_cuisines = rank_cuisines(&analysis_set);
    let preferred_difficulty = rank_difficulties(&analysis_set);
    let average_cooking_time = average_total_time(&analysis_set);
    let favorite_ingredients = rank_ingredients(&analysis_set);
    let common_dietary_restrictions = infer_restrictions(&analysis_set);
    let macro_preferences = average_macros(&analysis_set);

    Some(TasteProfile {
        favorite_cuisines,
        common_dietary_restrictions,
        preferred_difficulty,
        average_cooking_time,
        favorite_ingredients,
        macro_preferences,
    })
}

/// Render a taste profile as a deterministic text block for inclusion in a
/// generation prompt. One line per non-empty field, in fixed order; the
/// average-cooking-time line is always present.
pub fn format_taste_profile(profile: &TasteProfile) -> String {
    let mut lines = Vec::new();

    if !profile.favorite_cuisines.is_empty() {
        lines.push(format!(
            "Favorite cuisines: {}",
            profile.favorite_cuisines.join(", ")
        ));
    }

    if !profile.common_dietary_restrictions.is_empty() {
        lines.push(format!(
            "Common dietary preferences: {}",
            profile.common_dietary_restrictions.join(", ")
        ));
    }

    if !profile.preferred_difficulty.is_empty() {
        lines.push(format!(
            "Preferred difficulty levels: {}",
            profile.preferred_difficulty.join(", ")
        ));
    }

    lines.push(format!(
        "Average preferred cooking time: {} minutes",
        profile.average_cooking_time
    ));

    if !profile.favorite_ingredients.is_empty() {
        let top: Vec<&str> = profile
            .favorite_ingredients
            .iter()
            .take(5)
            .map(String::as_str)
            .collect();
        lines.push(format!("Favorite ingredients: {}", top.join(", ")));
    }

    if let Some(macros) = &profile.macro_preferences {
        lines.push(format!(
            "Typical macro preferences: {} cal, {}g protein, {}g carbs, {}g fats",
            macros.calories.unwrap_or(0),
            macros.protein.unwrap_or(0),
            macros.carbs.unwrap_or(0),
            macros.fats.unwrap_or(0),
        ));
    }

    lines.join("\n")
}

/// Lower-cased "name description" text used for keyword matching.
fn search_text(recipe: &SavedRecipe) -> String {
    format!("{} {}", recipe.recipe.name, recipe.recipe.description).to_lowercase()
}

/// Count occurrences in first-encounter order, so the later stable sort
/// breaks ties by first appearance.
fn tally(counts: &mut Vec<(String, usize)>, key: String) {
    match counts.iter_mut().find(|(k, _)| *k == key) {
        Some((_, n)) => *n += 1,
        None => counts.push((key, 1)),
    }
}

fn ranked(mut counts: Vec<(String, usize)>, limit: usize) -> Vec<String> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(limit).map(|(k, _)| k).collect()
}

fn rank_cuisines(analysis_set: &[&SavedRecipe]) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for recipe in analysis_set {
        let text = search_text(recipe);
        for cuisine in CUISINE_VOCABULARY {
            if text.contains(cuisine) {
                tally(&mut counts, cuisine.to_string());
            }
        }
    }

    ranked(counts, MAX_FAVORITE_CUISINES)
        .into_iter()
        .map(|c| capitalize_first(&c))
        .collect()
}

fn rank_difficulties(analysis_set: &[&SavedRecipe]) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for recipe in analysis_set {
        tally(&mut counts, recipe.recipe.difficulty.to_lowercase());
    }

    ranked(counts, usize::MAX)
        .into_iter()
        .map(|d| capitalize_first(&d))
        .collect()
}

fn average_total_time(analysis_set: &[&SavedRecipe]) -> i32 {
    let total: i64 = analysis_set
        .iter()
        .map(|r| i64::from(r.recipe.total_time))
        .sum();
    (total as f64 / analysis_set.len() as f64).round() as i32
}

fn rank_ingredients(analysis_set: &[&SavedRecipe]) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for recipe in analysis_set {
        for ingredient in &recipe.recipe.ingredients {
            if let Some(head) = head_ingredient(&ingredient.item) {
                tally(&mut counts, head);
            }
        }
    }

    ranked(counts, MAX_FAVORITE_INGREDIENTS)
}

/// Reduce an ingredient item to its approximate head noun phrase: strip
/// preparation descriptors as whole words, then keep the last two remaining
/// words. Results of length <= 2 are discarded.
fn head_ingredient(item: &str) -> Option<String> {
    let lowered = item.to_lowercase();
    let words: Vec<&str> = lowered
        .split_whitespace()
        .filter(|w| !PREP_DESCRIPTORS.contains(w))
        .collect();

    let start = words.len().saturating_sub(2);
    let head = words[start..].join(" ");

    if head.len() > 2 {
        Some(head)
    } else {
        None
    }
}

fn infer_restrictions(analysis_set: &[&SavedRecipe]) -> Vec<String> {
    let mut restrictions = Vec::new();

    for restriction in RESTRICTION_VOCABULARY {
        let phrase = restriction.replace('-', " ");
        let matches = analysis_set
            .iter()
            .filter(|r| search_text(r).contains(&phrase))
            .count();

        if matches as f64 / analysis_set.len() as f64 > RESTRICTION_MATCH_THRESHOLD {
            let title_cased: Vec<String> =
                restriction.split('-').map(capitalize_first).collect();
            restrictions.push(title_cased.join("-"));
        }
    }

    restrictions
}

fn average_macros(analysis_set: &[&SavedRecipe]) -> Option<MacroTargets> {
    let with_nutrition: Vec<_> = analysis_set
        .iter()
        .filter_map(|r| r.recipe.nutrition.as_ref())
        .collect();

    if with_nutrition.is_empty() {
        return None;
    }

    let count = with_nutrition.len() as f64;
    let mean = |total: i64| Some((total as f64 / count).round() as i32);

    Some(MacroTargets {
        calories: mean(with_nutrition.iter().map(|n| i64::from(n.calories)).sum()),
        protein: mean(with_nutrition.iter().map(|n| i64::from(n.protein)).sum()),
        carbs: mean(with_nutrition.iter().map(|n| i64::from(n.carbs)).sum()),
        fats: mean(with_nutrition.iter().map(|n| i64::from(n.fats)).sum()),
    })
}

/// Upper-case the first character, leaving the rest untouched.
fn capitalize_first(word: impl AsRef<str>) -> String {
    let word = word.as_ref();
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Ingredient, NutritionInfo, Recipe};
    use chrono::Utc;
    use uuid::Uuid;

    fn saved(name: &str, description: &str, difficulty: &str, total_time: i32) -> SavedRecipe {
        SavedRecipe {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            saved_at: Utc::now(),
            is_loved: false,
            recipe: Recipe {
                name: name.to_string(),
                description: description.to_string(),
                prep_time: 5,
                cook_time: total_time - 5,
                total_time,
                servings: 2,
                difficulty: difficulty.to_string(),
                ingredients: vec![],
                instructions: vec!["Cook.".to_string()],
                tips: None,
                nutrition: None,
            },
        }
    }

    fn ingredient(item: &str) -> Ingredient {
        Ingredient {
            item: item.to_string(),
            amount: "1".to_string(),
            notes: None,
        }
    }

    #[test]
    fn empty_input_yields_no_profile() {
        assert!(analyze_recipes(&[]).is_none());
    }

    #[test]
    fn head_ingredient_strips_descriptors() {
        assert_eq!(head_ingredient("fresh basil"), Some("basil".to_string()));
        assert_eq!(
            head_ingredient("boneless skinless chicken breast"),
            Some("chicken breast".to_string())
        );
        assert_eq!(
            head_ingredient("Ground Beef"),
            Some("beef".to_string())
        );
    }

    #[test]
    fn head_ingredient_discards_short_results() {
        // "diced" strips to nothing
        assert_eq!(head_ingredient("diced"), None);
        assert_eq!(head_ingredient("oz"), None);
    }

    #[test]
    fn cuisine_ties_break_by_first_encounter() {
        let recipes = vec![
            saved("Thai curry", "", "Easy", 30),
            saved("Korean bibimbap", "", "Easy", 30),
        ];
        let profile = analyze_recipes(&recipes).unwrap();
        // Both matched once; "thai" precedes "korean" in encounter order.
        assert_eq!(profile.favorite_cuisines, vec!["Thai", "Korean"]);
    }

    #[test]
    fn difficulty_ranking_is_case_folded_and_title_cased() {
        let recipes = vec![
            saved("A", "", "easy", 30),
            saved("B", "", "EASY", 30),
            saved("C", "", "Medium", 30),
        ];
        let profile = analyze_recipes(&recipes).unwrap();
        assert_eq!(profile.preferred_difficulty, vec!["Easy", "Medium"]);
    }

    #[test]
    fn average_cooking_time_rounds_to_nearest() {
        let recipes = vec![
            saved("A", "", "Easy", 30),
            saved("B", "", "Easy", 45),
        ];
        let profile = analyze_recipes(&recipes).unwrap();
        // 75 / 2 = 37.5 -> 38
        assert_eq!(profile.average_cooking_time, 38);
    }

    #[test]
    fn ingredient_ranking_counts_across_recipes() {
        let mut a = saved("A", "", "Easy", 30);
        a.recipe.ingredients = vec![
            ingredient("fresh garlic cloves"),
            ingredient("chicken thighs"),
        ];
        let mut b = saved("B", "", "Easy", 30);
        b.recipe.ingredients = vec![ingredient("garlic cloves")];

        let profile = analyze_recipes(&[a, b]).unwrap();
        assert_eq!(profile.favorite_ingredients[0], "garlic cloves");
        assert!(profile.favorite_ingredients.len() <= 10);
    }

    #[test]
    fn restriction_requires_strictly_more_than_threshold() {
        // 3 of 10 recipes match: exactly 0.3, excluded.
        let mut recipes: Vec<SavedRecipe> = (0..7).map(|i| saved(&format!("R{i}"), "", "Easy", 30)).collect();
        for i in 0..3 {
            recipes.push(saved(&format!("V{i}"), "A vegan bowl", "Easy", 30));
        }
        let profile = analyze_recipes(&recipes).unwrap();
        assert!(profile.common_dietary_restrictions.is_empty());

        // 4 of 10: strictly above, included.
        recipes.push(saved("V4", "Another vegan bowl", "Easy", 30));
        recipes.remove(0);
        let profile = analyze_recipes(&recipes).unwrap();
        assert_eq!(profile.common_dietary_restrictions, vec!["Vegan"]);
    }

    #[test]
    fn hyphenated_restrictions_match_spaced_text_and_re_hyphenate() {
        let recipes = vec![saved("Bread", "A gluten free loaf", "Easy", 60)];
        let profile = analyze_recipes(&recipes).unwrap();
        assert_eq!(profile.common_dietary_restrictions, vec!["Gluten-Free"]);
    }

    #[test]
    fn macro_preferences_average_only_nutrition_bearing_recipes() {
        let mut a = saved("A", "", "Easy", 30);
        a.recipe.nutrition = Some(NutritionInfo {
            calories: 400,
            protein: 30,
            carbs: 40,
            fats: 10,
            fiber: None,
        });
        let mut b = saved("B", "", "Easy", 30);
        b.recipe.nutrition = Some(NutritionInfo {
            calories: 500,
            protein: 20,
            carbs: 60,
            fats: 20,
            fiber: Some(5),
        });
        let c = saved("C", "", "Easy", 30);

        let profile = analyze_recipes(&[a, b, c]).unwrap();
        let macros = profile.macro_preferences.unwrap();
        assert_eq!(macros.calories, Some(450));
        assert_eq!(macros.protein, Some(25));
        assert_eq!(macros.carbs, Some(50));
        assert_eq!(macros.fats, Some(15));
    }

    #[test]
    fn macro_preferences_absent_without_nutrition_data() {
        let recipes = vec![saved("A", "", "Easy", 30)];
        let profile = analyze_recipes(&recipes).unwrap();
        assert!(profile.macro_preferences.is_none());
    }

    #[test]
    fn formatter_always_emits_average_time_line() {
        let profile = TasteProfile {
            favorite_cuisines: vec![],
            common_dietary_restrictions: vec![],
            preferred_difficulty: vec![],
            average_cooking_time: 42,
            favorite_ingredients: vec![],
            macro_preferences: None,
        };
        assert_eq!(
            format_taste_profile(&profile),
            "Average preferred cooking time: 42 minutes"
        );
    }

    #[test]
    fn formatter_caps_ingredients_at_five() {
        let profile = TasteProfile {
            favorite_cuisines: vec!["Thai".to_string()],
            common_dietary_restrictions: vec![],
            preferred_difficulty: vec![],
            average_cooking_time: 30,
            favorite_ingredients: (0..8).map(|i| format!("ingredient{i}")).collect(),
            macro_preferences: None,
        };
        let text = format_taste_profile(&profile);
        assert!(text.contains("ingredient4"));
        assert!(!text.contains("ingredient5"));
    }
}
