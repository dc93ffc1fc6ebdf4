use chrono::{DateTime, Utc};
use diesel::prelude::*;
use forkful_core::types::{Recipe, SavedRecipe};
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub profile_picture_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession<'a> {
    pub user_id: Uuid,
    pub token_hash: &'a str,
    pub expires_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::profile_pictures)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProfilePicture {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_type: String,
    pub data: Vec<u8>,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::profile_pictures)]
pub struct NewProfilePicture<'a> {
    pub user_id: Uuid,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

/// One saved recipe as stored. Scalar recipe fields are columns; nested
/// sequences (ingredients, instructions, tips, nutrition) live in JSONB.
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::saved_recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SavedRecipeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub prep_time: i32,
    pub cook_time: i32,
    pub total_time: i32,
    pub servings: i32,
    pub difficulty: String,
    pub ingredients: serde_json::Value,
    pub instructions: serde_json::Value,
    pub tips: Option<serde_json::Value>,
    pub nutrition: Option<serde_json::Value>,
    pub is_loved: bool,
    pub saved_at: DateTime<Utc>,
}

impl SavedRecipeRow {
    /// Reassemble the wire-shaped [`SavedRecipe`]. JSONB columns written by
    /// this server always deserialize; anything unreadable degrades to
    /// empty rather than failing the whole request.
    pub fn into_saved_recipe(self) -> SavedRecipe {
        SavedRecipe {
            id: self.id,
            user_id: self.user_id,
            saved_at: self.saved_at,
            is_loved: self.is_loved,
            recipe: Recipe {
                name: self.name,
                description: self.description,
                prep_time: self.prep_time,
                cook_time: self.cook_time,
                total_time: self.total_time,
                servings: self.servings,
                difficulty: self.difficulty,
                ingredients: serde_json::from_value(self.ingredients).unwrap_or_default(),
                instructions: serde_json::from_value(self.instructions).unwrap_or_default(),
                tips: self.tips.and_then(|v| serde_json::from_value(v).ok()),
                nutrition: self.nutrition.and_then(|v| serde_json::from_value(v).ok()),
            },
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::saved_recipes)]
pub struct NewSavedRecipe<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub description: &'a str,
    pub prep_time: i32,
    pub cook_time: i32,
    pub total_time: i32,
    pub servings: i32,
    pub difficulty: &'a str,
    pub ingredients: serde_json::Value,
    pub instructions: serde_json::Value,
    pub tips: Option<serde_json::Value>,
    pub nutrition: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_round_trips_nested_recipe_fields() {
        let row = SavedRecipeRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Miso Soup".to_string(),
            description: "Light Japanese starter".to_string(),
            prep_time: 5,
            cook_time: 10,
            total_time: 15,
            servings: 2,
            difficulty: "Easy".to_string(),
            ingredients: json!([{"item": "miso paste", "amount": "2 tbsp"}]),
            instructions: json!(["Whisk miso into hot dashi."]),
            tips: Some(json!(["Do not boil after adding miso."])),
            nutrition: None,
            is_loved: true,
            saved_at: Utc::now(),
        };

        let saved = row.into_saved_recipe();
        assert!(saved.is_loved);
        assert_eq!(saved.recipe.ingredients.len(), 1);
        assert_eq!(saved.recipe.ingredients[0].item, "miso paste");
        assert_eq!(saved.recipe.instructions.len(), 1);
        assert_eq!(saved.recipe.tips.map(|t| t.len()), Some(1));
        assert!(saved.recipe.nutrition.is_none());
    }

    #[test]
    fn unreadable_jsonb_degrades_to_empty() {
        let row = SavedRecipeRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "X".to_string(),
            description: String::new(),
            prep_time: 0,
            cook_time: 0,
            total_time: 0,
            servings: 1,
            difficulty: "Easy".to_string(),
            ingredients: json!({"not": "a list"}),
            instructions: json!(42),
            tips: Some(json!("not a list")),
            nutrition: Some(json!([])),
            is_loved: false,
            saved_at: Utc::now(),
        };

        let saved = row.into_saved_recipe();
        assert!(saved.recipe.ingredients.is_empty());
        assert!(saved.recipe.instructions.is_empty());
        assert!(saved.recipe.tips.is_none());
        assert!(saved.recipe.nutrition.is_none());
    }
}
