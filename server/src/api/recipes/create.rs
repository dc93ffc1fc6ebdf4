use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewSavedRecipe;
use crate::schema::saved_recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use forkful_core::types::Recipe;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SaveRecipeResponse {
    pub id: Uuid,
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = Recipe,
    responses(
        (status = 201, description = "Recipe saved successfully", body = SaveRecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn save_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(recipe): Json<Recipe>,
) -> impl IntoResponse {
    if recipe.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Recipe name cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    if recipe.instructions.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Recipe must have at least one instruction".to_string(),
            }),
        )
            .into_response();
    }

    let ingredients = match serde_json::to_value(&recipe.ingredients) {
        Ok(v) => v,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid ingredients format".to_string(),
                }),
            )
                .into_response()
        }
    };
    let instructions = match serde_json::to_value(&recipe.instructions) {
        Ok(v) => v,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid instructions format".to_string(),
                }),
            )
                .into_response()
        }
    };

    let mut conn = get_conn!(pool);

    let new_recipe = NewSavedRecipe {
        user_id: user.id,
        name: recipe.name.trim(),
        description: &recipe.description,
        prep_time: recipe.prep_time,
        cook_time: recipe.cook_time,
        total_time: recipe.total_time,
        servings: recipe.servings,
        difficulty: &recipe.difficulty,
        ingredients,
        instructions,
        tips: recipe
            .tips
            .as_ref()
            .and_then(|t| serde_json::to_value(t).ok()),
        nutrition: recipe
            .nutrition
            .as_ref()
            .and_then(|n| serde_json::to_value(n).ok()),
    };

    let recipe_id: Uuid = match diesel::insert_into(saved_recipes::table)
        .values(&new_recipe)
        .returning(saved_recipes::id)
        .get_result(&mut conn)
    {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to save recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to save recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::CREATED, Json(SaveRecipeResponse { id: recipe_id })).into_response()
}
