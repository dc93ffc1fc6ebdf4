use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::SavedRecipeRow;
use crate::schema::saved_recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use forkful_core::analyze_recipes;
use forkful_core::types::{SavedRecipe, TasteProfile};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/profile/taste",
    tag = "profile",
    responses(
        (status = 200, description = "Taste profile derived from the caller's saved recipes", body = TasteProfile),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No saved recipes to analyze", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_taste_profile(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let rows: Vec<SavedRecipeRow> = match saved_recipes::table
        .filter(saved_recipes::user_id.eq(user.id))
        .order(saved_recipes::saved_at.desc())
        .select(SavedRecipeRow::as_select())
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to fetch recipes for analysis: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    let saved: Vec<SavedRecipe> = rows
        .into_iter()
        .map(SavedRecipeRow::into_saved_recipe)
        .collect();

    match analyze_recipes(&saved) {
        Some(profile) => (StatusCode::OK, Json(profile)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No saved recipes to analyze".to_string(),
            }),
        )
            .into_response(),
    }
}
