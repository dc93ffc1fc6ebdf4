use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::SavedRecipeRow;
use crate::schema::saved_recipes;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use forkful_core::types::SavedRecipe;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Exact-match filter on the recipe name. Used by clients to check
    /// whether a recipe is already saved.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<SavedRecipe>,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "The user's saved recipes, newest first", body = ListRecipesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_recipes(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let mut query = saved_recipes::table
        .filter(saved_recipes::user_id.eq(user.id))
        .into_boxed();

    if let Some(name) = &params.name {
        query = query.filter(saved_recipes::name.eq(name));
    }

    let rows: Vec<SavedRecipeRow> = match query
        .order(saved_recipes::saved_at.desc())
        .select(SavedRecipeRow::as_select())
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to fetch recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    let recipes = rows
        .into_iter()
        .map(SavedRecipeRow::into_saved_recipe)
        .collect();

    (StatusCode::OK, Json(ListRecipesResponse { recipes })).into_response()
}
