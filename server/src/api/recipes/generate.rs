use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use forkful_core::types::{Recipe, RecipePreferences};
use forkful_core::{GenerateError, LlmError};

#[utoipa::path(
    post,
    path = "/api/recipes/generate",
    tag = "recipes",
    request_body = RecipePreferences,
    responses(
        (status = 200, description = "Generated recipe", body = Recipe),
        (status = 400, description = "Invalid preferences", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Response could not be parsed", body = ErrorResponse),
        (status = 502, description = "Generation service failed", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn generate_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(preferences): Json<RecipePreferences>,
) -> impl IntoResponse {
    if preferences.servings < 1 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Servings must be at least 1".to_string(),
            }),
        )
            .into_response();
    }

    if preferences.max_cooking_time < 1 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Maximum cooking time must be at least 1 minute".to_string(),
            }),
        )
            .into_response();
    }

    match forkful_core::generate_recipe(state.llm.as_ref(), &preferences).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(GenerateError::Provider(e)) => {
            tracing::error!(user_id = %user.id, error = %e, "recipe generation failed");
            let status = match e {
                LlmError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            };
            (
                status,
                Json(ErrorResponse {
                    error: "Failed to generate recipe".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            // Raw model text is logged for diagnosis, never returned.
            tracing::error!(
                user_id = %user.id,
                error = %e,
                raw = e.raw_response().unwrap_or_default(),
                "failed to parse generated recipe"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to parse recipe data".to_string(),
                }),
            )
                .into_response()
        }
    }
}
