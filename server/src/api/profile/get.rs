use crate::api::profile::picture_url;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use axum::{http::StatusCode, response::IntoResponse, Json};
use forkful_core::types::UserProfile;

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "The caller's profile", body = UserProfile),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_profile(AuthUser(user): AuthUser) -> impl IntoResponse {
    let profile = UserProfile {
        user_id: user.id,
        email: user.email,
        username: user.username,
        profile_picture_url: user.profile_picture_id.map(picture_url),
        created_at: user.created_at,
        updated_at: user.updated_at,
    };

    (StatusCode::OK, Json(profile)).into_response()
}
