use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::ProfilePicture;
use crate::schema::profile_pictures;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/profile/picture/{id}",
    tag = "profile",
    params(
        ("id" = Uuid, Path, description = "Picture ID")
    ),
    responses(
        (status = 200, description = "Raw picture bytes", content_type = "image/*"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Picture not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_picture(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let picture: ProfilePicture = match profile_pictures::table
        .filter(profile_pictures::id.eq(id))
        .filter(profile_pictures::user_id.eq(user.id))
        .select(ProfilePicture::as_select())
        .first(&mut conn)
    {
        Ok(p) => p,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Picture not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch picture: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch picture".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, picture.content_type)],
        picture.data,
    )
        .into_response()
}
