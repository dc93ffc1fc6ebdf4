use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::{profile_pictures, users};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    delete,
    path = "/api/profile/picture",
    tag = "profile",
    responses(
        (status = 204, description = "Picture removed"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No picture to remove", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_picture(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let picture_id = match user.profile_picture_id {
        Some(id) => id,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "No picture to remove".to_string(),
                }),
            )
                .into_response()
        }
    };

    let mut conn = get_conn!(pool);

    let result: Result<(), diesel::result::Error> = conn.transaction(|conn| {
        diesel::update(users::table.find(user.id))
            .set(users::profile_picture_id.eq(None::<uuid::Uuid>))
            .execute(conn)?;
        diesel::delete(profile_pictures::table.find(picture_id)).execute(conn)?;
        Ok(())
    });

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to remove profile picture: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to remove profile picture".to_string(),
                }),
            )
                .into_response()
        }
    }
}
