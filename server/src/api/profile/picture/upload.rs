use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewProfilePicture;
use crate::pictures::{validate_picture, MAX_PICTURE_SIZE};
use crate::schema::{profile_pictures, users};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadPictureResponse {
    pub id: Uuid,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadPictureRequest {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/profile/picture",
    tag = "profile",
    request_body(content_type = "multipart/form-data", content = UploadPictureRequest),
    responses(
        (status = 201, description = "Picture uploaded successfully", body = UploadPictureResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_picture(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    // Get the file from multipart
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file provided".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Multipart read error: {}", e);
            let error_msg = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                "File too large. Maximum size is 5MB".to_string()
            } else {
                format!("Failed to read multipart data: {}", e.body_text())
            };
            return (e.status(), Json(ErrorResponse { error: error_msg })).into_response();
        }
    };

    // Read file data
    let data = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Field read error: {}", e);
            let error_msg = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                "File too large. Maximum size is 5MB".to_string()
            } else {
                format!("Failed to read file data: {}", e.body_text())
            };
            return (e.status(), Json(ErrorResponse { error: error_msg })).into_response();
        }
    };

    // Check file size
    if data.len() > MAX_PICTURE_SIZE {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("File too large. Maximum size is {} bytes", MAX_PICTURE_SIZE),
            }),
        )
            .into_response();
    }

    // Sniff the content type from the bytes and validate the format
    let content_type = match validate_picture(&data) {
        Ok(ct) => ct,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response()
        }
    };

    let mut conn = get_conn!(pool);

    // Insert the new picture, point the user at it, and drop the previous
    // one in a single transaction.
    let result: Result<Uuid, diesel::result::Error> = conn.transaction(|conn| {
        let new_picture = NewProfilePicture {
            user_id: user.id,
            content_type: &content_type,
            data: &data,
        };

        let picture_id: Uuid = diesel::insert_into(profile_pictures::table)
            .values(&new_picture)
            .returning(profile_pictures::id)
            .get_result(conn)?;

        diesel::update(users::table.find(user.id))
            .set(users::profile_picture_id.eq(Some(picture_id)))
            .execute(conn)?;

        if let Some(old_id) = user.profile_picture_id {
            diesel::delete(profile_pictures::table.find(old_id)).execute(conn)?;
        }

        Ok(picture_id)
    });

    match result {
        Ok(picture_id) => (
            StatusCode::CREATED,
            Json(UploadPictureResponse { id: picture_id }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to save profile picture: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to save profile picture".to_string(),
                }),
            )
                .into_response()
        }
    }
}
