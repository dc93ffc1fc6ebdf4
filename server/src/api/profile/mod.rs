pub mod get;
pub mod picture;
pub mod taste;
pub mod update;

use crate::pictures::MAX_PICTURE_SIZE;
use crate::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;
use uuid::Uuid;

/// URL a stored profile picture is served from.
pub fn picture_url(id: Uuid) -> String {
    format!("/api/profile/picture/{}", id)
}

/// Returns the router for /api/profile endpoints (mounted at /api/profile)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get::get_profile).put(update::update_profile))
        .route("/taste", get(taste::get_taste_profile))
        .route(
            "/picture",
            post(picture::upload::upload_picture).delete(picture::delete::delete_picture),
        )
        .route("/picture/{id}", get(picture::get::get_picture))
        // Axum's default body limit is below the 5MB picture cap; leave
        // headroom for multipart framing.
        .layer(DefaultBodyLimit::max(MAX_PICTURE_SIZE + 64 * 1024))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        get::get_profile,
        update::update_profile,
        taste::get_taste_profile,
        picture::upload::upload_picture,
        picture::get::get_picture,
        picture::delete::delete_picture,
    ),
    components(schemas(
        update::UpdateProfileRequest,
        picture::upload::UploadPictureRequest,
        picture::upload::UploadPictureResponse,
    ))
)]
pub struct ApiDoc;
