pub mod create;
pub mod delete;
pub mod generate;
pub mod get;
pub mod list;
pub mod loved;

use crate::AppState;
use axum::routing::{get, post, put};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::save_recipe))
        .route("/generate", post(generate::generate_recipe))
        .route(
            "/{id}",
            get(get::get_recipe).delete(delete::delete_recipe),
        )
        .route("/{id}/loved", put(loved::set_loved))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        generate::generate_recipe,
        create::save_recipe,
        list::list_recipes,
        get::get_recipe,
        delete::delete_recipe,
        loved::set_loved,
    ),
    components(schemas(
        create::SaveRecipeResponse,
        list::ListRecipesResponse,
        loved::SetLovedRequest,
    ))
)]
pub struct ApiDoc;
