//! Router assembly: liveness routes plus the four entity route groups.
//!
//! Collection reads use the plural path (`/api/projects`), single-row
//! operations the singular (`/api/project/:id`); BOM uses `/api/bom` for
//! both, mirroring the paths the client already depends on.

use crate::handlers::{bom, materials, panels, projects};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

async fn root() -> &'static str {
    "SMDPRO API is running!"
}

async fn test() -> &'static str {
    "Test route is working!"
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/test", get(test))
        .route("/api/projects", get(projects::list))
        .route("/api/project", post(projects::create))
        .route(
            "/api/project/:id",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route("/api/materials", get(materials::list))
        .route("/api/material", post(materials::create))
        .route(
            "/api/material/:id",
            get(materials::get)
                .put(materials::update)
                .delete(materials::delete),
        )
        .route("/api/bom", get(bom::list).post(bom::create))
        .route(
            "/api/bom/:id",
            get(bom::get).put(bom::update).delete(bom::delete),
        )
        .route("/api/panels", get(panels::list))
        .route("/api/panel", post(panels::create))
        .route(
            "/api/panel/:id",
            get(panels::get).put(panels::update).delete(panels::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
