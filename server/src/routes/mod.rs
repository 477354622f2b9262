//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos app with SSR plus the hydration bundle under `/pkg`,
//! and accepts the upload form at `/scan`. The host carries no auth or
//! session logic; the client keeps its session flag in memory for the page
//! lifetime.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod scan;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Routes that do not depend on Leptos options.
fn base_routes() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(
            "/scan",
            post(scan::scan).layer(DefaultBodyLimit::max(scan::MAX_SCAN_UPLOAD_BYTES)),
        )
}

/// Full host router: health check, Leptos SSR routes, static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section and no `LEPTOS_*` env).
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root_path.display(), "serving static assets");

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
