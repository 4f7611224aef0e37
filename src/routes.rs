//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only serves the compiled client bundle and its assets. With a
//! root base path the bundle is the router fallback; under a subdirectory it
//! is nested at that prefix and `/` redirects there. Missing files return 404
//! so the client's image fallback engages instead of receiving HTML.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::response::Redirect;
use axum::routing::get;
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub base_path: String,
}

pub fn app(config: &HostConfig) -> Router {
    let site = ServeDir::new(&config.site_dir).append_index_html_on_directories(true);
    let health = Health { status: "ok", base_path: config.base.as_str().to_owned() };
    let router = Router::new().route("/healthz", get(healthz)).with_state(health);

    let router = match config.base.mount_point() {
        None => router.fallback_service(site),
        Some(mount) => {
            let target = config.base.as_str().to_owned();
            router
                .route("/", get(move || async move { Redirect::temporary(&target) }))
                .nest_service(mount, site)
        }
    };

    router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

async fn healthz(State(health): State<Health>) -> Json<Health> {
    Json(health)
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
