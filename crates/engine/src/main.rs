//! Zbierka Engine - Main entry point.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zbierka_engine::api;
use zbierka_engine::infrastructure::config::EngineConfig;
use zbierka_engine::infrastructure::json_store::JsonCollectionStore;
use zbierka_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine is usually run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zbierka_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Zbierka editor backend");

    let config = EngineConfig::from_env();
    tracing::info!(assets_dir = %config.assets_dir.display(), "Serving collections from assets directory");

    let store = JsonCollectionStore::shared(config.assets_dir.clone());
    let app = Arc::new(App::with_json_store(store));

    let router = api::http::routes()
        .with_state(app)
        .layer(build_cors_layer(config.cors_allowed_origins.as_deref()))
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr()?;
    tracing::info!("Editor backend running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

/// Any origin unless `CORS_ALLOWED_ORIGINS` lists specific ones.
fn build_cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        // The editor sends JSON bodies and If-Match, which trigger CORS preflights.
        .allow_headers([header::CONTENT_TYPE, header::IF_MATCH])
        .expose_headers([header::ETAG]);

    let origins: Vec<HeaderValue> = match allowed_origins {
        None | Some("*") => return cors.allow_origin(Any),
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect(),
    };

    if origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS has no valid origins, allowing any origin");
        return cors.allow_origin(Any);
    }

    cors.allow_origin(origins)
}
