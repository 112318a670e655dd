use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ai_client::{ChatCompletion, OpenAi};
use sigmavendor_catalog::Catalog;
use sigmavendor_common::Config;
use sigmavendor_matcher::{AiMatcher, UnconfiguredModel};

mod rest;

pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: AiMatcher,
}

/// Pick the chat provider: a real OpenAI client when a key is configured,
/// otherwise the canned "not configured" stand-in so the server still
/// answers AI searches in development.
fn build_chat_model(config: &Config) -> Arc<dyn ChatCompletion> {
    if !config.ai_configured() {
        warn!("OPENAI_API_KEY is not set; AI search will return a mock response");
        return Arc::new(UnconfiguredModel);
    }

    let mut provider = OpenAi::new(config.openai_api_key.as_str())
        .with_model(config.openai_model.as_str())
        .with_temperature(0.7)
        .with_json_output();
    if let Some(base_url) = &config.openai_base_url {
        provider = provider.with_base_url(base_url.as_str());
    }
    Arc::new(provider)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sigmavendor=info".parse()?))
        .init();

    let config = Config::from_env();

    let catalog = Arc::new(Catalog::load()?);
    info!(agencies = catalog.len(), "catalog loaded");

    let model = build_chat_model(&config);
    let matcher = AiMatcher::new(model, catalog.clone());

    let state = Arc::new(AppState { catalog, matcher });

    let app = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Directory
        .route("/api/agencies", get(rest::api_agencies))
        .route("/api/agencies/featured", get(rest::api_agencies_featured))
        .route("/api/agencies/{slug}", get(rest::api_agency_detail))
        .route("/api/search", post(rest::api_search))
        // Machine-readable catalog surfaces
        .route("/api/llm/agencies", get(rest::api_llm_agencies))
        .route("/api/schema/agency", get(rest::api_agency_schema))
        // AI search
        .route("/api/ai-search", post(rest::ai_search::api_ai_search))
        // Lead capture
        .route("/api/leads", post(rest::leads::api_leads))
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("SigmaVendor API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
