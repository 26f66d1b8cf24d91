// Axum server for the research guide
//
// Serves the landing page, one page per registry step, a JSON listing of the
// steps and a health check. Rendered pages are cached per route; rendering is
// deterministic so a cached page equals a fresh render.

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use moka::future::Cache;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::Config;
use crate::error::RenderError;
use crate::pages::{render_not_found, render_route};
use crate::registry::{StepRecord, StepRegistry};
use crate::site::LANDING_ROUTE;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<StepRegistry>,
    /// Rendered HTML keyed by route.
    pub pages: Cache<String, String>,
}

impl AppState {
    pub fn new(registry: StepRegistry, config: &Config) -> Self {
        tracing::info!(
            "Initializing page cache (capacity {}, ttl {:?})",
            config.page_cache_capacity,
            config.page_cache_ttl
        );
        let pages = Cache::builder()
            .max_capacity(config.page_cache_capacity)
            .time_to_live(config.page_cache_ttl)
            .build();

        Self {
            registry: Arc::new(registry),
            pages,
        }
    }

    /// Cached render of `route`.
    pub async fn page(&self, route: &str) -> Result<String, RenderError> {
        if let Some(cached) = self.pages.get(route).await {
            tracing::debug!("Cache hit for {}", route);
            return Ok(cached);
        }

        let html = render_route(&self.registry, route)?;
        self.pages.insert(route.to_string(), html.clone()).await;
        Ok(html)
    }

    fn not_found(&self, requested: &str) -> PageError {
        match render_not_found(&self.registry, Some(requested)) {
            Ok(body) => PageError::NotFound(body),
            Err(e) => PageError::Render(e),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/health", get(health_check))
        .route("/api/steps", get(list_steps))
        .route("/:slug", get(step_page))
        .fallback(fallback)
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn home_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    Ok(Html(state.page(LANDING_ROUTE).await?))
}

async fn step_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, PageError> {
    let route = format!("/{}", slug);
    match state.page(&route).await {
        Ok(html) => Ok(Html(html)),
        Err(e) if e.is_not_found() => {
            tracing::debug!("No step page for {}", route);
            Err(state.not_found(&route))
        }
        Err(e) => Err(e.into()),
    }
}

async fn list_steps(State(state): State<AppState>) -> Json<Vec<StepRecord>> {
    Json(state.registry.all_steps().to_vec())
}

async fn fallback(State(state): State<AppState>, uri: Uri) -> PageError {
    state.not_found(uri.path())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum PageError {
    /// Rendered not-found page.
    NotFound(String),
    Render(RenderError),
}

impl From<RenderError> for PageError {
    fn from(err: RenderError) -> Self {
        PageError::Render(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> axum::response::Response {
        match self {
            PageError::NotFound(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
            PageError::Render(err) => {
                tracing::error!("Page render failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Pagina kon niet worden opgebouwd").into_response()
            }
        }
    }
}
