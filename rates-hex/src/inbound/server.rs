//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use rates_types::RateHistoryProvider;

use super::handlers::{self, AppState};
use super::rate_limit::{RateLimiterState, rate_limit_middleware};
use crate::openapi::ApiDoc;
use crate::service::RateService;

/// HTTP Server for the rates API.
pub struct HttpServer<P: RateHistoryProvider> {
    state: Arc<AppState<P>>,
    rate_limiter: Arc<RateLimiterState>,
}

impl<P: RateHistoryProvider> HttpServer<P> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: RateService<P>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            rate_limiter: Arc::new(RateLimiterState::default()), // 100 req/min default
        }
    }

    /// Creates a new HTTP server with custom rate limiting.
    pub fn with_rate_limit(service: RateService<P>, requests_per_minute: u32) -> Self {
        use std::time::Duration;
        Self {
            state: Arc::new(AppState { service }),
            rate_limiter: Arc::new(RateLimiterState::new(
                requests_per_minute,
                Duration::from_secs(60),
            )),
        }
    }

    /// Builds the Axum router with all routes.
    ///
    /// Static segments (`latest`, `history`, `quarter`, `semester`) take
    /// matcher precedence over the `{date_iso}` / `{currency}` captures.
    pub fn router(&self) -> Router {
        let api = Router::new()
            .route("/", get(handlers::index))
            .route("/health", get(handlers::health))
            .route("/rate/latest", get(handlers::latest::<P>))
            .route("/rate/history", get(handlers::history::<P>))
            .route("/rate/latest/diff", get(handlers::latest_diff::<P>))
            .route("/rate/{date_iso}", get(handlers::by_date::<P>))
            .route("/rate/{currency}/quarter", get(handlers::quarter::<P>))
            .route("/rate/{currency}/semester", get(handlers::semester::<P>))
            .route("/rate/{currency}/{date_iso}", get(handlers::rate_for::<P>))
            .with_state(self.state.clone());

        Router::new()
            .merge(api)
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .layer(middleware::from_fn_with_state(
                self.rate_limiter.clone(),
                rate_limit_middleware,
            ))
            // Web and mobile consumers read this API directly
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
