//! HTTP server module
//!
//! Routes:
//! - `GET /` health check
//! - `POST /notification` informational notification
//! - `POST /alert` attention-demanding alert

pub mod handlers;
pub mod response;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::application::ports::Notifier;
use crate::application::{DispatchOptions, NotificationDispatcher};
use crate::domain::config::ServiceConfig;
use crate::domain::notification::Severity;

pub use response::{write_json, ApiError, JsonResponse, MessageBody};

/// Largest accepted request body; icons are sent inline as base64
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct ApiState {
    pub app_name: Arc<str>,
    pub dispatcher: Arc<NotificationDispatcher<Box<dyn Notifier>>>,
}

impl ApiState {
    /// Build the state from the resolved config and a notifier
    pub fn new(config: &ServiceConfig, notifier: Box<dyn Notifier>) -> Self {
        let options = DispatchOptions {
            icon_passthrough: config.icon_passthrough,
        };

        Self {
            app_name: Arc::from(config.app_name.as_str()),
            dispatcher: Arc::new(NotificationDispatcher::new(notifier, options)),
        }
    }
}

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("Server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Build the router with its middleware stack
pub fn router(state: ApiState, request_timeout: Duration) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(HandleErrorLayer::new(handlers::middleware_error))
        .timeout(request_timeout);

    Router::new()
        .route("/", get(handlers::health))
        .route(Severity::Notify.route(), post(handlers::send_notification))
        .route(Severity::Alert.route(), post(handlers::send_alert))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware)
        .with_state(state)
}

/// Bind the configured address and serve until `shutdown` resolves
pub async fn serve<F>(
    config: &ServiceConfig,
    notifier: Box<dyn Notifier>,
    shutdown: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| ServeError::Bind {
            address: config.bind_address(),
            source,
        })?;

    let app = router(ApiState::new(config, notifier), config.request_timeout);
    serve_listener(listener, app, shutdown).await
}

/// Serve `app` on an already bound listener
pub async fn serve_listener<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServeError::Serve)
}
