//! HTTP server mode for storefront order lookups

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderValue, Method, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::config::{AppConfig, ServerSettings};
use crate::error::{Error, Result};
use crate::orders::{BulkFilter, BulkProjection, OrderService, Projection};

/// App state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Order queries
    pub orders: OrderService,
    /// Inbound server settings
    pub settings: ServerSettings,
}

impl AppState {
    /// Create app state
    pub fn new(orders: OrderService, settings: ServerSettings) -> Self {
        Self { orders, settings }
    }
}

/// Query string for single-order lookups
#[derive(Debug, Deserialize)]
struct LookupParams {
    #[serde(default)]
    query: Option<String>,
}

/// Query string for bulk listings
#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(default)]
    filter: Option<String>,
}

// Unreadable query strings (e.g. a repeated parameter) reach the handler
// instead of axum's plain-text rejection
type QueryParams<T> = std::result::Result<Query<T>, QueryRejection>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {self}");
        } else {
            warn!("Request rejected: {self}");
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

/// Build the application router
pub fn router(state: AppState) -> Result<Router> {
    let origin = HeaderValue::from_str(&state.settings.allowed_origin).map_err(|e| {
        Error::config(format!(
            "Invalid allowed origin '{}': {e}",
            state.settings.allowed_origin
        ))
    })?;

    let api = Router::new()
        .route("/api/order-tracking", lookup_route(Projection::Tracking))
        .route("/api/order-summary", lookup_route(Projection::Summary))
        .route(
            "/api/admin-orders",
            list_route(BulkProjection::Summary, BulkFilter::Pending),
        )
        .route(
            "/api/admin-orders/raw",
            list_route(BulkProjection::Raw, BulkFilter::All),
        )
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            origin,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ));

    Ok(Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state)))
}

/// Start the HTTP server
pub async fn serve(config: AppConfig) -> Result<()> {
    let orders = OrderService::from_config(config.store.clone())?;
    let settings = config.server.clone();
    let app = router(AppState::new(orders, settings.clone()))?;

    let addr: SocketAddr = format!("{}:{}", settings.bind, settings.port)
        .parse()
        .map_err(|e| Error::config(format!("Invalid listen address: {e}")))?;
    tracing::info!(
        "Starting HTTP server on http://{} (store: {}, auth: {})",
        addr,
        config.store.host,
        config.store.auth.scheme()
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

// GET for the lookup, OPTIONS for preflight, 405 for everything else
fn lookup_route(projection: Projection) -> MethodRouter<Arc<AppState>> {
    get(
        move |State(state): State<Arc<AppState>>, params: QueryParams<LookupParams>| async move {
            lookup_order(&state, params, projection).await
        },
    )
    .head(method_not_allowed)
    .options(preflight)
    .fallback(method_not_allowed)
}

fn list_route(
    projection: BulkProjection,
    default_filter: BulkFilter,
) -> MethodRouter<Arc<AppState>> {
    get(
        move |State(state): State<Arc<AppState>>, params: QueryParams<ListParams>| async move {
            list_orders(&state, params, projection, default_filter).await
        },
    )
    .head(method_not_allowed)
    .options(preflight)
    .fallback(method_not_allowed)
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// CORS preflight: headers only, no body
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed(method: Method) -> Error {
    Error::invalid_method(method.as_str())
}

/// Single-order lookup
async fn lookup_order(
    state: &AppState,
    params: QueryParams<LookupParams>,
    projection: Projection,
) -> Result<Json<Value>> {
    let Query(params) = params.map_err(|rejection| {
        debug!("Unreadable lookup query string: {rejection}");
        Error::missing_parameter("query")
    })?;

    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| Error::missing_parameter("query"))?;

    let order = state.orders.lookup_order(&query, projection).await?;
    Ok(Json(json!({ "order": order })))
}

/// Bulk order listing
async fn list_orders(
    state: &AppState,
    params: QueryParams<ListParams>,
    projection: BulkProjection,
    default_filter: BulkFilter,
) -> Result<Json<Value>> {
    let filter = match params {
        Ok(Query(params)) => BulkFilter::from_param(params.filter.as_deref(), default_filter),
        Err(rejection) => {
            debug!("Unreadable listing query string, using default filter: {rejection}");
            default_filter
        }
    };
    let orders = state.orders.list_orders(filter, projection).await?;
    Ok(Json(json!({ "orders": orders })))
}
