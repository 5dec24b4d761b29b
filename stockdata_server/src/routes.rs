//! Route table and handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use stockdata_api::types::DailyQuote;
use stockdata_api::{Client, HistoryQuery};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ProxyError;

/// Path of the quotes endpoint.
pub const STOCK_ROUTE: &str = "/nvidia-stock";

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    client: Client,
    query: Arc<HistoryQuery>,
}

impl AppState {
    pub fn new(client: Client, query: HistoryQuery) -> Self {
        Self {
            client,
            query: Arc::new(query),
        }
    }

    pub fn query(&self) -> &HistoryQuery {
        &self.query
    }
}

/// Builds the router: the quotes route, permissive CORS, and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(STOCK_ROUTE, get(get_historical_quotes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fetches the configured history upstream and returns it as a JSON array.
async fn get_historical_quotes(
    State(state): State<AppState>,
) -> Result<Json<Vec<DailyQuote>>, ProxyError> {
    let quotes = state.client.get_history(state.query()).await?;
    tracing::info!(symbol = %state.query().symbol, rows = quotes.len(), "served history");
    Ok(Json(quotes))
}
