//! Web server for the apartment listing API
//!
//! Provides REST endpoints for complex search, raw sale listings, and the
//! per-complex price analysis.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::analysis::{
    annotate_articles, compute_area_stats, find_bargains, DEFAULT_BARGAIN_THRESHOLD,
};
use crate::complex_map::{ComplexEntry, ComplexMap};
use crate::models::{AreaStat, Bargain, ParsedArticle};
use crate::naver::fetch_articles_with_fallback;

/// Shared application state (read-only complex directory)
#[derive(Clone)]
struct AppState {
    complexes: Arc<ComplexMap>,
}

/// Search query parameters
#[derive(Deserialize)]
struct SearchParams {
    keyword: String,
}

/// Listing query parameters
#[derive(Deserialize)]
struct TradeParams {
    #[serde(default = "default_trade_type")]
    trade_type: String,
}

fn default_trade_type() -> String {
    "A1".to_string()
}

/// API response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Combined analysis response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisData {
    all_sales: Vec<ParsedArticle>,
    area_stats: Vec<AreaStat>,
    bargains: Vec<Bargain>,
}

/// GET /api/apartments/search?keyword={keyword}
async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<ComplexEntry>>>, StatusCode> {
    if params.keyword.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let results = state.complexes.search(&params.keyword);
    Ok(Json(ApiResponse::ok(results)))
}

/// GET /api/apartments/{complex_no}/sales?trade_type={code}
async fn sales_handler(
    Path(complex_no): Path<String>,
    Query(params): Query<TradeParams>,
) -> Json<ApiResponse<Vec<ParsedArticle>>> {
    let articles = fetch_articles_with_fallback(&complex_no, &params.trade_type).await;
    let annotated = annotate_articles(articles);

    Json(ApiResponse::ok(annotated.listings))
}

/// GET /api/apartments/{complex_no}/analysis?trade_type={code}
async fn analysis_handler(
    Path(complex_no): Path<String>,
    Query(params): Query<TradeParams>,
) -> Json<ApiResponse<AnalysisData>> {
    let articles = fetch_articles_with_fallback(&complex_no, &params.trade_type).await;
    let annotated = annotate_articles(articles);

    let area_stats = compute_area_stats(&annotated.listings);
    let bargains = find_bargains(&annotated.listings, DEFAULT_BARGAIN_THRESHOLD);

    Json(ApiResponse::ok(AnalysisData {
        all_sales: annotated.listings,
        area_stats,
        bargains,
    }))
}

/// Build the web server router
pub fn create_router(complexes: Arc<ComplexMap>) -> Router {
    let state = AppState { complexes };

    Router::new()
        .route("/api/apartments/search", get(search_handler))
        .route("/api/apartments/{complex_no}/sales", get(sales_handler))
        .route(
            "/api/apartments/{complex_no}/analysis",
            get(analysis_handler),
        )
        .with_state(state)
}

/// Start the web server (async)
///
/// Binds to 0.0.0.0 (all interfaces) to work with Docker port mapping.
/// When running locally, use firewall rules to restrict access.
pub async fn serve(
    complexes: Arc<ComplexMap>,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(complexes);
    let addr = format!("0.0.0.0:{}", port);

    log::info!("Listing API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
