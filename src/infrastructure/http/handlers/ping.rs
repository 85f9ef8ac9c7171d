//! Service Handlers
//!
//! 存活检查与存储连通性探测

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GetStoreStatus;
use crate::infrastructure::http::dto::{ApiResponse, RootResponse, StoreStatusResponse};
use crate::infrastructure::http::state::AppState;

/// GET / - 存活检查
pub async fn root() -> Json<ApiResponse<RootResponse>> {
    Json(ApiResponse::success(RootResponse {
        message: "ChapterSmith backend running",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /test - 存储探测，失败写在响应体里
pub async fn store_status(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<StoreStatusResponse>> {
    let status = state.get_store_status_handler.handle(GetStoreStatus).await;
    Json(ApiResponse::success(status.into()))
}
