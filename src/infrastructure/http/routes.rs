//! HTTP Routes
//!
//! API Endpoints:
//! - /                                              GET    存活检查
//! - /test                                          GET    存储连通性探测
//! - /api/projects                                  POST   创建项目
//! - /api/projects                                  GET    列出所有项目
//! - /api/projects/:id                              GET    获取项目详情
//! - /api/projects/:id                              DELETE 删除项目
//! - /api/projects/:id/chapters/generate            POST   生成（或重新生成）单章
//! - /api/projects/:id/chapters/generate_all        POST   重新生成全部章节
//! - /api/projects/:id/chapters/:number             PATCH  编辑章节
//! - /api/projects/:id/chapters/:number/copy        GET    获取章节正文

use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/test", get(handlers::store_status))
        .nest("/api/projects", project_routes())
}

/// Project 路由
fn project_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            post(handlers::create_project).get(handlers::list_projects),
        )
        .route(
            "/:id",
            get(handlers::get_project).delete(handlers::delete_project),
        )
        .route("/:id/chapters/generate", post(handlers::generate_chapter))
        .route(
            "/:id/chapters/generate_all",
            post(handlers::generate_all_chapters),
        )
        .route("/:id/chapters/:number", patch(handlers::edit_chapter))
        .route("/:id/chapters/:number/copy", get(handlers::copy_chapter))
}
