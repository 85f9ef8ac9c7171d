//! Project HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::{
    ApplicationError, CreateProject, DeleteProject, GetProject, ListProjects,
};
use crate::domain::project::ProjectId;
use crate::infrastructure::http::dto::{
    ApiResponse, CreateProjectRequest, CreateProjectResponse, DeleteProjectResponse,
    ProjectResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 解析路径中的项目 ID，格式错误直接拒绝，不访问存储
pub(super) fn parse_project_id(raw: &str) -> Result<ProjectId, ApiError> {
    ProjectId::parse(raw).map_err(|e| ApiError::from(ApplicationError::from(e)))
}

/// 创建项目
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CreateProjectResponse>>, ApiError> {
    let Json(req) = payload?;

    let project_id = state
        .create_project_handler
        .handle(CreateProject {
            name: req.name,
            outline: req.outline,
            chapter_count: req.chapter_count,
            pov_mode: req.pov_mode,
            genre: req.genre,
            rules: req.rules,
        })
        .await?;

    Ok(Json(ApiResponse::success(CreateProjectResponse {
        id: project_id.to_string(),
    })))
}

/// 列出所有项目
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ProjectResponse>>>, ApiError> {
    let projects = state.list_projects_handler.handle(ListProjects).await?;
    let responses = projects.iter().map(ProjectResponse::from).collect();
    Ok(Json(ApiResponse::success(responses)))
}

/// 获取项目详情
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProjectResponse>>, ApiError> {
    let project_id = parse_project_id(&id)?;
    let project = state
        .get_project_handler
        .handle(GetProject { project_id })
        .await?;
    Ok(Json(ApiResponse::success(ProjectResponse::from(&project))))
}

/// 删除项目，不存在时返回 deleted: false
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeleteProjectResponse>>, ApiError> {
    let project_id = parse_project_id(&id)?;
    let deleted = state
        .delete_project_handler
        .handle(DeleteProject { project_id })
        .await?;
    Ok(Json(ApiResponse::success(DeleteProjectResponse { deleted })))
}
