//! Chapter HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use std::sync::Arc;

use super::project::parse_project_id;
use crate::application::{
    ApplicationError, EditChapter, GenerateAllChapters, GenerateChapter, GetChapterCopy,
};
use crate::infrastructure::http::dto::{
    ApiResponse, ChapterCopyResponse, ChapterResponse, ChapterWriteResponse,
    EditChapterRequest, GenerateAllResponse, GenerateChapterRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 路径中的章节号为负数时，该章节不可能存在
fn existing_chapter_number(number: i64) -> Result<u32, ApiError> {
    u32::try_from(number).map_err(|_| ApplicationError::not_found("Chapter", number).into())
}

/// 生成（或重新生成）单章
pub async fn generate_chapter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<GenerateChapterRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ChapterWriteResponse>>, ApiError> {
    let project_id = parse_project_id(&id)?;
    let Json(req) = payload?;

    let chapter_number = u32::try_from(req.chapter_number).map_err(|_| {
        ApiError::from(ApplicationError::InvalidRange(req.chapter_number.to_string()))
    })?;

    let chapter = state
        .generate_chapter_handler
        .handle(GenerateChapter {
            project_id,
            chapter_number,
            user_instructions: req.user_instructions,
        })
        .await?;

    Ok(Json(ApiResponse::success(ChapterWriteResponse {
        ok: true,
        chapter: ChapterResponse::from(&chapter),
    })))
}

/// 重新生成全部章节
pub async fn generate_all_chapters(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<GenerateAllResponse>>, ApiError> {
    let project_id = parse_project_id(&id)?;
    let chapters = state
        .generate_all_chapters_handler
        .handle(GenerateAllChapters { project_id })
        .await?;

    Ok(Json(ApiResponse::success(GenerateAllResponse {
        ok: true,
        count: chapters.len(),
    })))
}

/// 编辑章节标题和/或正文
pub async fn edit_chapter(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, i64)>, PathRejection>,
    payload: Result<Json<EditChapterRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ChapterWriteResponse>>, ApiError> {
    let Path((id, number)) = path?;
    let project_id = parse_project_id(&id)?;
    let chapter_number = existing_chapter_number(number)?;
    let Json(req) = payload?;

    let chapter = state
        .edit_chapter_handler
        .handle(EditChapter {
            project_id,
            chapter_number,
            title: req.title,
            text: req.text,
        })
        .await?;

    Ok(Json(ApiResponse::success(ChapterWriteResponse {
        ok: true,
        chapter: ChapterResponse::from(&chapter),
    })))
}

/// 获取章节的标题、正文和词数
pub async fn copy_chapter(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, i64)>, PathRejection>,
) -> Result<Json<ApiResponse<ChapterCopyResponse>>, ApiError> {
    let Path((id, number)) = path?;
    let project_id = parse_project_id(&id)?;
    let chapter_number = existing_chapter_number(number)?;

    let copy = state
        .get_chapter_copy_handler
        .handle(GetChapterCopy {
            project_id,
            chapter_number,
        })
        .await?;

    Ok(Json(ApiResponse::success(copy.into())))
}
