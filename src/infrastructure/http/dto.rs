//! Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::StoreStatus;
use crate::domain::project::{Chapter, ChapterCopy, Genre, Pov, PovMode, Project};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Service DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// /test 探测结果
#[derive(Debug, Serialize)]
pub struct StoreStatusResponse {
    pub backend: &'static str,
    pub database: &'static str,
    pub connection_status: &'static str,
    pub location: String,
    pub collections: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<StoreStatus> for StoreStatusResponse {
    fn from(status: StoreStatus) -> Self {
        let (database, connection_status) = if status.connected {
            ("available", "Connected")
        } else {
            ("unavailable", "Not Connected")
        };
        Self {
            backend: "running",
            database,
            connection_status,
            location: status.location,
            collections: status.collections,
            error: status.error,
        }
    }
}

// ============================================================================
// Project DTOs
// ============================================================================

fn default_genre() -> Option<Genre> {
    Some(Genre::General)
}

/// 创建项目请求
///
/// genre 缺省时为 general，显式 null 时保持为空
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub outline: String,
    pub chapter_count: u32,
    #[serde(default)]
    pub pov_mode: PovMode,
    #[serde(default = "default_genre")]
    pub genre: Option<Genre>,
    #[serde(default)]
    pub rules: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateProjectResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteProjectResponse {
    pub deleted: bool,
}

#[derive(Debug, Serialize)]
pub struct ChapterResponse {
    pub number: u32,
    pub title: String,
    pub text: String,
    pub word_count: usize,
    pub pov: Pov,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Chapter> for ChapterResponse {
    fn from(chapter: &Chapter) -> Self {
        Self {
            number: chapter.number(),
            title: chapter.title().to_string(),
            text: chapter.text().to_string(),
            word_count: chapter.word_count(),
            pov: chapter.pov(),
            created_at: chapter.created_at(),
            updated_at: chapter.updated_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub name: String,
    pub outline: String,
    pub chapter_count: u32,
    pub pov_mode: PovMode,
    pub genre: Option<Genre>,
    pub rules: Option<String>,
    pub chapters: Vec<ChapterResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        let settings = project.settings();
        Self {
            id: project.id().to_string(),
            name: settings.name.clone(),
            outline: settings.outline.clone(),
            chapter_count: settings.chapter_count.get(),
            pov_mode: settings.pov_mode,
            genre: settings.genre,
            rules: settings.rules.clone(),
            chapters: project.chapters().map(ChapterResponse::from).collect(),
            created_at: project.created_at(),
            updated_at: project.updated_at(),
        }
    }
}

// ============================================================================
// Chapter DTOs
// ============================================================================

/// 生成单章请求
///
/// chapter_number 允许负数输入，交由范围检查拒绝
#[derive(Debug, Deserialize)]
pub struct GenerateChapterRequest {
    pub chapter_number: i64,
    #[serde(default)]
    pub user_instructions: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EditChapterRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChapterWriteResponse {
    pub ok: bool,
    pub chapter: ChapterResponse,
}

#[derive(Debug, Serialize)]
pub struct GenerateAllResponse {
    pub ok: bool,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ChapterCopyResponse {
    pub title: String,
    pub text: String,
    pub word_count: usize,
}

impl From<ChapterCopy> for ChapterCopyResponse {
    fn from(copy: ChapterCopy) -> Self {
        Self {
            title: copy.title,
            text: copy.text,
            word_count: copy.word_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let req: CreateProjectRequest =
            serde_json::from_str(r#"{"name":"n","outline":"o","chapter_count":3}"#).unwrap();
        assert_eq!(req.pov_mode, PovMode::Female);
        assert_eq!(req.genre, Some(Genre::General));
        assert_eq!(req.rules, None);
    }

    #[test]
    fn test_create_request_explicit_null_genre() {
        let req: CreateProjectRequest = serde_json::from_str(
            r#"{"name":"n","outline":"o","chapter_count":3,"pov_mode":"dual","genre":null}"#,
        )
        .unwrap();
        assert_eq!(req.pov_mode, PovMode::Dual);
        assert_eq!(req.genre, None);
    }

    #[test]
    fn test_create_request_rejects_unknown_genre() {
        let result: Result<CreateProjectRequest, _> = serde_json::from_str(
            r#"{"name":"n","outline":"o","chapter_count":3,"genre":"scifi"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_success_envelope() {
        let json = serde_json::to_value(ApiResponse::success(DeleteProjectResponse { deleted: true }))
            .unwrap();
        assert_eq!(json["errno"], 0);
        assert_eq!(json["error"], "");
        assert_eq!(json["data"]["deleted"], true);
    }
}
