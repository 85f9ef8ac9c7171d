//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::project::{Chapter, Project, ProjectId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 存储不可达（连接池关闭、获取连接超时、IO 错误）
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Project Repository
// ============================================================================

/// Project Repository Port
///
/// 章节作为项目的子记录保存，按 (project_id, number) 唯一
#[async_trait]
pub trait ProjectRepositoryPort: Send + Sync {
    /// 保存项目及其全部章节
    async fn save(&self, project: &Project) -> Result<(), RepositoryError>;

    /// 根据 ID 查找项目（含章节，按章节号升序）
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, RepositoryError>;

    /// 获取所有项目
    async fn find_all(&self) -> Result<Vec<Project>, RepositoryError>;

    /// 删除项目及其章节，返回是否恰好删除了一个项目
    async fn delete(&self, id: &ProjectId) -> Result<bool, RepositoryError>;

    /// 按章节号 upsert 单章，并刷新项目 updated_at
    async fn save_chapter(
        &self,
        project_id: &ProjectId,
        chapter: &Chapter,
        project_updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;

    /// 整体替换项目的章节列表，并刷新项目 updated_at
    async fn replace_chapters(
        &self,
        project_id: &ProjectId,
        chapters: &[Chapter],
        project_updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;
}
