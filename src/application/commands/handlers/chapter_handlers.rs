//! Chapter Command Handlers
//!
//! 所有写操作都是 "加项目锁 → 读取 → 领域内修改 → 写回"

use std::sync::Arc;

use crate::application::commands::{EditChapter, GenerateAllChapters, GenerateChapter};
use crate::application::error::ApplicationError;
use crate::application::ports::{ProjectLockPort, ProjectRepositoryPort};
use crate::domain::project::{Chapter, Project, ProjectId};

/// 在持锁状态下加载项目
///
/// 项目不存在时移除刚建立的锁条目，锁表只保留存在的项目
async fn load_project(
    repo: &dyn ProjectRepositoryPort,
    locks: &dyn ProjectLockPort,
    project_id: &ProjectId,
) -> Result<Project, ApplicationError> {
    match repo.find_by_id(project_id).await? {
        Some(project) => Ok(project),
        None => {
            locks.forget(project_id);
            Err(ApplicationError::not_found("Project", project_id))
        }
    }
}

// ============================================================================
// GenerateChapter
// ============================================================================

/// GenerateChapter Handler - 生成单章并按章节号 upsert
pub struct GenerateChapterHandler {
    project_repo: Arc<dyn ProjectRepositoryPort>,
    locks: Arc<dyn ProjectLockPort>,
}

impl GenerateChapterHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepositoryPort>, locks: Arc<dyn ProjectLockPort>) -> Self {
        Self { project_repo, locks }
    }

    pub async fn handle(&self, command: GenerateChapter) -> Result<Chapter, ApplicationError> {
        let _guard = self.locks.acquire(&command.project_id).await;
        let mut project = load_project(
            self.project_repo.as_ref(),
            self.locks.as_ref(),
            &command.project_id,
        )
        .await?;

        let chapter = project
            .generate_chapter(command.chapter_number, command.user_instructions.as_deref())?
            .clone();

        self.project_repo
            .save_chapter(project.id(), &chapter, project.updated_at())
            .await?;

        tracing::info!(
            project_id = %project.id(),
            chapter_number = chapter.number(),
            pov = chapter.pov().as_str(),
            word_count = chapter.word_count(),
            "Chapter generated"
        );

        Ok(chapter)
    }
}

// ============================================================================
// GenerateAllChapters
// ============================================================================

/// GenerateAllChapters Handler - 重新生成 1..=chapter_count 并整体替换
pub struct GenerateAllChaptersHandler {
    project_repo: Arc<dyn ProjectRepositoryPort>,
    locks: Arc<dyn ProjectLockPort>,
}

impl GenerateAllChaptersHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepositoryPort>, locks: Arc<dyn ProjectLockPort>) -> Self {
        Self { project_repo, locks }
    }

    pub async fn handle(&self, command: GenerateAllChapters) -> Result<Vec<Chapter>, ApplicationError> {
        let _guard = self.locks.acquire(&command.project_id).await;
        let mut project = load_project(
            self.project_repo.as_ref(),
            self.locks.as_ref(),
            &command.project_id,
        )
        .await?;

        let chapters: Vec<Chapter> = project.generate_all().values().cloned().collect();

        self.project_repo
            .replace_chapters(project.id(), &chapters, project.updated_at())
            .await?;

        tracing::info!(
            project_id = %project.id(),
            count = chapters.len(),
            "All chapters generated"
        );

        Ok(chapters)
    }
}

// ============================================================================
// EditChapter
// ============================================================================

/// EditChapter Handler - 修改标题和/或正文
pub struct EditChapterHandler {
    project_repo: Arc<dyn ProjectRepositoryPort>,
    locks: Arc<dyn ProjectLockPort>,
}

impl EditChapterHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepositoryPort>, locks: Arc<dyn ProjectLockPort>) -> Self {
        Self { project_repo, locks }
    }

    pub async fn handle(&self, command: EditChapter) -> Result<Chapter, ApplicationError> {
        let _guard = self.locks.acquire(&command.project_id).await;
        let mut project = load_project(
            self.project_repo.as_ref(),
            self.locks.as_ref(),
            &command.project_id,
        )
        .await?;

        let text_changed = command.text.is_some();
        let chapter = project
            .edit_chapter(command.chapter_number, command.title, command.text.as_deref())?
            .clone();

        self.project_repo
            .save_chapter(project.id(), &chapter, project.updated_at())
            .await?;

        tracing::info!(
            project_id = %project.id(),
            chapter_number = chapter.number(),
            text_changed,
            word_count = chapter.word_count(),
            "Chapter edited"
        );

        Ok(chapter)
    }
}
