//! Project Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateProject, DeleteProject};
use crate::application::error::ApplicationError;
use crate::application::ports::{ProjectLockPort, ProjectRepositoryPort};
use crate::domain::project::{ChapterCount, Project, ProjectId, ProjectSettings};

// ============================================================================
// CreateProject
// ============================================================================

/// CreateProject Handler - 创建空项目（无章节）
pub struct CreateProjectHandler {
    project_repo: Arc<dyn ProjectRepositoryPort>,
}

impl CreateProjectHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepositoryPort>) -> Self {
        Self { project_repo }
    }

    pub async fn handle(&self, command: CreateProject) -> Result<ProjectId, ApplicationError> {
        let chapter_count = ChapterCount::new(command.chapter_count)?;

        let project = Project::new(ProjectSettings {
            name: command.name,
            outline: command.outline,
            chapter_count,
            pov_mode: command.pov_mode,
            genre: command.genre,
            rules: command.rules,
        });

        self.project_repo.save(&project).await?;

        tracing::info!(
            project_id = %project.id(),
            name = %project.name(),
            chapter_count = chapter_count.get(),
            pov_mode = project.settings().pov_mode.as_str(),
            "Project created"
        );

        Ok(project.id().clone())
    }
}

// ============================================================================
// DeleteProject
// ============================================================================

/// DeleteProject Handler
///
/// 删除不存在的项目不是错误，返回 false
pub struct DeleteProjectHandler {
    project_repo: Arc<dyn ProjectRepositoryPort>,
    locks: Arc<dyn ProjectLockPort>,
}

impl DeleteProjectHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepositoryPort>, locks: Arc<dyn ProjectLockPort>) -> Self {
        Self { project_repo, locks }
    }

    pub async fn handle(&self, command: DeleteProject) -> Result<bool, ApplicationError> {
        let project_id = command.project_id;

        let deleted = {
            let _guard = self.locks.acquire(&project_id).await;
            self.project_repo.delete(&project_id).await?
        };
        self.locks.forget(&project_id);

        tracing::info!(project_id = %project_id, deleted, "Project delete requested");

        Ok(deleted)
    }
}
