//! Project Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ProjectRepositoryPort;
use crate::application::queries::{GetChapterCopy, GetProject, ListProjects};
use crate::domain::project::{ChapterCopy, Project};

/// GetProject Handler
pub struct GetProjectHandler {
    project_repo: Arc<dyn ProjectRepositoryPort>,
}

impl GetProjectHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepositoryPort>) -> Self {
        Self { project_repo }
    }

    pub async fn handle(&self, query: GetProject) -> Result<Project, ApplicationError> {
        let project = self
            .project_repo
            .find_by_id(&query.project_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Project", &query.project_id))?;

        tracing::debug!(project_id = %query.project_id, "Project fetched");
        Ok(project)
    }
}

/// ListProjects Handler
pub struct ListProjectsHandler {
    project_repo: Arc<dyn ProjectRepositoryPort>,
}

impl ListProjectsHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepositoryPort>) -> Self {
        Self { project_repo }
    }

    pub async fn handle(&self, _query: ListProjects) -> Result<Vec<Project>, ApplicationError> {
        let projects = self.project_repo.find_all().await?;
        tracing::debug!(count = projects.len(), "Projects listed");
        Ok(projects)
    }
}

/// GetChapterCopy Handler
pub struct GetChapterCopyHandler {
    project_repo: Arc<dyn ProjectRepositoryPort>,
}

impl GetChapterCopyHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepositoryPort>) -> Self {
        Self { project_repo }
    }

    pub async fn handle(&self, query: GetChapterCopy) -> Result<ChapterCopy, ApplicationError> {
        let project = self
            .project_repo
            .find_by_id(&query.project_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Project", &query.project_id))?;

        Ok(project.chapter(query.chapter_number)?.to_copy())
    }
}
