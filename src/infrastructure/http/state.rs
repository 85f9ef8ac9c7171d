//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateProjectHandler, DeleteProjectHandler, EditChapterHandler, GenerateAllChaptersHandler,
    GenerateChapterHandler,
    // Query handlers
    GetChapterCopyHandler, GetProjectHandler, GetStoreStatusHandler, ListProjectsHandler,
    // Ports
    ProjectLockPort, ProjectRepositoryPort, StoreStatusPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub project_repo: Arc<dyn ProjectRepositoryPort>,
    pub project_locks: Arc<dyn ProjectLockPort>,

    // ========== Command Handlers ==========
    pub create_project_handler: CreateProjectHandler,
    pub delete_project_handler: DeleteProjectHandler,
    pub generate_chapter_handler: GenerateChapterHandler,
    pub generate_all_chapters_handler: GenerateAllChaptersHandler,
    pub edit_chapter_handler: EditChapterHandler,

    // ========== Query Handlers ==========
    pub get_project_handler: GetProjectHandler,
    pub list_projects_handler: ListProjectsHandler,
    pub get_chapter_copy_handler: GetChapterCopyHandler,
    pub get_store_status_handler: GetStoreStatusHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        project_repo: Arc<dyn ProjectRepositoryPort>,
        project_locks: Arc<dyn ProjectLockPort>,
        store_status: Arc<dyn StoreStatusPort>,
    ) -> Self {
        Self {
            // Ports
            project_repo: project_repo.clone(),
            project_locks: project_locks.clone(),

            // Command handlers
            create_project_handler: CreateProjectHandler::new(project_repo.clone()),
            delete_project_handler: DeleteProjectHandler::new(
                project_repo.clone(),
                project_locks.clone(),
            ),
            generate_chapter_handler: GenerateChapterHandler::new(
                project_repo.clone(),
                project_locks.clone(),
            ),
            generate_all_chapters_handler: GenerateAllChaptersHandler::new(
                project_repo.clone(),
                project_locks.clone(),
            ),
            edit_chapter_handler: EditChapterHandler::new(project_repo.clone(), project_locks),

            // Query handlers
            get_project_handler: GetProjectHandler::new(project_repo.clone()),
            list_projects_handler: ListProjectsHandler::new(project_repo.clone()),
            get_chapter_copy_handler: GetChapterCopyHandler::new(project_repo),
            get_store_status_handler: GetStoreStatusHandler::new(store_status),
        }
    }
}
