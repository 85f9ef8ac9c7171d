//! Project Queries

use crate::domain::project::ProjectId;

/// 获取项目详情查询
#[derive(Debug, Clone)]
pub struct GetProject {
    pub project_id: ProjectId,
}

/// 列出所有项目查询
#[derive(Debug, Clone)]
pub struct ListProjects;

/// 复制章节正文查询（只返回标题、正文、词数）
#[derive(Debug, Clone)]
pub struct GetChapterCopy {
    pub project_id: ProjectId,
    pub chapter_number: u32,
}

/// 存储连通性查询
#[derive(Debug, Clone)]
pub struct GetStoreStatus;
