//! Project Commands

use crate::domain::project::{Genre, PovMode, ProjectId};

/// 创建项目命令
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub name: String,
    pub outline: String,
    pub chapter_count: u32,
    pub pov_mode: PovMode,
    pub genre: Option<Genre>,
    pub rules: Option<String>,
}

/// 删除项目命令
#[derive(Debug, Clone)]
pub struct DeleteProject {
    pub project_id: ProjectId,
}
