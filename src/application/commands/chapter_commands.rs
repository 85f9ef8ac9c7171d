//! Chapter Commands

use crate::domain::project::ProjectId;

/// 生成（或重新生成）单章命令
#[derive(Debug, Clone)]
pub struct GenerateChapter {
    pub project_id: ProjectId,
    pub chapter_number: u32,
    pub user_instructions: Option<String>,
}

/// 重新生成全部章节命令
#[derive(Debug, Clone)]
pub struct GenerateAllChapters {
    pub project_id: ProjectId,
}

/// 编辑章节命令，只应用提供的字段
#[derive(Debug, Clone)]
pub struct EditChapter {
    pub project_id: ProjectId,
    pub chapter_number: u32,
    pub title: Option<String>,
    pub text: Option<String>,
}
