//! Project Context - Aggregate Root

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::{Chapter, ChapterCount, Genre, PovMode, ProjectError, ProjectId};
use crate::domain::synthesis::{synthesize_chapter, ChapterBrief};

/// 创建项目时由客户端提供的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    pub name: String,
    pub outline: String,
    pub chapter_count: ChapterCount,
    pub pov_mode: PovMode,
    pub genre: Option<Genre>,
    pub rules: Option<String>,
}

/// Project 聚合根
///
/// 不变量:
/// - chapter_count 创建后不可变，限定可生成的章节号范围
/// - 章节按章节号唯一，按章节号有序
/// - 章节不能脱离项目独立存在
#[derive(Debug, Clone)]
pub struct Project {
    id: ProjectId,
    settings: ProjectSettings,
    chapters: BTreeMap<u32, Chapter>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Project {
    /// 创建新项目（无章节）
    pub fn new(settings: ProjectSettings) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            settings,
            chapters: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 从存储恢复
    pub fn restore(
        id: ProjectId,
        settings: ProjectSettings,
        chapters: Vec<Chapter>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            settings,
            chapters: chapters.into_iter().map(|c| (c.number(), c)).collect(),
            created_at,
            updated_at,
        }
    }

    fn synthesize(&self, chapter_number: u32, user_instructions: Option<&str>, now: DateTime<Utc>) -> Chapter {
        let pov = self.settings.pov_mode.resolve(chapter_number);
        let synthesized = synthesize_chapter(&ChapterBrief {
            outline: &self.settings.outline,
            chapter_number,
            chapter_total: self.settings.chapter_count.get(),
            pov,
            genre: self.settings.genre.unwrap_or_default(),
            user_instructions,
        });
        Chapter::generated(chapter_number, pov, synthesized, now)
    }

    /// 生成（或重新生成）单章，按章节号 upsert
    pub fn generate_chapter(
        &mut self,
        chapter_number: u32,
        user_instructions: Option<&str>,
    ) -> Result<&Chapter, ProjectError> {
        if !self.settings.chapter_count.contains(chapter_number) {
            return Err(ProjectError::ChapterOutOfRange {
                number: chapter_number,
                chapter_count: self.settings.chapter_count.get(),
            });
        }

        let now = Utc::now();
        let chapter = self.synthesize(chapter_number, user_instructions, now);
        self.updated_at = now;

        self.chapters.insert(chapter_number, chapter);
        Ok(&self.chapters[&chapter_number])
    }

    /// 重新生成全部章节 1..=chapter_count，整体替换原有章节列表
    pub fn generate_all(&mut self) -> &BTreeMap<u32, Chapter> {
        let now = Utc::now();
        self.chapters = (1..=self.settings.chapter_count.get())
            .map(|n| (n, self.synthesize(n, None, now)))
            .collect();
        self.updated_at = now;
        &self.chapters
    }

    /// 编辑已有章节的标题和/或正文
    pub fn edit_chapter(
        &mut self,
        chapter_number: u32,
        title: Option<String>,
        text: Option<&str>,
    ) -> Result<&Chapter, ProjectError> {
        let now = Utc::now();
        let chapter = self
            .chapters
            .get_mut(&chapter_number)
            .ok_or(ProjectError::ChapterNotFound(chapter_number))?;
        chapter.edit(title, text, now);
        self.updated_at = now;
        Ok(chapter)
    }

    // Getters
    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    pub fn name(&self) -> &str {
        &self.settings.name
    }

    pub fn chapter_count(&self) -> ChapterCount {
        self.settings.chapter_count
    }

    pub fn chapter(&self, chapter_number: u32) -> Result<&Chapter, ProjectError> {
        self.chapters
            .get(&chapter_number)
            .ok_or(ProjectError::ChapterNotFound(chapter_number))
    }

    /// 按章节号升序
    pub fn chapters(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.values()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
