//! Project Context - Entities

use chrono::{DateTime, Utc};

use super::Pov;
use crate::domain::synthesis::{count_words, enforce_word_range, SynthesizedChapter};

/// 章节 - 项目内以章节号唯一标识
///
/// 不变量:
/// - number >= 1 且在项目内唯一
/// - word_count 始终等于 text 的空白分隔词数
/// - pov 为已解析的视角，不会是 dual
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    number: u32,
    title: String,
    text: String,
    word_count: usize,
    pov: Pov,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Chapter {
    /// 由合成结果创建章节，标题为 "Chapter {n}"
    pub fn generated(number: u32, pov: Pov, synthesized: SynthesizedChapter, now: DateTime<Utc>) -> Self {
        Self {
            number,
            title: format!("Chapter {}", number),
            text: synthesized.text,
            word_count: synthesized.word_count,
            pov,
            created_at: now,
            updated_at: now,
        }
    }

    /// 从存储恢复，word_count 按正文重新计算
    pub fn restore(
        number: u32,
        title: String,
        text: String,
        pov: Pov,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            number,
            title,
            word_count: count_words(&text),
            text,
            pov,
            created_at,
            updated_at,
        }
    }

    /// 编辑章节：只修改提供的字段
    ///
    /// 修改正文时重新做字数约束并重算 word_count；updated_at 总会刷新
    pub fn edit(&mut self, title: Option<String>, text: Option<&str>, now: DateTime<Utc>) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(text) = text {
            self.text = enforce_word_range(text);
            self.word_count = count_words(&self.text);
        }
        self.updated_at = now;
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn pov(&self) -> Pov {
        self.pov
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn to_copy(&self) -> ChapterCopy {
        ChapterCopy {
            title: self.title.clone(),
            text: self.text.clone(),
            word_count: self.word_count,
        }
    }
}

/// 复制章节时返回的精简视图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterCopy {
    pub title: String,
    pub text: String,
    pub word_count: usize,
}
