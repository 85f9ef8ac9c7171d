//! Project Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Invalid project id: {0}")]
    InvalidIdentifier(String),

    #[error("Chapter count must be between 3 and 6, got {0}")]
    InvalidChapterCount(u32),

    #[error("Chapter number {number} out of range 1..={chapter_count}")]
    ChapterOutOfRange { number: u32, chapter_count: u32 },

    #[error("Chapter not found: {0}")]
    ChapterNotFound(u32),
}
