//! Chapter Synthesis - 章节正文合成
//!
//! 职责:
//! - 大纲分段
//! - 模板展开（视角、题材基调、场景、收尾）
//! - 字数区间约束

mod outline;
mod synthesizer;
mod word_range;

pub use outline::{split_outline, FALLBACK_SEGMENT};
pub use synthesizer::{apply_adjustment, synthesize_chapter, ChapterBrief, SynthesizedChapter};
pub use word_range::{count_words, enforce_word_range, MAX_WORDS, MIN_WORDS};
