//! Domain Layer - 领域层
//!
//! 包含:
//! - Project Context: 写作项目与章节
//! - Synthesis: 基于大纲的确定性章节合成

pub mod project;
pub mod synthesis;
