//! Project Context - 写作项目限界上下文
//!
//! 职责:
//! - 项目聚合管理
//! - 章节实体（生成、重新生成、编辑）
//! - 视角与题材值对象

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::{Project, ProjectSettings};
pub use entities::{Chapter, ChapterCopy};
pub use errors::ProjectError;
pub use value_objects::{ChapterCount, Genre, Pov, PovMode, ProjectId};
