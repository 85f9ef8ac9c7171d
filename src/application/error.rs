//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::project::ProjectError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 标识格式错误（未访问存储）
    #[error("Invalid {resource_type} id: {id}")]
    InvalidIdentifier {
        resource_type: &'static str,
        id: String,
    },

    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 章节号超出项目章节范围
    #[error("Chapter number out of range: {0}")]
    InvalidRange(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 存储不可达
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Unavailable(msg) => Self::StoreUnavailable(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

impl From<ProjectError> for ApplicationError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::InvalidIdentifier(id) => Self::InvalidIdentifier {
                resource_type: "project",
                id,
            },
            ProjectError::InvalidChapterCount(_) => Self::ValidationError(err.to_string()),
            ProjectError::ChapterOutOfRange { .. } => Self::InvalidRange(err.to_string()),
            ProjectError::ChapterNotFound(number) => Self::not_found("Chapter", number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_mapping() {
        let err: ApplicationError = ProjectError::ChapterOutOfRange {
            number: 4,
            chapter_count: 3,
        }
        .into();
        assert!(matches!(err, ApplicationError::InvalidRange(_)));

        let err: ApplicationError = ProjectError::ChapterNotFound(2).into();
        assert_eq!(err.to_string(), "Chapter not found: 2");

        let err: ApplicationError = ProjectError::InvalidIdentifier("abc".into()).into();
        assert_eq!(err.to_string(), "Invalid project id: abc");
    }

    #[test]
    fn test_store_faults_are_not_identifier_errors() {
        let err: ApplicationError = RepositoryError::Unavailable("pool closed".into()).into();
        assert!(matches!(err, ApplicationError::StoreUnavailable(_)));

        let err: ApplicationError = RepositoryError::DatabaseError("syntax".into()).into();
        assert!(matches!(err, ApplicationError::RepositoryError(_)));
    }
}
