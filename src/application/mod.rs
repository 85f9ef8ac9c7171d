//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ProjectRepository、ProjectLock、StoreStatus）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Project commands
    CreateProject,
    DeleteProject,
    // Chapter commands
    EditChapter,
    GenerateAllChapters,
    GenerateChapter,
    // Handlers
    handlers::{
        CreateProjectHandler, DeleteProjectHandler, EditChapterHandler,
        GenerateAllChaptersHandler, GenerateChapterHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    ProjectGuard, ProjectLockPort, ProjectRepositoryPort, RepositoryError, StoreStatus,
    StoreStatusPort,
};

pub use queries::{
    GetChapterCopy,
    GetProject,
    GetStoreStatus,
    ListProjects,
    // Handlers
    handlers::{GetChapterCopyHandler, GetProjectHandler, GetStoreStatusHandler, ListProjectsHandler},
};
