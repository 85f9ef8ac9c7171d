//! SQLite Database - 数据库连接、迁移与连通性探测

use async_trait::async_trait;
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};
use std::path::Path;

use crate::application::ports::{RepositoryError, StoreStatus, StoreStatusPort};

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:./data/chaptersmith.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=rwc", path.as_ref().display()),
            max_connections: 5,
        }
    }

    /// 内存数据库，单连接（每个连接各自独立的库）
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 将 sqlx 错误映射为仓储错误
///
/// 连接层面的失败归为 Unavailable，其余归为 DatabaseError
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::Unavailable(err.to_string())
        }
        other => RepositoryError::DatabaseError(other.to_string()),
    }
}

/// 创建数据库连接池
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    // 启用 WAL 模式，允许并发读写
    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await?;

    // 设置 busy_timeout=5000ms，遇到锁时等待而不是立即失败
    sqlx::query("PRAGMA busy_timeout=5000")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA synchronous=NORMAL")
        .execute(&pool)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "SQLite pool created with WAL mode and busy_timeout=5000ms"
    );

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // 创建 projects 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            outline TEXT NOT NULL,
            chapter_count INTEGER NOT NULL,
            pov_mode TEXT NOT NULL,
            genre TEXT,
            rules TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 chapters 表，(project_id, number) 唯一
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS chapters (
            project_id TEXT NOT NULL,
            number INTEGER NOT NULL,
            title TEXT NOT NULL,
            text TEXT NOT NULL,
            pov TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            PRIMARY KEY (project_id, number),
            FOREIGN KEY (project_id) REFERENCES projects(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_projects_created_at
        ON projects(created_at)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

// ============================================================================
// Store Status
// ============================================================================

/// SQLite 连通性探测
pub struct SqliteStoreStatus {
    pool: DbPool,
    location: String,
}

impl SqliteStoreStatus {
    pub fn new(pool: DbPool, location: impl Into<String>) -> Self {
        Self {
            pool,
            location: location.into(),
        }
    }
}

#[async_trait]
impl StoreStatusPort for SqliteStoreStatus {
    async fn status(&self) -> StoreStatus {
        let result: Result<Vec<String>, sqlx::Error> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await;

        match result {
            Ok(collections) => StoreStatus {
                connected: true,
                location: self.location.clone(),
                collections,
                error: None,
            },
            Err(e) => StoreStatus {
                connected: false,
                location: self.location.clone(),
                collections: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}
