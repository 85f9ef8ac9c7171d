//! ChapterSmith - 章节生成服务
//!
//! 启动流程：加载配置 → 初始化日志 → 打开 SQLite → 组装 AppState → 启动 HTTP 服务

use std::sync::Arc;

use chaptersmith::config::{load_config, print_config, LogConfig};
use chaptersmith::infrastructure::http::{AppState, HttpServer, ServerConfig};
use chaptersmith::infrastructure::memory::InMemoryProjectLocks;
use chaptersmith::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteProjectRepository, SqliteStoreStatus,
};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},chaptersmith={},tower_http=debug",
        log.level, log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("ChapterSmith backend v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建端口适配器
    let project_repo = Arc::new(SqliteProjectRepository::new(pool.clone()));
    let project_locks = InMemoryProjectLocks::new().arc();
    let store_status = Arc::new(SqliteStoreStatus::new(pool, config.database.path.clone()));

    let state = AppState::new(project_repo, project_locks, store_status);
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
