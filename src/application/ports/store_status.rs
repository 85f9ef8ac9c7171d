//! Store Status Port - 存储连通性探测

use async_trait::async_trait;

/// 存储状态快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    /// 存储是否响应
    pub connected: bool,
    /// 存储位置（如 SQLite 文件路径）
    pub location: String,
    /// 集合（表）名称
    pub collections: Vec<String>,
    /// 探测失败时的错误信息
    pub error: Option<String>,
}

/// Store Status Port
#[async_trait]
pub trait StoreStatusPort: Send + Sync {
    /// 探测存储，失败体现在返回值中而不是错误
    async fn status(&self) -> StoreStatus;
}
