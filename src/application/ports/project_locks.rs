//! Project Lock Port - 项目级写入串行化
//!
//! 生成/编辑都是 "读取项目 → 内存中修改 → 写回" 的流程，
//! 同一项目的写操作必须持有该项目的锁

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use crate::domain::project::ProjectId;

/// 持有期间独占该项目的写入权
pub type ProjectGuard = OwnedMutexGuard<()>;

/// Project Lock Port
#[async_trait]
pub trait ProjectLockPort: Send + Sync {
    /// 获取项目锁，等待其他写者释放
    async fn acquire(&self, project_id: &ProjectId) -> ProjectGuard;

    /// 项目删除或确认不存在后移除锁条目
    fn forget(&self, project_id: &ProjectId);

    /// 当前锁条目数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
