//! In-Memory Project Locks

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::ports::{ProjectGuard, ProjectLockPort};
use crate::domain::project::ProjectId;

/// 进程内项目锁表
///
/// 每个项目一把 tokio Mutex，按需创建；只在单进程部署下有效
pub struct InMemoryProjectLocks {
    locks: DashMap<ProjectId, Arc<Mutex<()>>>,
}

impl InMemoryProjectLocks {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryProjectLocks {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectLockPort for InMemoryProjectLocks {
    async fn acquire(&self, project_id: &ProjectId) -> ProjectGuard {
        // 先克隆出 Arc 再等待，不能持有 DashMap 分片锁跨 await
        let lock = Arc::clone(self.locks.entry(project_id.clone()).or_default().value());
        let guard = lock.lock_owned().await;
        tracing::trace!(project_id = %project_id, "Project lock acquired");
        guard
    }

    fn forget(&self, project_id: &ProjectId) {
        if self.locks.remove(project_id).is_some() {
            tracing::debug!(project_id = %project_id, "Project lock removed");
        }
    }

    fn len(&self) -> usize {
        self.locks.len()
    }
}
