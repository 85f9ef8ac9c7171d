//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod project_locks;
mod repositories;
mod store_status;

pub use project_locks::{ProjectGuard, ProjectLockPort};
pub use repositories::{ProjectRepositoryPort, RepositoryError};
pub use store_status::{StoreStatus, StoreStatusPort};
