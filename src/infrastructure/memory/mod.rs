//! Memory Layer - In-Memory State Management
//!
//! 进程内的项目写锁表

mod project_locks;

pub use project_locks::InMemoryProjectLocks;
