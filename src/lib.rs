//! ChapterSmith - 短篇言情章节生成服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Project Context: 项目、章节、视角与章节数规则
//! - Synthesis: 确定性的模板扩写与词数区间约束
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ProjectRepository, ProjectLock, StoreStatus）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 进程内项目写锁
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
