//! Query Handlers 实现

mod project_handlers;
mod store_handlers;

pub use project_handlers::*;
pub use store_handlers::*;
