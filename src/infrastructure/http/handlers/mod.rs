//! HTTP Handlers

mod chapter;
mod ping;
mod project;

pub use chapter::*;
pub use ping::*;
pub use project::*;
