//! Query Handlers 实现

mod engine_handlers;
mod session_handlers;
mod voice_handlers;

pub use engine_handlers::*;
pub use session_handlers::*;
pub use voice_handlers::*;
