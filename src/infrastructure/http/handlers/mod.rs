//! HTTP Handlers

mod engine;
mod ping;
mod session;
mod speech;
mod ui;
mod voice;

pub use engine::*;
pub use ping::*;
pub use session::*;
pub use speech::*;
pub use ui::*;
pub use voice::*;
