// Public API
pub use channel::{ConsoleChannel, MessageChannel};
pub use render::render_notice;

// Internal modules
mod channel;
mod render;
