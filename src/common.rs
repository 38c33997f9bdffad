
mod canvas_rect;
mod detection;
mod live_message;
mod stats;

pub use canvas_rect::*;
pub use detection::*;
pub use live_message::*;
pub use stats::*;
