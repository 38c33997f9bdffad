pub mod common;
pub mod feed;
pub mod overlay;
pub mod session;

pub use crate::common::{CameraId, DashboardStats, Detection, LiveMessage, Priority};
pub use crate::feed::{route, FeedAction, LiveFeed};
pub use crate::overlay::{OverlayRenderer, OverlayStyle, RenderReport};
pub use crate::session::{CameraSession, SessionCommand, ViewState};

pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

/// Parses one raw wire frame and routes it against the camera currently on
/// screen. The caller executes the returned action against its UI layer;
/// `FeedAction::Ignore` means there is nothing to do for this frame.
pub fn parse_and_route(raw: &str, active_camera: Option<CameraId>) -> Result<FeedAction> {
    let message = LiveMessage::from_wire(raw)?;
    Ok(route(message, active_camera))
}
