use crate::common::{CameraId, DashboardStats, Detection, LiveMessage, Priority};

/// UI update selected for one inbound message. The dispatcher only decides;
/// the transport (or whatever drives it) executes the action against the
/// UI/state layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    RenderDetections(Vec<Detection>),
    ShowViolationAlert {
        violation_type: String,
        camera_id: CameraId,
        priority: Priority,
    },
    UpdateStats(DashboardStats),
    UpdateCameraStatus {
        camera_id: CameraId,
        status: String,
    },
    Ignore,
}

/// Routes one live message against the camera currently on screen.
///
/// Detections only render for the active camera; a message for any other
/// camera (or with no camera active at all) is dropped here so a stale frame
/// can never be drawn under the wrong stream. Violations, stats and camera
/// status updates are global and route regardless of the active camera.
pub fn route(message: LiveMessage, active_camera: Option<CameraId>) -> FeedAction {
    match message {
        LiveMessage::Detections {
            camera_id,
            detections,
        } => {
            if active_camera == Some(camera_id) {
                FeedAction::RenderDetections(detections)
            } else {
                log::trace!("dropping detections for camera {camera_id}: not on screen");
                FeedAction::Ignore
            }
        }
        LiveMessage::Violation {
            camera_id,
            violation_type,
            priority,
        } => FeedAction::ShowViolationAlert {
            violation_type,
            camera_id,
            priority,
        },
        LiveMessage::Stats { stats } => FeedAction::UpdateStats(stats),
        LiveMessage::CameraStatus { camera_id, status } => {
            FeedAction::UpdateCameraStatus { camera_id, status }
        }
        LiveMessage::Unknown { kind } => {
            log::warn!("unknown live message kind: {kind:?}");
            FeedAction::Ignore
        }
    }
}
