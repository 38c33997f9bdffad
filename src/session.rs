mod fps;

pub use fps::FpsCounter;

use std::time::Instant;

use crate::common::CameraId;

/// What the user is looking at. At most one camera is ever active.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Viewing {
        camera_id: CameraId,
        title: String,
    },
}

/// Side effects a state transition asks the caller to perform, in order.
/// Tear-down commands always come before start-up commands so no stale
/// boxes or frame counts from a previous camera survive into the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    StopFpsTick,
    ClearOverlay,
    ResetDetectionCount,
    StartFpsTick,
}

/// The one piece of session state: which camera is on screen, plus the
/// frame counter behind the FPS readout. Transitions are explicit functions
/// returning the commands to execute, so the controller tests without a UI.
#[derive(Default, Debug)]
pub struct CameraSession {
    state: ViewState,
    fps: FpsCounter,
}

impl CameraSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn active_camera(&self) -> Option<CameraId> {
        match &self.state {
            ViewState::Viewing { camera_id, .. } => Some(*camera_id),
            ViewState::Idle => None,
        }
    }

    pub fn camera_title(&self) -> Option<&str> {
        match &self.state {
            ViewState::Viewing { title, .. } => Some(title.as_str()),
            ViewState::Idle => None,
        }
    }

    /// Switches the view to `camera_id`. Any existing session is torn down
    /// first; the frame counter restarts at zero for the new camera.
    pub fn select_camera(
        &mut self,
        camera_id: CameraId,
        display_name: Option<&str>,
    ) -> Vec<SessionCommand> {
        let mut commands = Vec::with_capacity(4);
        if matches!(self.state, ViewState::Viewing { .. }) {
            commands.extend([
                SessionCommand::StopFpsTick,
                SessionCommand::ClearOverlay,
                SessionCommand::ResetDetectionCount,
            ]);
        }

        let title = display_name
            .map(str::to_string)
            .unwrap_or_else(|| format!("Camera {camera_id}"));
        self.state = ViewState::Viewing { camera_id, title };
        self.fps.clear();

        commands.push(SessionCommand::StartFpsTick);
        commands
    }

    /// Leaves the camera view (navigation to any non-camera view, or an
    /// explicit stop). A no-op when nothing is active.
    pub fn leave_view(&mut self) -> Vec<SessionCommand> {
        match self.state {
            ViewState::Viewing { .. } => {
                self.state = ViewState::Idle;
                self.fps.clear();
                vec![
                    SessionCommand::StopFpsTick,
                    SessionCommand::ClearOverlay,
                    SessionCommand::ResetDetectionCount,
                ]
            }
            ViewState::Idle => Vec::new(),
        }
    }

    /// Counts one received frame. Frames arriving with no camera active
    /// (e.g. still in flight after a switch) are not counted.
    pub fn frame_hit(&mut self) {
        if matches!(self.state, ViewState::Viewing { .. }) {
            self.fps.frame_hit();
        }
    }

    /// Frames received since the last sampling tick.
    pub fn frames_pending(&self) -> u32 {
        self.fps.frames()
    }

    /// One sampling tick: publishes the FPS estimate for the window since
    /// the previous tick and resets the counter.
    pub fn sample_fps(&mut self, now: Instant) -> u32 {
        self.fps.sample(now)
    }
}
