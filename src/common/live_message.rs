use serde::{Deserialize, Serialize};

use crate::common::{DashboardStats, Detection};

pub type CameraId = u32;

/// Violation priority as sent by the backend, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One inbound frame from the real-time feed, discriminated by the wire
/// `type` field. Anything the parser does not recognize comes through as
/// `Unknown` so the dispatcher can count it instead of dropping it silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveMessage {
    #[serde(rename = "detection")]
    Detections {
        camera_id: CameraId,
        detections: Vec<Detection>,
    },
    Violation {
        camera_id: CameraId,
        violation_type: String,
        priority: Priority,
    },
    Stats {
        stats: DashboardStats,
    },
    CameraStatus {
        camera_id: CameraId,
        status: String,
    },
    #[serde(skip)]
    Unknown {
        kind: String,
    },
}

const KNOWN_KINDS: [&str; 4] = ["detection", "violation", "stats", "camera_status"];

impl LiveMessage {
    /// Parses one raw wire frame.
    ///
    /// An unrecognized (or missing) `type` discriminant yields
    /// `LiveMessage::Unknown` rather than an error; a frame that is not JSON
    /// at all, or carries a known discriminant with a broken payload, is a
    /// hard parse error for the transport to count.
    pub fn from_wire(raw: &str) -> anyhow::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("")
            .to_string();

        if !KNOWN_KINDS.contains(&kind.as_str()) {
            return Ok(LiveMessage::Unknown { kind });
        }

        Ok(serde_json::from_value(value)?)
    }

    /// The wire discriminant of this message.
    pub fn kind(&self) -> &str {
        match self {
            LiveMessage::Detections { .. } => KNOWN_KINDS[0],
            LiveMessage::Violation { .. } => KNOWN_KINDS[1],
            LiveMessage::Stats { .. } => KNOWN_KINDS[2],
            LiveMessage::CameraStatus { .. } => KNOWN_KINDS[3],
            LiveMessage::Unknown { kind } => kind.as_str(),
        }
    }
}
