use serde::{Deserialize, Serialize};

/// One object observed in one video frame. The bounding box is expressed in
/// the pixel space of the source image it was computed against
/// (`image_width` x `image_height`, top-left origin), never in canvas space.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub class: String,
    pub confidence: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub image_width: f32,
    pub image_height: f32,
}

impl Detection {
    pub fn new(class: &str, confidence: f32) -> Self {
        Self {
            class: class.to_string(),
            confidence,
            ..Default::default()
        }
    }

    /// Sets the bounding box using `(x, y, w, h)` in source-image pixels.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the top-left corner.
    /// * `y` - The y-coordinate of the top-left corner.
    /// * `width` - The width of the bounding box.
    /// * `height` - The height of the bounding box.
    ///
    /// # Returns
    ///
    /// A `Detection` instance with updated coordinates and dimensions.
    pub fn with_bbox(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the resolution of the source image the box was computed against.
    ///
    /// # Arguments
    ///
    /// * `image_width` - Source image width in pixels.
    /// * `image_height` - Source image height in pixels.
    ///
    /// # Returns
    ///
    /// A `Detection` instance with an updated source resolution.
    pub fn with_source_size(mut self, image_width: f32, image_height: f32) -> Self {
        self.image_width = image_width;
        self.image_height = image_height;
        self
    }

    /// Sets the confidence score of the detection.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// True when the source resolution can be scaled against. A detection
    /// that fails this check maps to a degenerate rect and is skipped by the
    /// renderer instead of blanking the frame.
    pub fn is_scalable(&self) -> bool {
        self.image_width > 0.0 && self.image_height > 0.0
    }

    /// The overlay label, e.g. `person 95%`.
    pub fn label_text(&self) -> String {
        format!("{} {:.0}%", self.class, self.confidence * 100.0)
    }
}
