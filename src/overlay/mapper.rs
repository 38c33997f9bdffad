use crate::common::{CanvasRect, Detection};

/// Maps a detection's bounding box from source-image pixel space into canvas
/// pixel space.
///
/// `x' = x * canvas_width / image_width` and likewise for the other three
/// components, exactly. A canvas with no layout yet (zero dimension) or a
/// detection with a non-positive source resolution yields a degenerate
/// zero-area rect instead of failing, so the renderer can skip it.
pub fn map_to_canvas(detection: &Detection, canvas_width: u32, canvas_height: u32) -> CanvasRect {
    if canvas_width == 0 || canvas_height == 0 || !detection.is_scalable() {
        return CanvasRect::default();
    }

    let scale_x = canvas_width as f32 / detection.image_width;
    let scale_y = canvas_height as f32 / detection.image_height;

    CanvasRect::new(
        detection.x * scale_x,
        detection.y * scale_y,
        detection.width * scale_x,
        detection.height * scale_y,
    )
}
