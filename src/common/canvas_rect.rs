/// A detection box mapped into canvas pixel space. Coordinates stay
/// sub-pixel; rounding only happens at draw time.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl CanvasRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Computes the area of the rect.
    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// A zero-area rect; produced by the mapper for inputs it cannot scale.
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Returns the rect as `(x, y, w, h)` rounded to whole pixels.
    pub fn as_xy_wh_i32(&self) -> (i32, i32, i32, i32) {
        (
            self.x.round() as i32,
            self.y.round() as i32,
            self.w.round() as i32,
            self.h.round() as i32,
        )
    }
}
