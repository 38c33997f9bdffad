use std::time::Instant;

/// Frames-per-second estimator: frame arrivals increment a counter, a
/// repeating 1-second tick samples and resets it. Time is passed in so the
/// arithmetic is testable without sleeping.
#[derive(Debug)]
pub struct FpsCounter {
    frames: u32,
    last_sample: Instant,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            frames: 0,
            last_sample: now,
        }
    }

    pub fn frame_hit(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn clear(&mut self) {
        self.frames = 0;
        self.last_sample = Instant::now();
    }

    /// FPS over the window since the previous sample, rounded. Resets the
    /// counter and the window so no frame is counted twice across ticks.
    pub fn sample(&mut self, now: Instant) -> u32 {
        let elapsed = now.duration_since(self.last_sample).as_secs_f64();
        let fps = if elapsed > 0.0 {
            (self.frames as f64 / elapsed).round() as u32
        } else {
            0
        };
        self.frames = 0;
        self.last_sample = now;
        fps
    }
}
