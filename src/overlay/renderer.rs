use ab_glyph::{FontArc, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use super::colours;
use super::legend::{build_legend, LegendEntry};
use super::mapper::map_to_canvas;
use crate::common::{CanvasRect, Detection};

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Drawing parameters for the overlay. Defaults mirror the dashboard's
/// canvas styling: a 3px outline, a 28px label strip above each box, 14px
/// label text.
#[derive(Clone)]
pub struct OverlayStyle {
    /// Font used for label text. With no font loaded, label backgrounds are
    /// sized from a monospace estimate and the text itself is skipped.
    pub font: Option<FontArc>,
    pub box_thickness: u32,
    pub label_height: u32,
    pub text_height: f32,
    pub label_pad_x: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            font: None,
            box_thickness: 3,
            label_height: 28,
            text_height: 14.0,
            label_pad_x: 6,
        }
    }
}

impl OverlayStyle {
    pub fn with_font(mut self, font: FontArc) -> Self {
        self.font = Some(font);
        self
    }
}

/// What one render call put on screen, for the UI widgets next to the
/// canvas: the detection counter and the class legend.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub rendered: usize,
    pub legend: Vec<LegendEntry>,
}

/// Draws detection boxes, labels and the legend for the camera currently on
/// screen. Owns no state across frames; every call fully clears the canvas
/// before drawing.
#[derive(Default, Clone)]
pub struct OverlayRenderer {
    style: OverlayStyle,
}

impl OverlayRenderer {
    pub fn new(style: OverlayStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Clears the canvas and draws one frame of detections.
    ///
    /// An empty list leaves the canvas indistinguishable from never drawn to.
    /// A canvas that has not been laid out yet (zero dimension) is cleared
    /// and drawing is skipped entirely. A single detection that cannot be
    /// scaled is skipped on its own; the rest of the frame still renders.
    pub fn render(&self, canvas: &mut RgbaImage, detections: &[Detection]) -> RenderReport {
        for pixel in canvas.pixels_mut() {
            *pixel = CLEAR;
        }

        let (canvas_width, canvas_height) = canvas.dimensions();
        if canvas_width == 0 || canvas_height == 0 || detections.is_empty() {
            return RenderReport::default();
        }

        let mut drawn: Vec<&Detection> = Vec::with_capacity(detections.len());
        for detection in detections {
            let rect = map_to_canvas(detection, canvas_width, canvas_height);
            if rect.is_degenerate() {
                log::debug!(
                    "skipping detection '{}' with unscalable box ({}x{} source)",
                    detection.class,
                    detection.image_width,
                    detection.image_height
                );
                continue;
            }
            self.draw_detection(canvas, detection, &rect);
            drawn.push(detection);
        }

        RenderReport {
            rendered: drawn.len(),
            legend: build_legend(drawn.iter().copied()),
        }
    }

    fn draw_detection(&self, canvas: &mut RgbaImage, detection: &Detection, rect: &CanvasRect) {
        let colour = colours::get_class_colour(&detection.class);
        let (x, y, w, h) = rect.as_xy_wh_i32();

        // Hollow rects are one pixel wide; inset repeatedly to get a stroke.
        for inset in 0..self.style.box_thickness as i32 {
            let (iw, ih) = (w - 2 * inset, h - 2 * inset);
            if iw <= 0 || ih <= 0 {
                break;
            }
            draw_hollow_rect_mut(
                canvas,
                Rect::at(x + inset, y + inset).of_size(iw as u32, ih as u32),
                colour,
            );
        }

        let label = detection.label_text();
        let label_h = self.style.label_height as i32;
        let label_w = self.measure_text(&label) + 2 * self.style.label_pad_x;
        // The strip sits above the box; clamp so boxes near the top edge
        // still get a readable label.
        let label_y = (y - label_h).max(0);
        draw_filled_rect_mut(
            canvas,
            Rect::at(x, label_y).of_size(label_w.max(1) as u32, label_h.max(1) as u32),
            colour,
        );

        if let Some(font) = &self.style.font {
            let scale = PxScale::from(self.style.text_height);
            let text_y = label_y + (label_h - self.style.text_height as i32) / 2;
            draw_text_mut(
                canvas,
                colours::LABEL_TEXT,
                x + self.style.label_pad_x,
                text_y,
                scale,
                font,
                &label,
            );
        }
    }

    fn measure_text(&self, label: &str) -> i32 {
        match &self.style.font {
            Some(font) => text_size(PxScale::from(self.style.text_height), font, label).0 as i32,
            None => (label.chars().count() as f32 * self.style.text_height * 0.6).ceil() as i32,
        }
    }
}
