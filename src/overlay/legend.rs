use image::Rgba;

use super::colours;
use crate::common::Detection;

/// One legend row exposed to the UI: class name, how many boxes of that
/// class are on screen, and the colour they were drawn in.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub class: String,
    pub count: usize,
    pub colour: Rgba<u8>,
}

/// Occurrence counts per class, in order of first appearance. The order is
/// cosmetic but stable: the same detection list always produces the same
/// legend.
pub fn build_legend<'a>(detections: impl IntoIterator<Item = &'a Detection>) -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = Vec::new();
    for detection in detections {
        match entries.iter_mut().find(|e| e.class == detection.class) {
            Some(entry) => entry.count += 1,
            None => entries.push(LegendEntry {
                class: detection.class.clone(),
                count: 1,
                colour: colours::get_class_colour(&detection.class),
            }),
        }
    }
    entries
}
