use image::Rgba;

/// Label text is always drawn in the same contrasting colour.
pub const LABEL_TEXT: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Classes outside the palette all get this one colour.
pub const DEFAULT_CLASS: Rgba<u8> = Rgba([0x63, 0x66, 0xf1, 0xff]);

/// Fixed palette keyed by class name, case-insensitive. The same input class
/// must produce the same colour on every render.
pub fn get_class_colour(class: &str) -> Rgba<u8> {
    match class.to_lowercase().as_str() {
        "person" => Rgba([0x22, 0xc5, 0x5e, 0xff]),     // green
        "car" => Rgba([0x3b, 0x82, 0xf6, 0xff]),        // blue
        "truck" => Rgba([0xf5, 0x9e, 0x0b, 0xff]),      // amber
        "motorcycle" => Rgba([0xef, 0x44, 0x44, 0xff]), // red
        "bicycle" => Rgba([0x8b, 0x5c, 0xf6, 0xff]),    // violet
        "bus" => Rgba([0xec, 0x48, 0x99, 0xff]),        // pink
        "helmet" => Rgba([0x10, 0xb9, 0x81, 0xff]),
        "no_helmet" => Rgba([0xdc, 0x26, 0x26, 0xff]),
        _ => DEFAULT_CLASS,
    }
}
