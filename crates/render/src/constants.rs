/// Default preview canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 200;

/// Default preview canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 200;

/// Narrowest stroke a backend draws; canvas contexts ignore a width of 0.
pub const HAIRLINE_WIDTH: f32 = 1.0;

/// Fully transparent premultiplied pixel.
pub const TRANSPARENT: [f32; 4] = [0.0, 0.0, 0.0, 0.0];
