//! Display-space to buffer-space coordinate mapping.
//!
//! The coloring canvas renders a fixed-size pixel buffer scaled to fit the
//! display. A pointer position therefore has to be scaled back into buffer
//! coordinates before it can seed a fill. Coordinates come back signed and
//! unclamped; the fill engine's own bounds check stays authoritative, so a
//! tap just outside the canvas turns into an `InvalidCoordinate` outcome
//! rather than a wrapped index.

/// Edge length of the coloring canvas, in pixels.
pub const CANVAS_SIZE: usize = 512;

/// Mapping from a scaled display rectangle to the underlying pixel buffer.
#[derive(Debug, Clone, Copy)]
pub struct DisplayMapping {
    pub buffer_width: usize,
    pub buffer_height: usize,
    pub display_width: f32,
    pub display_height: f32,
}

impl DisplayMapping {
    pub fn new(
        buffer_width: usize,
        buffer_height: usize,
        display_width: f32,
        display_height: f32,
    ) -> Self {
        Self {
            buffer_width,
            buffer_height,
            display_width,
            display_height,
        }
    }

    /// Convert a pointer position (relative to the display rectangle's
    /// top-left corner) into buffer coordinates.
    ///
    /// Scales by `buffer / display` per axis and floors, matching how the
    /// tapped pixel is resolved on a scaled canvas.
    pub fn to_buffer(&self, display_x: f32, display_y: f32) -> (i32, i32) {
        let scale_x = self.buffer_width as f32 / self.display_width;
        let scale_y = self.buffer_height as f32 / self.display_height;
        (
            (display_x * scale_x).floor() as i32,
            (display_y * scale_y).floor() as i32,
        )
    }
}
