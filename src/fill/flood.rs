//! Tolerance-based flood fill over a flat RGBA buffer.
//!
//! This is the paint-bucket of the coloring canvas: starting from a tapped
//! pixel, the contiguous region of similar color is recolored in place,
//! bounded by near-black line-art outlines and by the buffer edges.
//!
//! The similarity test always compares a pixel's current color against the
//! color sampled at the seed *before* the fill started, never against an
//! already-recolored neighbor. Comparing against the evolving fill color
//! instead would change the flood topology.

use ndarray::Array3;

use crate::color::{is_outline, manhattan_distance, Rgb};

/// Result of a fill request.
///
/// Only [`FillOutcome::InvalidCoordinate`] represents a caller error; the
/// other variants are ordinary results. Running the flood off the edge of
/// a color region or of the buffer is normal termination, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// The region was traversed and recolored.
    Filled,
    /// The seed landed on a line-art outline pixel; nothing was touched.
    /// The host typically voices a "color inside the lines" prompt.
    OutlineHit,
    /// The seed already has the fill color; nothing was touched.
    NoChange,
    /// The seed lies outside the buffer; nothing was touched.
    InvalidCoordinate,
}

impl FillOutcome {
    /// Stable string form, used by the Python bindings.
    pub fn as_str(self) -> &'static str {
        match self {
            FillOutcome::Filled => "filled",
            FillOutcome::OutlineHit => "outline_hit",
            FillOutcome::NoChange => "no_change",
            FillOutcome::InvalidCoordinate => "invalid_coordinate",
        }
    }

    /// Stable numeric form, used by the WASM bindings.
    pub fn code(self) -> u8 {
        match self {
            FillOutcome::Filled => 0,
            FillOutcome::OutlineHit => 1,
            FillOutcome::NoChange => 2,
            FillOutcome::InvalidCoordinate => 3,
        }
    }
}

/// Fill result with region metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillReport {
    pub outcome: FillOutcome,
    /// Number of recolored pixels.
    pub pixel_count: usize,
    /// Bounds of the recolored region as (x, y, width, height).
    pub bounds: Option<(usize, usize, usize, usize)>,
}

/// Running bounds and count of the recolored region.
pub(crate) struct RegionStats {
    pub(crate) pixel_count: usize,
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl RegionStats {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            pixel_count: 0,
            min_x: width,
            min_y: height,
            max_x: 0,
            max_y: 0,
        }
    }

    fn record(&mut self, x: usize, y: usize) {
        self.pixel_count += 1;
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub(crate) fn bounds(&self) -> Option<(usize, usize, usize, usize)> {
        if self.pixel_count > 0 {
            Some((
                self.min_x,
                self.min_y,
                self.max_x - self.min_x + 1,
                self.max_y - self.min_y + 1,
            ))
        } else {
            None
        }
    }
}

/// Validate the fill request and sample the seed color.
///
/// Returns the seed color when the traversal should run, or the early-exit
/// outcome otherwise. Checked in order: bounds, outline, same color.
pub(crate) fn check_seed(
    data: &[u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    fill: Rgb,
) -> Result<Rgb, FillOutcome> {
    assert_eq!(
        data.len(),
        width * height * 4,
        "buffer length must be width * height * 4"
    );

    if width == 0 || height == 0 || x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return Err(FillOutcome::InvalidCoordinate);
    }

    let pos = (y as usize * width + x as usize) * 4;
    let seed = Rgb::new(data[pos], data[pos + 1], data[pos + 2]);

    if is_outline(seed.r, seed.g, seed.b) {
        return Err(FillOutcome::OutlineHit);
    }
    if seed == fill {
        return Err(FillOutcome::NoChange);
    }

    Ok(seed)
}

/// Process one popped coordinate: bounds-check, tolerance test against the
/// seed color, recolor, and push the four 4-connected neighbors.
///
/// Out-of-bounds and already-visited coordinates are silently dropped.
/// Shared by the one-shot and the budgeted fill loops.
pub(crate) fn process_pop(
    data: &mut [u8],
    width: usize,
    height: usize,
    seed: Rgb,
    fill: Rgb,
    tolerance: i32,
    x: i32,
    y: i32,
    visited: &mut [bool],
    stack: &mut Vec<(i32, i32)>,
    stats: &mut RegionStats,
) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let (xu, yu) = (x as usize, y as usize);
    let pix = yu * width + xu;
    if visited[pix] {
        return;
    }
    visited[pix] = true;

    let pos = pix * 4;
    let current = Rgb::new(data[pos], data[pos + 1], data[pos + 2]);

    if manhattan_distance(current, seed) < tolerance {
        data[pos] = fill.r;
        data[pos + 1] = fill.g;
        data[pos + 2] = fill.b;
        data[pos + 3] = 255;
        stats.record(xu, yu);

        stack.push((x + 1, y));
        stack.push((x - 1, y));
        stack.push((x, y + 1));
        stack.push((x, y - 1));
    }
}

/// Flood-fill a contiguous region of similar color.
///
/// # Arguments
/// * `data` - RGBA buffer, mutated in place (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `x`, `y` - Seed coordinate; out-of-bounds values are rejected
/// * `fill` - Replacement color; filled pixels become fully opaque
/// * `tolerance` - Maximum Manhattan color distance to the seed color
///   (strict less-than; [`crate::color::DEFAULT_TOLERANCE`] is the usual value)
///
/// # Returns
/// The fill outcome. The buffer is untouched unless the outcome is
/// [`FillOutcome::Filled`].
pub fn flood_fill(
    data: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    fill: Rgb,
    tolerance: i32,
) -> FillOutcome {
    flood_fill_detailed(data, width, height, x, y, fill, tolerance).outcome
}

/// Flood-fill with region metadata.
///
/// Same contract as [`flood_fill`], additionally reporting how many pixels
/// were recolored and their bounding box.
pub fn flood_fill_detailed(
    data: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    fill: Rgb,
    tolerance: i32,
) -> FillReport {
    let seed = match check_seed(data, width, height, x, y, fill) {
        Ok(seed) => seed,
        Err(outcome) => {
            return FillReport {
                outcome,
                pixel_count: 0,
                bounds: None,
            }
        }
    };

    let mut visited = vec![false; width * height];
    let mut stack = vec![(x, y)];
    let mut stats = RegionStats::new(width, height);

    while let Some((x, y)) = stack.pop() {
        process_pop(
            data,
            width,
            height,
            seed,
            fill,
            tolerance,
            x,
            y,
            &mut visited,
            &mut stack,
            &mut stats,
        );
    }

    FillReport {
        outcome: FillOutcome::Filled,
        pixel_count: stats.pixel_count,
        bounds: stats.bounds(),
    }
}

// ============================================================================
// ndarray Adapter
// ============================================================================

/// Flood-fill an `(height, width, 4)` RGBA array in place.
///
/// Array-shaped counterpart of [`flood_fill`] for callers holding ndarray
/// images rather than flat buffers.
pub fn flood_fill_image(
    image: &mut Array3<u8>,
    x: i32,
    y: i32,
    fill: Rgb,
    tolerance: i32,
) -> FillOutcome {
    let (height, width, channels) = image.dim();
    assert_eq!(channels, 4, "expected RGBA image");

    let data = image.as_slice_mut().expect("contiguous RGBA array");
    flood_fill(data, width, height, x, y, fill, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DEFAULT_TOLERANCE;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];
    const RED: Rgb = Rgb::new(255, 0, 0);

    /// 4x4 all-white image with column 0 pure black (a vertical outline).
    fn outlined_4x4() -> Vec<u8> {
        let mut data = Vec::with_capacity(4 * 4 * 4);
        for _y in 0..4 {
            for x in 0..4 {
                data.extend_from_slice(if x == 0 { &BLACK } else { &WHITE });
            }
        }
        data
    }

    fn pixel(data: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let pos = (y * width + x) * 4;
        [data[pos], data[pos + 1], data[pos + 2], data[pos + 3]]
    }

    // ========================================================================
    // Concrete Scenarios
    // ========================================================================

    #[test]
    fn test_fill_respects_vertical_outline() {
        let mut data = outlined_4x4();

        let outcome = flood_fill(&mut data, 4, 4, 2, 2, RED, DEFAULT_TOLERANCE);

        assert_eq!(outcome, FillOutcome::Filled);
        for y in 0..4 {
            assert_eq!(pixel(&data, 4, 0, y), BLACK);
            for x in 1..4 {
                assert_eq!(pixel(&data, 4, x, y), [255, 0, 0, 255]);
            }
        }
    }

    #[test]
    fn test_seed_on_outline_is_rejected() {
        let mut data = outlined_4x4();
        let before = data.clone();

        let outcome = flood_fill(&mut data, 4, 4, 0, 0, RED, DEFAULT_TOLERANCE);

        assert_eq!(outcome, FillOutcome::OutlineHit);
        assert_eq!(data, before);
    }

    #[test]
    fn test_seed_out_of_bounds_is_rejected() {
        let mut data = outlined_4x4();
        let before = data.clone();

        for (x, y) in [(5, 5), (-1, 0), (0, -1), (4, 0), (0, 4)] {
            let outcome = flood_fill(&mut data, 4, 4, x, y, RED, DEFAULT_TOLERANCE);
            assert_eq!(outcome, FillOutcome::InvalidCoordinate, "seed ({x}, {y})");
        }
        assert_eq!(data, before);
    }

    // ========================================================================
    // Region Semantics
    // ========================================================================

    #[test]
    fn test_uniform_region_fills_everything() {
        let mut data = WHITE.repeat(5 * 5);

        let outcome = flood_fill(&mut data, 5, 5, 2, 2, RED, DEFAULT_TOLERANCE);

        assert_eq!(outcome, FillOutcome::Filled);
        for chunk in data.chunks_exact(4) {
            assert_eq!(chunk, [255, 0, 0, 255]);
        }
    }

    #[test]
    fn test_second_fill_is_no_change() {
        let mut data = outlined_4x4();

        assert_eq!(
            flood_fill(&mut data, 4, 4, 2, 2, RED, DEFAULT_TOLERANCE),
            FillOutcome::Filled
        );
        let after_first = data.clone();

        assert_eq!(
            flood_fill(&mut data, 4, 4, 2, 2, RED, DEFAULT_TOLERANCE),
            FillOutcome::NoChange
        );
        assert_eq!(data, after_first);
    }

    #[test]
    fn test_closed_outline_contains_fill() {
        // 8x8 white image with a closed black ring on rows/cols 1..=6.
        let mut data = WHITE.repeat(8 * 8);
        for i in 1..=6 {
            for (x, y) in [(i, 1), (i, 6), (1, i), (6, i)] {
                let pos = (y * 8 + x) * 4;
                data[pos..pos + 4].copy_from_slice(&BLACK);
            }
        }

        // Fill from every interior seed; the outside must never change.
        for sy in 2..=5 {
            for sx in 2..=5 {
                let mut run = data.clone();
                let report =
                    flood_fill_detailed(&mut run, 8, 8, sx, sy, RED, DEFAULT_TOLERANCE);

                assert_eq!(report.outcome, FillOutcome::Filled);
                assert_eq!(report.pixel_count, 16);
                assert_eq!(report.bounds, Some((2, 2, 4, 4)));
                for y in 0..8usize {
                    for x in 0..8usize {
                        let inside = (2..=5).contains(&x) && (2..=5).contains(&y);
                        let on_ring = (1..=6).contains(&x)
                            && (1..=6).contains(&y)
                            && (x == 1 || x == 6 || y == 1 || y == 6);
                        let expected = if inside {
                            [255, 0, 0, 255]
                        } else if on_ring {
                            BLACK
                        } else {
                            WHITE
                        };
                        assert_eq!(pixel(&run, 8, x, y), expected, "pixel ({x}, {y})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_tolerance_compares_against_seed_color() {
        // 4x1 row fading away from the seed: 255, 230, 200, 150.
        // Distances to the seed (255): 0, 25, 55, 105. With tolerance 50
        // only the first two pixels are under the threshold, even though
        // each pixel is within 50 of its direct neighbor.
        let mut data = Vec::new();
        for v in [255u8, 230, 200, 150] {
            data.extend_from_slice(&[v, v, v, 255]);
        }

        let report = flood_fill_detailed(&mut data, 4, 1, 0, 0, RED, DEFAULT_TOLERANCE);

        assert_eq!(report.outcome, FillOutcome::Filled);
        assert_eq!(report.pixel_count, 2);
        assert_eq!(pixel(&data, 4, 0, 0), [255, 0, 0, 255]);
        assert_eq!(pixel(&data, 4, 1, 0), [255, 0, 0, 255]);
        assert_eq!(pixel(&data, 4, 2, 0), [200, 200, 200, 255]);
        assert_eq!(pixel(&data, 4, 3, 0), [150, 150, 150, 255]);
    }

    #[test]
    fn test_fill_color_within_tolerance_terminates() {
        // Fill color 45 away from the seed color: recolored pixels would
        // still pass the threshold test if revisited. The visited bitmap
        // keeps this from looping.
        let mut data = WHITE.repeat(3 * 3);
        let near_white = Rgb::new(240, 240, 240);

        let report = flood_fill_detailed(&mut data, 3, 3, 1, 1, near_white, DEFAULT_TOLERANCE);

        assert_eq!(report.outcome, FillOutcome::Filled);
        assert_eq!(report.pixel_count, 9);
        for chunk in data.chunks_exact(4) {
            assert_eq!(chunk, [240, 240, 240, 255]);
        }
    }

    #[test]
    fn test_zero_tolerance_recolors_nothing() {
        // Strict less-than: even the seed pixel itself is not under a
        // tolerance of zero.
        let mut data = WHITE.repeat(2 * 2);
        let before = data.clone();

        let report = flood_fill_detailed(&mut data, 2, 2, 0, 0, RED, 0);

        assert_eq!(report.outcome, FillOutcome::Filled);
        assert_eq!(report.pixel_count, 0);
        assert_eq!(report.bounds, None);
        assert_eq!(data, before);
    }

    #[test]
    fn test_outline_checked_before_no_change() {
        // Black seed, black fill: the outline rule wins over same-color.
        let mut data = BLACK.repeat(2 * 2);

        let outcome = flood_fill(&mut data, 2, 2, 0, 0, Rgb::new(0, 0, 0), DEFAULT_TOLERANCE);

        assert_eq!(outcome, FillOutcome::OutlineHit);
    }

    #[test]
    fn test_filled_pixels_become_opaque() {
        let mut data = vec![255, 255, 255, 0, 255, 255, 255, 0];

        flood_fill(&mut data, 2, 1, 0, 0, RED, DEFAULT_TOLERANCE);

        assert_eq!(pixel(&data, 2, 0, 0), [255, 0, 0, 255]);
        assert_eq!(pixel(&data, 2, 1, 0), [255, 0, 0, 255]);
    }

    #[test]
    fn test_detailed_report_for_outlined_image() {
        let mut data = outlined_4x4();

        let report = flood_fill_detailed(&mut data, 4, 4, 2, 2, RED, DEFAULT_TOLERANCE);

        assert_eq!(report.outcome, FillOutcome::Filled);
        assert_eq!(report.pixel_count, 12);
        assert_eq!(report.bounds, Some((1, 0, 3, 4)));
    }

    // ========================================================================
    // ndarray Adapter
    // ========================================================================

    #[test]
    fn test_array_adapter_matches_slice_fill() {
        let flat = outlined_4x4();
        let mut image = Array3::from_shape_vec((4, 4, 4), flat.clone()).unwrap();
        let mut slice = flat;

        let outcome = flood_fill_image(&mut image, 2, 2, RED, DEFAULT_TOLERANCE);
        flood_fill(&mut slice, 4, 4, 2, 2, RED, DEFAULT_TOLERANCE);

        assert_eq!(outcome, FillOutcome::Filled);
        assert_eq!(image.as_slice().unwrap(), slice.as_slice());
    }
}
