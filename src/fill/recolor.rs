//! Non-contiguous recolor: replace a color everywhere in the image.
//!
//! Connectivity is ignored; every pixel within tolerance of the reference
//! color is recolored, including disconnected regions. Rows are processed
//! in parallel.

use rayon::prelude::*;

use crate::color::{manhattan_distance, Rgb};

/// Recolor every pixel within `tolerance` of `reference`.
///
/// # Arguments
/// * `data` - RGBA buffer, mutated in place (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `reference` - Color to match (strict less-than Manhattan distance)
/// * `fill` - Replacement color; matched pixels become fully opaque
/// * `tolerance` - Maximum Manhattan color distance to `reference`
///
/// # Returns
/// Number of recolored pixels.
pub fn recolor_matching(
    data: &mut [u8],
    width: usize,
    height: usize,
    reference: Rgb,
    fill: Rgb,
    tolerance: i32,
) -> usize {
    assert_eq!(
        data.len(),
        width * height * 4,
        "buffer length must be width * height * 4"
    );
    if width == 0 || height == 0 {
        return 0;
    }

    data.par_chunks_mut(width * 4)
        .map(|row| {
            let mut count = 0;
            for px in row.chunks_exact_mut(4) {
                let current = Rgb::new(px[0], px[1], px[2]);
                if manhattan_distance(current, reference) < tolerance {
                    px[0] = fill.r;
                    px[1] = fill.g;
                    px[2] = fill.b;
                    px[3] = 255;
                    count += 1;
                }
            }
            count
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DEFAULT_TOLERANCE;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[test]
    fn test_recolors_disconnected_regions() {
        // 5x5 checkerboard: white on even parity, black on odd.
        let mut data = Vec::new();
        for y in 0..5 {
            for x in 0..5 {
                data.extend_from_slice(if (x + y) % 2 == 0 {
                    &[255, 255, 255, 255]
                } else {
                    &[0, 0, 0, 255]
                });
            }
        }

        let count = recolor_matching(&mut data, 5, 5, WHITE, RED, DEFAULT_TOLERANCE);

        assert_eq!(count, 13);
        for (i, px) in data.chunks_exact(4).enumerate() {
            let (x, y) = (i % 5, i / 5);
            if (x + y) % 2 == 0 {
                assert_eq!(px, [255, 0, 0, 255]);
            } else {
                assert_eq!(px, [0, 0, 0, 255]);
            }
        }
    }

    #[test]
    fn test_tolerance_is_strict() {
        // Distance to white: 0, 49, 50.
        let mut data = Vec::new();
        for v in [255u8, 206, 205] {
            data.extend_from_slice(&[255, 255, v, 255]);
        }

        let count = recolor_matching(&mut data, 3, 1, WHITE, RED, DEFAULT_TOLERANCE);

        assert_eq!(count, 2);
        assert_eq!(&data[8..12], [255, 255, 205, 255]);
    }

    #[test]
    fn test_no_matches_leaves_buffer_unchanged() {
        let mut data = [0, 0, 0, 255].repeat(4);
        let before = data.clone();

        let count = recolor_matching(&mut data, 2, 2, WHITE, RED, DEFAULT_TOLERANCE);

        assert_eq!(count, 0);
        assert_eq!(data, before);
    }

    #[test]
    fn test_empty_image() {
        let mut data = Vec::new();
        assert_eq!(recolor_matching(&mut data, 0, 0, WHITE, RED, 50), 0);
    }
}
