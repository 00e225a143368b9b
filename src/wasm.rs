//! WebAssembly exports for the fill engines.
//!
//! These functions are exposed to JavaScript via wasm-bindgen for the
//! canvas-based painting view. The wasm boundary is copy-in/copy-out:
//! `ImageData` bytes come in as a flat RGBA array and the mutated buffer
//! is returned as a new array for `putImageData`.

use wasm_bindgen::prelude::*;

use crate::color::Rgb;
use crate::fill::{flood_fill, recolor_matching};

/// Flood-fill an RGBA image from a seed coordinate.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `x`, `y` - Seed coordinate in buffer space (may be out of bounds)
/// * `r`, `g`, `b` - Fill color
/// * `tolerance` - Maximum Manhattan color distance to the seed color
///
/// # Returns
/// The filled image as a new flat RGBA array. Unchanged from the input
/// when the fill exits early (outline hit, same color, bad coordinate).
#[wasm_bindgen]
pub fn flood_fill_rgba_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    r: u8,
    g: u8,
    b: u8,
    tolerance: i32,
) -> Vec<u8> {
    let mut buffer = data.to_vec();
    flood_fill(&mut buffer, width, height, x, y, Rgb::new(r, g, b), tolerance);
    buffer
}

/// Outcome code of a flood fill, without the pixels.
///
/// Runs the fill on a scratch copy so the caller can react to the outcome
/// (e.g. voice a "color inside the lines" prompt) before deciding to fetch
/// the filled image.
///
/// # Returns
/// 0 = filled, 1 = outline hit, 2 = no change, 3 = invalid coordinate
#[wasm_bindgen]
pub fn flood_fill_outcome_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    r: u8,
    g: u8,
    b: u8,
    tolerance: i32,
) -> u8 {
    let mut buffer = data.to_vec();
    flood_fill(&mut buffer, width, height, x, y, Rgb::new(r, g, b), tolerance).code()
}

/// Recolor every pixel within `tolerance` of the reference color,
/// connectivity ignored.
///
/// # Returns
/// The recolored image as a new flat RGBA array.
#[wasm_bindgen]
pub fn recolor_matching_rgba_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    ref_r: u8,
    ref_g: u8,
    ref_b: u8,
    fill_r: u8,
    fill_g: u8,
    fill_b: u8,
    tolerance: i32,
) -> Vec<u8> {
    let mut buffer = data.to_vec();
    recolor_matching(
        &mut buffer,
        width,
        height,
        Rgb::new(ref_r, ref_g, ref_b),
        Rgb::new(fill_r, fill_g, fill_b),
        tolerance,
    );
    buffer
}

/// Parse a `#RRGGBB` color string into `[r, g, b]`.
///
/// Returns an empty array when the string is not a valid hex color.
#[wasm_bindgen]
pub fn parse_hex_color_wasm(hex: &str) -> Vec<u8> {
    match Rgb::from_hex(hex) {
        Some(color) => vec![color.r, color.g, color.b],
        None => Vec::new(),
    }
}
