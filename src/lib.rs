//! Paintbox Rust Extensions
//!
//! Fill engines for a tap-to-color painting canvas, implemented in Rust
//! with optional Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! All engines operate on 8-bit RGBA images, either as flat interleaved
//! byte buffers (length = width * height * 4, the `ImageData` layout) or
//! as `(height, width, 4)` ndarray views.
//!
//! ## Fill Policy
//! Line-art coloring pages arrive as compressed images, so region
//! membership is tolerance-based: a pixel joins the fill when the
//! Manhattan distance of its current color to the color sampled at the
//! seed is under the tolerance. Near-black pixels are treated as outline
//! and are never used as a seed.

pub mod canvas;
pub mod color;
pub mod fill;

#[cfg(feature = "wasm")]
pub mod wasm;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::prelude::*;

    use crate::color::Rgb;
    use crate::fill;

    /// Flood-fill an RGBA image from a seed coordinate.
    ///
    /// # Arguments
    /// * `image` - Input image of shape (height, width, 4), u8
    /// * `x`, `y` - Seed coordinate (may be out of bounds)
    /// * `r`, `g`, `b` - Fill color
    /// * `tolerance` - Maximum Manhattan color distance to the seed color
    ///
    /// # Returns
    /// Tuple of the filled image copy and the outcome string: one of
    /// `"filled"`, `"outline_hit"`, `"no_change"`, `"invalid_coordinate"`.
    #[pyfunction]
    #[pyo3(signature = (image, x, y, r, g, b, tolerance=50))]
    pub fn flood_fill<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        x: i32,
        y: i32,
        r: u8,
        g: u8,
        b: u8,
        tolerance: i32,
    ) -> (Bound<'py, PyArray3<u8>>, &'static str) {
        let mut owned = image.as_array().to_owned();
        let (height, width, channels) = owned.dim();
        assert_eq!(channels, 4, "expected RGBA image");

        let outcome = {
            let data = owned.as_slice_mut().expect("contiguous RGBA array");
            fill::flood_fill(data, width, height, x, y, Rgb::new(r, g, b), tolerance)
        };

        (owned.into_pyarray(py), outcome.as_str())
    }

    /// Recolor every pixel within tolerance of a reference color,
    /// connectivity ignored.
    ///
    /// # Returns
    /// Tuple of the recolored image copy and the recolored pixel count.
    #[pyfunction]
    #[pyo3(signature = (image, ref_r, ref_g, ref_b, fill_r, fill_g, fill_b, tolerance=50))]
    pub fn recolor_matching<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        ref_r: u8,
        ref_g: u8,
        ref_b: u8,
        fill_r: u8,
        fill_g: u8,
        fill_b: u8,
        tolerance: i32,
    ) -> (Bound<'py, PyArray3<u8>>, usize) {
        let mut owned = image.as_array().to_owned();
        let (height, width, channels) = owned.dim();
        assert_eq!(channels, 4, "expected RGBA image");

        let count = {
            let data = owned.as_slice_mut().expect("contiguous RGBA array");
            fill::recolor_matching(
                data,
                width,
                height,
                Rgb::new(ref_r, ref_g, ref_b),
                Rgb::new(fill_r, fill_g, fill_b),
                tolerance,
            )
        };

        (owned.into_pyarray(py), count)
    }

    /// Paintbox Rust extension module
    #[pymodule]
    pub fn paintbox_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(flood_fill, m)?)?;
        m.add_function(wrap_pyfunction!(recolor_matching, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::paintbox_rust;
