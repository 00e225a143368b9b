//! Fill engines for the coloring canvas.
//!
//! - **Flood fill**: tolerance-based paint bucket bounded by line-art
//!   outlines (one-shot and budgeted variants)
//! - **Recolor**: non-contiguous color replacement across the whole image
//!
//! All engines operate in place on flat interleaved RGBA buffers; an
//! ndarray adapter is provided for array-shaped images.

pub mod chunked;
pub mod flood;
pub mod recolor;

pub use chunked::ChunkedFill;
pub use flood::{flood_fill, flood_fill_detailed, flood_fill_image, FillOutcome, FillReport};
pub use recolor::recolor_matching;
