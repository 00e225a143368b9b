//! Pixel color support for the fill engine.
//!
//! Colors travel through the host application as CSS-style `#RRGGBB`
//! strings and through pixel buffers as interleaved RGBA bytes. This
//! module holds the conversion between the two, plus the two policy
//! values the coloring game is built around:
//!
//! - **Tolerance**: flood fill absorbs JPEG/anti-aliasing noise by
//!   accepting pixels within a Manhattan color distance of the seed.
//! - **Outline brightness**: line-art outlines are near-black; a pixel
//!   with all channels below the brightness threshold is never filled.

/// Default flood-fill tolerance (sum of absolute RGB differences).
pub const DEFAULT_TOLERANCE: i32 = 50;

/// Brightness threshold for outline detection. A pixel whose R, G and B
/// are all strictly below this value counts as line art.
pub const OUTLINE_BRIGHTNESS: u8 = 100;

/// An opaque RGB color. Alpha is not carried here; the fill engine always
/// writes fully opaque pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` color string. The leading `#` is optional.
    ///
    /// Returns `None` for anything that is not exactly six hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

/// The ten crayon colors the painting game offers by default.
pub const DEFAULT_PALETTE: [Rgb; 10] = [
    Rgb::new(255, 107, 107), // #FF6B6B red/pink
    Rgb::new(78, 205, 196),  // #4ECDC4 teal
    Rgb::new(255, 230, 109), // #FFE66D yellow
    Rgb::new(149, 225, 211), // #95E1D3 mint
    Rgb::new(168, 208, 230), // #A8D0E6 light blue
    Rgb::new(247, 215, 148), // #F7D794 peach
    Rgb::new(119, 139, 235), // #778BEB blue
    Rgb::new(207, 106, 135), // #CF6A87 rose
    Rgb::new(248, 165, 194), // #F8A5C2 pink
    Rgb::new(231, 127, 103), // #E77F67 orange
];

/// Manhattan distance between two colors: `|Δr| + |Δg| + |Δb|`.
///
/// Computed in i32 so the channel subtraction cannot underflow.
/// Maximum value is 765.
#[inline]
pub fn manhattan_distance(a: Rgb, b: Rgb) -> i32 {
    (a.r as i32 - b.r as i32).abs()
        + (a.g as i32 - b.g as i32).abs()
        + (a.b as i32 - b.b as i32).abs()
}

/// Check whether a pixel belongs to the line-art outline.
///
/// All three channels must be strictly below [`OUTLINE_BRIGHTNESS`].
#[inline]
pub fn is_outline(r: u8, g: u8, b: u8) -> bool {
    r < OUTLINE_BRIGHTNESS && g < OUTLINE_BRIGHTNESS && b < OUTLINE_BRIGHTNESS
}
