//! Colour scales and fixed view colours.
//!
//! Scales are evenly spaced stops sampled with linear interpolation in sRGB.

use serde::Serialize;
use std::fmt;

/// 8-bit sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Outline of selected countries (`#0079c9`).
pub const SELECTION_OUTLINE: Rgb = Rgb(0x00, 0x79, 0xc9);

/// Trend line colours.
pub const INFECTIONS_LINE: Rgb = Rgb(0xd6, 0x00, 0x00);
pub const DEATHS_LINE: Rgb = Rgb(0x00, 0x00, 0x00);
pub const VACCINATIONS_LINE: Rgb = Rgb(0x00, 0x79, 0xc9);

/// Dashed date marker on the trend chart.
pub const DATE_MARKER: Rgb = Rgb(0x80, 0x00, 0x80);

const REDS: [Rgb; 9] = [
    Rgb(255, 245, 240),
    Rgb(254, 224, 210),
    Rgb(252, 187, 161),
    Rgb(252, 146, 114),
    Rgb(251, 106, 74),
    Rgb(239, 59, 44),
    Rgb(203, 24, 29),
    Rgb(165, 15, 21),
    Rgb(103, 0, 13),
];

const GREYS: [Rgb; 9] = [
    Rgb(255, 255, 255),
    Rgb(240, 240, 240),
    Rgb(217, 217, 217),
    Rgb(189, 189, 189),
    Rgb(150, 150, 150),
    Rgb(115, 115, 115),
    Rgb(82, 82, 82),
    Rgb(37, 37, 37),
    Rgb(0, 0, 0),
];

// Light to dark, i.e. the reversed "ice" scale.
const ICE_REVERSED: [Rgb; 12] = [
    Rgb(234, 252, 253),
    Rgb(192, 229, 232),
    Rgb(149, 207, 216),
    Rgb(114, 184, 205),
    Rgb(89, 159, 196),
    Rgb(72, 134, 187),
    Rgb(62, 109, 178),
    Rgb(62, 83, 160),
    Rgb(58, 60, 125),
    Rgb(44, 42, 87),
    Rgb(25, 25, 51),
    Rgb(3, 5, 18),
];

/// Sequential scale used for the choropleth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColorScale {
    Reds,
    Greys,
    IceReversed,
}

impl ColorScale {
    pub fn stops(&self) -> &'static [Rgb] {
        match self {
            ColorScale::Reds => &REDS,
            ColorScale::Greys => &GREYS,
            ColorScale::IceReversed => &ICE_REVERSED,
        }
    }

    /// Colour at position `t` in `[0, 1]`; values outside are clamped.
    pub fn sample(&self, t: f64) -> Rgb {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = t * (stops.len() - 1) as f64;
        let lo = pos.floor() as usize;
        let hi = (lo + 1).min(stops.len() - 1);
        Rgb::lerp(stops[lo], stops[hi], pos - lo as f64)
    }

    /// Colour for `value` on the range `(min, max)`.
    ///
    /// A degenerate range maps everything to the first stop.
    pub fn color_for(&self, value: f64, (min, max): (f64, f64)) -> Rgb {
        if max > min {
            self.sample((value - min) / (max - min))
        } else {
            self.stops()[0]
        }
    }
}
