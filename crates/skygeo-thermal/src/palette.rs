//! Fixed false-color palettes.
//!
//! Each palette is a pure function from a normalized grayscale value
//! (nominally `[0, 255]`, out-of-range input is clamped at the lookup) to
//! an RGB triple. The exact stop positions and band thresholds are
//! empirically tuned visual contracts; changing them changes the look of
//! every existing report, so they are pinned by tests.

use serde::{Deserialize, Serialize};

/// Display color, 8 bits per channel.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Closed set of thermal display palettes.
///
/// Serialized in snake_case, matching the palette keys the dashboard
/// persists in report settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMap {
    WhiteHot,
    BlackHot,
    Ironbow,
    IronRed,
    Rainbow,
    RainbowIsh,
    MinMax,
    WhSpecial,
}

/// MinMax: readings in the lowest band render solid blue, the highest
/// band solid red, everything between plain grayscale.
const MINMAX_LOW: f64 = 25.0;
const MINMAX_HIGH: f64 = 230.0;
const MINMAX_COLD: Rgb = Rgb::new(64, 96, 255);
const MINMAX_HOT: Rgb = Rgb::new(255, 64, 32);

/// WhSpecial: white-hot body with the hottest band sweeping to red.
const WHSPECIAL_SPLIT: f64 = 230.0;

impl ColorMap {
    /// Map a normalized grayscale value to a display color.
    pub fn apply(self, gray: f64) -> Rgb {
        let v = gray.clamp(0.0, 255.0);
        let t = v / 255.0;
        match self {
            ColorMap::WhiteHot => {
                let g = v as u8;
                Rgb::new(g, g, g)
            }
            ColorMap::BlackHot => {
                let g = (255.0 - v) as u8;
                Rgb::new(g, g, g)
            }
            ColorMap::Ironbow => gradient(&IRONBOW_STOPS, t),
            ColorMap::IronRed => gradient(&IRONRED_STOPS, t),
            ColorMap::Rainbow => hsl_to_rgb(240.0 * (1.0 - t), 1.0, 0.5),
            ColorMap::RainbowIsh => hsl_to_rgb(270.0 - 240.0 * t, 0.9, 0.25 + 0.5 * t),
            ColorMap::MinMax => {
                if v < MINMAX_LOW {
                    MINMAX_COLD
                } else if v > MINMAX_HIGH {
                    MINMAX_HOT
                } else {
                    let g = v as u8;
                    Rgb::new(g, g, g)
                }
            }
            ColorMap::WhSpecial => {
                if v <= WHSPECIAL_SPLIT {
                    let g = v as u8;
                    Rgb::new(g, g, g)
                } else {
                    // sweep the hot tail from white-ish toward pure red
                    let tail = (v - WHSPECIAL_SPLIT) / (255.0 - WHSPECIAL_SPLIT);
                    let g = (255.0 * (1.0 - tail)) as u8;
                    Rgb::new(255, g, g)
                }
            }
        }
    }
}

/// Piecewise-linear gradient stops, position in `[0, 1]`.
type Stops<const N: usize> = [(f64, [f64; 3]); N];

const IRONBOW_STOPS: Stops<6> = [
    (0.00, [0.0, 0.0, 0.0]),
    (0.10, [32.0, 0.0, 92.0]),
    (0.35, [140.0, 0.0, 150.0]),
    (0.60, [230.0, 60.0, 0.0]),
    (0.85, [255.0, 165.0, 0.0]),
    (1.00, [255.0, 255.0, 220.0]),
];

const IRONRED_STOPS: Stops<5> = [
    (0.00, [0.0, 0.0, 0.0]),
    (0.25, [96.0, 8.0, 8.0]),
    (0.50, [200.0, 30.0, 10.0]),
    (0.75, [255.0, 120.0, 30.0]),
    (1.00, [255.0, 235.0, 190.0]),
];

fn gradient<const N: usize>(stops: &Stops<N>, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            return Rgb::new(
                (c0[0] + (c1[0] - c0[0]) * f) as u8,
                (c0[1] + (c1[1] - c0[1]) * f) as u8,
                (c0[2] + (c1[2] - c0[2]) * f) as u8,
            );
        }
    }
    let last = stops[N - 1].1;
    Rgb::new(last[0] as u8, last[1] as u8, last[2] as u8)
}

/// HSL to RGB, hue in degrees, saturation and lightness in `[0, 1]`.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}
