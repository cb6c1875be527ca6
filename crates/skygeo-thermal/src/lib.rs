//! False-color rendering of per-pixel temperature matrices.
//!
//! The thermal data source hands over a rectangular matrix of raw
//! temperature readings plus the display range; this crate normalizes the
//! readings, applies one of the fixed palettes, and produces an RGBA
//! raster. Out-of-range pixels keep their palette color but recede to
//! ~30% opacity so saturation stays visible without hiding structure.
//!
//! [`probe`] backs the interactive "hover to read temperature" tooling:
//! max/min over a small window around the cursor.

mod colorize;
mod matrix;
mod palette;

pub use colorize::{colorize, write_png, RgbaRaster, OUT_OF_RANGE_ALPHA};
pub use matrix::{probe, ProbeStats, TemperatureMatrix, ThermalError};
pub use palette::{ColorMap, Rgb};
