use std::io::Write;

use log::debug;

use crate::{ColorMap, TemperatureMatrix};

/// Opacity (~30%) for pixels whose reading falls outside the display
/// range. They keep their palette color but visually recede, so the
/// display reveals saturation without hiding structure.
pub const OUT_OF_RANGE_ALPHA: u8 = 77;

const OPAQUE: u8 = 255;

/// Row-major RGBA8 raster, `data.len() == width * height * 4`.
#[derive(Clone, Debug, PartialEq)]
pub struct RgbaRaster {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl RgbaRaster {
    /// RGBA channels at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }
}

/// Colorize a temperature matrix against a display range.
///
/// Normalization maps `min_temp` to gray 0 and `max_temp` to gray 255
/// without clamping: readings outside the chosen range produce gray
/// values outside `[0, 255]`, which the palette clamps at lookup but the
/// alpha channel flags via [`OUT_OF_RANGE_ALPHA`]. A degenerate range
/// (`max_temp <= min_temp`) normalizes with a factor of one instead of
/// dividing by zero.
///
/// The range is usually the matrix's own observed min/max, but the host
/// may narrow it (range sliders) to stretch contrast over a band of
/// interest.
pub fn colorize(
    matrix: &TemperatureMatrix,
    min_temp: f64,
    max_temp: f64,
    palette: ColorMap,
) -> RgbaRaster {
    let (rows, cols) = matrix.dims();
    let range = max_temp - min_temp;
    let divisor = if range > 0.0 { range } else { 1.0 };
    if range <= 0.0 {
        debug!("degenerate display range [{min_temp}, {max_temp}], using unit factor");
    }

    let mut data = Vec::with_capacity(rows * cols * 4);
    for row in matrix.rows() {
        for &value in row {
            let gray = (value - min_temp) * 255.0 / divisor;
            let rgb = palette.apply(gray);
            let alpha = if (0.0..=255.0).contains(&gray) {
                OPAQUE
            } else {
                OUT_OF_RANGE_ALPHA
            };
            data.extend_from_slice(&[rgb.r, rgb.g, rgb.b, alpha]);
        }
    }

    RgbaRaster {
        width: cols,
        height: rows,
        data,
    }
}

/// Encode a colorized raster as RGBA8 PNG.
pub fn write_png<W: Write>(raster: &RgbaRaster, writer: W) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(writer, raster.width as u32, raster.height as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut header = encoder.write_header()?;
    header.write_image_data(&raster.data)?;
    Ok(())
}
