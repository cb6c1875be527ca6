use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use skygeo_core::{GeoPoint, QuadCorners};

/// Zero-length axes make the placement unsolvable.
const DEGENERATE_EPS: f64 = 1e-15;

/// Errors from overlay placement derivation.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum OverlayError {
    #[error("overlay corners collapse to a zero-length axis")]
    DegenerateQuad,
}

/// Affine placement of an unrotated raster on a flat map surface.
///
/// Derived from three of the four georeferenced corners: top-left to
/// top-right is the raster's local x-axis in map space, top-left to
/// bottom-left its local y-axis. The bottom-right corner is redundant and
/// deliberately unused, which keeps the placement robust to minor
/// non-rectangularity of the footprint.
///
/// Map space is the `(x = lon, y = lat)` plane in degrees. The consuming
/// renderer applies [`OverlayPlacement::to_matrix`] as a single transform,
/// so no per-pixel resampling happens here.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct OverlayPlacement {
    /// Map units per pixel along the raster's x-axis.
    pub scale_x: f64,
    /// Map units per pixel along the raster's y-axis.
    pub scale_y: f64,
    /// Angle of the raster's x-axis in map space, radians, counterclockwise.
    pub rotation_rad: f64,
    /// Map position of the raster's top-left pixel.
    pub anchor: GeoPoint,
}

impl OverlayPlacement {
    /// Derive the placement from georeferenced corners and the raster's
    /// pixel dimensions.
    ///
    /// Returns [`OverlayError::DegenerateQuad`] when either axis collapses
    /// (top-left equals top-right or bottom-left, or a zero pixel
    /// dimension); the caller should fall back to an axis-aligned
    /// bounding-box placement via [`axis_aligned_bounds`].
    pub fn from_corners(
        corners: &QuadCorners<GeoPoint>,
        pixel_size: (u32, u32),
    ) -> Result<Self, OverlayError> {
        let tl = corners.top_left;
        let x_axis = corners.top_right - tl;
        let y_axis = corners.bottom_left - tl;

        let x_len = (x_axis.lon * x_axis.lon + x_axis.lat * x_axis.lat).sqrt();
        let y_len = (y_axis.lon * y_axis.lon + y_axis.lat * y_axis.lat).sqrt();
        if x_len < DEGENERATE_EPS || y_len < DEGENERATE_EPS {
            return Err(OverlayError::DegenerateQuad);
        }
        if pixel_size.0 == 0 || pixel_size.1 == 0 {
            return Err(OverlayError::DegenerateQuad);
        }

        Ok(Self {
            scale_x: x_len / f64::from(pixel_size.0),
            scale_y: y_len / f64::from(pixel_size.1),
            rotation_rad: x_axis.lat.atan2(x_axis.lon),
            anchor: tl,
        })
    }

    /// Homogeneous 2D affine matrix: translation, rotation, then scale
    /// applied to raster pixel coordinates `(x, y, 1)`.
    ///
    /// The y column is negated because pixel y grows down while map y
    /// (latitude) grows up.
    pub fn to_matrix(&self) -> Matrix3<f64> {
        let (sin, cos) = self.rotation_rad.sin_cos();
        let (sx, sy) = (self.scale_x, self.scale_y);
        Matrix3::new(
            sx * cos,
            sy * sin,
            self.anchor.lon,
            sx * sin,
            -sy * cos,
            self.anchor.lat,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Row-major interop form of [`OverlayPlacement::to_matrix`].
    pub fn to_array(&self) -> [[f64; 3]; 3] {
        let m = self.to_matrix();
        [
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ]
    }

    /// Apply the placement to a raster pixel coordinate.
    pub fn apply(&self, x: f64, y: f64) -> GeoPoint {
        let m = self.to_matrix();
        GeoPoint {
            lon: m[(0, 0)] * x + m[(0, 1)] * y + m[(0, 2)],
            lat: m[(1, 0)] * x + m[(1, 1)] * y + m[(1, 2)],
        }
    }
}

/// Axis-aligned lat/lon bounds of a footprint, `(min, max)`.
///
/// This is the non-rotated fallback placement when the corners are too
/// degenerate for [`OverlayPlacement::from_corners`].
pub fn axis_aligned_bounds(corners: &QuadCorners<GeoPoint>) -> (GeoPoint, GeoPoint) {
    let pts = corners.to_array();
    let mut min = pts[0];
    let mut max = pts[0];
    for p in &pts[1..] {
        min.lat = min.lat.min(p.lat);
        min.lon = min.lon.min(p.lon);
        max.lat = max.lat.max(p.lat);
        max.lon = max.lon.max(p.lon);
    }
    (min, max)
}
