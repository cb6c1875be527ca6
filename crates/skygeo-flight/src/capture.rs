use serde::{Deserialize, Serialize};

use skygeo_core::{GeoPoint, QuadCorners, UtmPoint};

/// One registered aerial image or orthophoto raster.
///
/// Created when an image is ingested with a known or computed footprint;
/// immutable afterwards except for corner refinement upstream.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Capture {
    pub id: u64,
    /// Capture timestamp, milliseconds since the Unix epoch.
    pub created_at_ms: i64,
    /// Native image dimensions in pixels, `(width, height)`. Both > 0.
    pub pixel_size: (u32, u32),
    /// Geodetic footprint corners, when the mapping pipeline has produced
    /// them. Absent for captures not yet covered by a registered raster.
    pub geo_corners: Option<QuadCorners<GeoPoint>>,
    pub is_thermal: bool,
    /// Panoramas are not along-path imagery and never join a trajectory.
    pub is_panoramic: bool,
    /// Planar position for short-range proximity checks, when available.
    pub utm: Option<UtmPoint>,
    /// Camera GPS fix, when available.
    pub gps: Option<GeoPoint>,
}

impl Capture {
    /// Width in pixels as f64, for normalization.
    pub fn width_f64(&self) -> f64 {
        f64::from(self.pixel_size.0)
    }

    /// Height in pixels as f64, for normalization.
    pub fn height_f64(&self) -> f64 {
        f64::from(self.pixel_size.1)
    }
}
