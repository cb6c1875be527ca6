use skygeo_core::{GeoPoint, PixelPoint, QuadCorners};

/// Map a normalized in-image position to a geodetic coordinate.
///
/// `rel = (rel_x, rel_y)` is the pixel position divided by image width and
/// height; `(0, 0)` is the top-left corner, `(1, 0)` the top-right,
/// `(0, 1)` the bottom-left. Values are intentionally not clamped:
/// slightly-overscanned detections extrapolate linearly beyond the quad.
///
/// The interpolation uses the two edge vectors leaving the anchor corner
/// (top-left to top-right for x, top-left to bottom-left for y) rather
/// than blending all four corners per axis. That is cheap and accurate
/// for the near-planar, near-rectangular footprints of near-nadir drone
/// shots; it degrades for strongly skewed quads. Known approximation,
/// kept for output parity with existing reports.
///
/// NaN corners propagate NaN; there is no error path.
pub fn pixel_to_geo(corners: &QuadCorners<GeoPoint>, rel: (f64, f64)) -> GeoPoint {
    let (rel_x, rel_y) = rel;
    let anchor = corners.top_left;
    let x_edge = corners.top_right - anchor;
    let y_edge = corners.bottom_left - anchor;
    GeoPoint {
        lat: anchor.lat + rel_x * x_edge.lat + rel_y * y_edge.lat,
        lon: anchor.lon + rel_x * x_edge.lon + rel_y * y_edge.lon,
    }
}

/// [`pixel_to_geo`] for a raw pixel position, normalized by `size`.
pub fn pixel_to_geo_px(
    corners: &QuadCorners<GeoPoint>,
    pixel: PixelPoint,
    size: (u32, u32),
) -> GeoPoint {
    let rel = (pixel.x / f64::from(size.0), pixel.y / f64::from(size.1));
    pixel_to_geo(corners, rel)
}

/// Invert [`pixel_to_geo`]: recover the normalized in-image position of a
/// geodetic coordinate.
///
/// Solves the same two-edge-vector model, so round-trips are exact for
/// any quad the forward mapping handles. Returns `None` when the edge
/// vectors are linearly dependent (collapsed quad) and the 2x2 system has
/// no unique solution.
pub fn geo_to_rel(corners: &QuadCorners<GeoPoint>, geo: GeoPoint) -> Option<(f64, f64)> {
    let anchor = corners.top_left;
    let x_edge = corners.top_right - anchor;
    let y_edge = corners.bottom_left - anchor;
    let d = geo - anchor;

    let det = x_edge.lat * y_edge.lon - x_edge.lon * y_edge.lat;
    if det.abs() < 1e-18 || !det.is_finite() {
        return None;
    }

    let rel_x = (d.lat * y_edge.lon - d.lon * y_edge.lat) / det;
    let rel_y = (x_edge.lat * d.lon - x_edge.lon * d.lat) / det;
    Some((rel_x, rel_y))
}
