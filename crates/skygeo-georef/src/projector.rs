use log::debug;
use serde::{Deserialize, Serialize};

use skygeo_core::GeoPoint;
use skygeo_flight::Capture;

use crate::quad_model::pixel_to_geo;

/// Pixel-space bounding box, `(x, y)` top-left, in the capture's native
/// width x height space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BBox {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Box center in pixel coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// One AI detection on a capture.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Detection {
    pub id: u64,
    pub capture_id: u64,
    pub bbox_px: BBox,
    pub score: f64,
    pub class_name: String,
    /// Geolocation of the box center. Either supplied by the sensor or
    /// filled lazily by [`geolocate_missing`]; never overwritten once set.
    pub geo: Option<GeoPoint>,
}

/// Geolocate a pixel bounding box through the capture it was found on.
///
/// Returns `None` when the capture has no corner georeference yet; that
/// is a normal transient state during ingestion, not an error.
pub fn project_detection(bbox: &BBox, capture: &Capture) -> Option<GeoPoint> {
    let corners = capture.geo_corners.as_ref()?;
    let (cx, cy) = bbox.center();
    let rel = (cx / capture.width_f64(), cy / capture.height_f64());
    Some(pixel_to_geo(corners, rel))
}

/// Fill `geo` for every detection that lacks one, in a single pass.
///
/// Detections carrying an externally supplied geolocation keep it.
/// Returns the number of detections updated.
pub fn geolocate_missing(detections: &mut [Detection], capture: &Capture) -> usize {
    let mut filled = 0usize;
    for det in detections.iter_mut() {
        if det.geo.is_some() {
            continue;
        }
        if let Some(geo) = project_detection(&det.bbox_px, capture) {
            det.geo = Some(geo);
            filled += 1;
        }
    }
    debug!(
        "geolocated {filled}/{} detections on capture {}",
        detections.len(),
        capture.id
    );
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use skygeo_core::QuadCorners;

    fn capture_with_unit_square() -> Capture {
        Capture {
            id: 7,
            created_at_ms: 0,
            pixel_size: (100, 100),
            geo_corners: Some(QuadCorners {
                top_right: GeoPoint::new(2.0, 2.0),
                bottom_right: GeoPoint::new(1.0, 2.0),
                bottom_left: GeoPoint::new(1.0, 1.0),
                top_left: GeoPoint::new(2.0, 1.0),
            }),
            is_thermal: false,
            is_panoramic: false,
            utm: None,
            gps: None,
        }
    }

    fn detection(id: u64, bbox: BBox, geo: Option<GeoPoint>) -> Detection {
        Detection {
            id,
            capture_id: 7,
            bbox_px: bbox,
            score: 0.9,
            class_name: "rust_spot".into(),
            geo,
        }
    }

    #[test]
    fn centered_bbox_maps_to_square_center() {
        let cap = capture_with_unit_square();
        let bbox = BBox::new(40.0, 40.0, 20.0, 20.0);
        let geo = project_detection(&bbox, &cap).expect("georeferenced");
        assert_relative_eq!(geo.lat, 1.5);
        assert_relative_eq!(geo.lon, 1.5);
    }

    #[test]
    fn capture_without_corners_yields_none() {
        let mut cap = capture_with_unit_square();
        cap.geo_corners = None;
        assert!(project_detection(&BBox::new(0.0, 0.0, 10.0, 10.0), &cap).is_none());
    }

    #[test]
    fn batch_fills_only_missing_geo() {
        let cap = capture_with_unit_square();
        let sensor_geo = GeoPoint::new(40.0, -3.0);
        let mut dets = vec![
            detection(1, BBox::new(40.0, 40.0, 20.0, 20.0), None),
            detection(2, BBox::new(0.0, 0.0, 20.0, 20.0), Some(sensor_geo)),
            detection(3, BBox::new(80.0, 80.0, 20.0, 20.0), None),
        ];
        let filled = geolocate_missing(&mut dets, &cap);
        assert_eq!(filled, 2);
        assert!(dets[0].geo.is_some());
        // sensor-supplied geolocation is never overwritten
        assert_eq!(dets[1].geo, Some(sensor_geo));
        assert!(dets[2].geo.is_some());
    }

    #[test]
    fn batch_without_corners_fills_nothing() {
        let mut cap = capture_with_unit_square();
        cap.geo_corners = None;
        let mut dets = vec![detection(1, BBox::new(0.0, 0.0, 10.0, 10.0), None)];
        assert_eq!(geolocate_missing(&mut dets, &cap), 0);
        assert!(dets[0].geo.is_none());
    }
}
