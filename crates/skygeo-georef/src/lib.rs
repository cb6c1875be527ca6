//! Pixel-to-geodetic registration for aerial captures and orthophotos.
//!
//! Three pieces, all built on the corner georeference of a raster:
//!
//! 1. [`pixel_to_geo`] / [`geo_to_rel`]: map normalized in-image positions
//!    to geodetic coordinates and back, via the quad's edge vectors.
//! 2. [`OverlayPlacement`]: the affine transform that places a rotated or
//!    sheared raster on a flat map without per-pixel resampling.
//! 3. [`project_detection`] / [`geolocate_missing`]: geolocate AI
//!    detections through the capture they were found on.

mod overlay;
mod projector;
mod quad_model;

pub use overlay::{axis_aligned_bounds, OverlayError, OverlayPlacement};
pub use projector::{geolocate_missing, project_detection, BBox, Detection};
pub use quad_model::{geo_to_rel, pixel_to_geo, pixel_to_geo_px};
