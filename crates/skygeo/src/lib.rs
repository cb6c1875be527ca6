//! High-level facade crate for the `skygeo-*` workspace.
//!
//! The engine behind a drone inspection dashboard's map, detection, and
//! thermal views: it registers aerial captures and orthophoto rasters
//! against geodetic coordinates, derives affine placements for rotated
//! overlays, collapses paired thermal/RGB telemetry into one flight path,
//! and turns raw temperature matrices into colorized imagery.
//!
//! All operations are pure, synchronous functions over in-memory data;
//! fetching records and drawing rasters belong to the host.
//!
//! ## Quickstart
//!
//! ```
//! use skygeo::{pixel_to_geo, GeoPoint, QuadCorners};
//!
//! // footprint of a north-up capture, one degree on each side
//! let corners = QuadCorners {
//!     top_right: GeoPoint::new(46.0, 8.0),
//!     bottom_right: GeoPoint::new(45.0, 8.0),
//!     bottom_left: GeoPoint::new(45.0, 7.0),
//!     top_left: GeoPoint::new(46.0, 7.0),
//! };
//! let center = pixel_to_geo(&corners, (0.5, 0.5));
//! assert_eq!(center, GeoPoint::new(45.5, 7.5));
//! ```
//!
//! ## API map
//! - `skygeo::core`: geometry value types (points, quads, lerp) and the logger.
//! - `skygeo::georef`: pixel/geodetic mapping, overlay transforms, detection geolocation.
//! - `skygeo::flight`: capture records and trajectory extraction.
//! - `skygeo::thermal`: temperature matrices, palettes, colorization, probes.

pub use skygeo_core as core;
pub use skygeo_flight as flight;
pub use skygeo_georef as georef;
pub use skygeo_thermal as thermal;

pub use skygeo_core::{lerp, GeoPoint, PixelPoint, QuadCorners, UtmPoint};
pub use skygeo_flight::{extract_trajectory, Capture};
pub use skygeo_georef::{
    geolocate_missing, pixel_to_geo, project_detection, BBox, Detection, OverlayPlacement,
};
pub use skygeo_thermal::{colorize, probe, ColorMap, TemperatureMatrix};
