//! Core value types for aerial inspection georeferencing.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any map renderer, raster format, or data layer; those live in
//! the crates built on top of it.

mod logger;
mod point;
mod quad;

pub use point::{lerp, GeoPoint, PixelPoint, UtmPoint};
pub use quad::QuadCorners;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
