use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Geodetic coordinate in degrees, WGS84 assumed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Component-wise linear interpolation towards `other`.
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lat: lerp(self.lat, other.lat, t),
            lon: lerp(self.lon, other.lon, t),
        }
    }
}

impl Add for GeoPoint {
    type Output = GeoPoint;

    fn add(self, rhs: GeoPoint) -> GeoPoint {
        GeoPoint {
            lat: self.lat + rhs.lat,
            lon: self.lon + rhs.lon,
        }
    }
}

impl Sub for GeoPoint {
    type Output = GeoPoint;

    fn sub(self, rhs: GeoPoint) -> GeoPoint {
        GeoPoint {
            lat: self.lat - rhs.lat,
            lon: self.lon - rhs.lon,
        }
    }
}

impl Mul<f64> for GeoPoint {
    type Output = GeoPoint;

    fn mul(self, s: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat * s,
            lon: self.lon * s,
        }
    }
}

/// Planar projected coordinate (Universal Transverse Mercator), meters.
///
/// Used only for short-range proximity checks between captures of the same
/// flight; both points are assumed to lie in the same UTM zone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UtmPoint {
    pub easting: f64,
    pub northing: f64,
}

impl UtmPoint {
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }

    /// Euclidean distance in meters (same-zone assumption).
    pub fn distance(self, other: UtmPoint) -> f64 {
        let de = self.easting - other.easting;
        let dn = self.northing - other.northing;
        (de * de + dn * dn).sqrt()
    }
}

/// Pixel coordinate in an image's native width x height space.
///
/// Origin is the top-left corner, x grows right, y grows down.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: PixelPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn lerp(self, other: PixelPoint, t: f64) -> PixelPoint {
        PixelPoint {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
        }
    }
}

impl Add for PixelPoint {
    type Output = PixelPoint;

    fn add(self, rhs: PixelPoint) -> PixelPoint {
        PixelPoint {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for PixelPoint {
    type Output = PixelPoint;

    fn sub(self, rhs: PixelPoint) -> PixelPoint {
        PixelPoint {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for PixelPoint {
    type Output = PixelPoint;

    fn mul(self, s: f64) -> PixelPoint {
        PixelPoint {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
