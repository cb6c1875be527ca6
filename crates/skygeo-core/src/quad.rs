use serde::{Deserialize, Serialize};

/// The four corners of a georeferenced quad, one named field per corner.
///
/// Upstream payloads ship corners as a plain 4-element array in the fixed
/// winding `[top_right, bottom_right, bottom_left, top_left]`; use
/// [`QuadCorners::from_array`] / [`QuadCorners::to_array`] at that boundary
/// so the winding is pinned in exactly one place.
///
/// A quad need not be a rectangle: gimbal tilt produces rotated, sheared,
/// or trapezoidal footprints, and all of those are valid here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuadCorners<T> {
    pub top_right: T,
    pub bottom_right: T,
    pub bottom_left: T,
    pub top_left: T,
}

impl<T> QuadCorners<T> {
    pub fn new(top_right: T, bottom_right: T, bottom_left: T, top_left: T) -> Self {
        Self {
            top_right,
            bottom_right,
            bottom_left,
            top_left,
        }
    }

    /// Build from the upstream array winding `[TR, BR, BL, TL]`.
    pub fn from_array(corners: [T; 4]) -> Self {
        let [top_right, bottom_right, bottom_left, top_left] = corners;
        Self {
            top_right,
            bottom_right,
            bottom_left,
            top_left,
        }
    }

    /// Convert back to the upstream array winding `[TR, BR, BL, TL]`.
    pub fn to_array(self) -> [T; 4] {
        [
            self.top_right,
            self.bottom_right,
            self.bottom_left,
            self.top_left,
        ]
    }

    /// Apply `f` to every corner, preserving the winding.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> QuadCorners<U> {
        QuadCorners {
            top_right: f(self.top_right),
            bottom_right: f(self.bottom_right),
            bottom_left: f(self.bottom_left),
            top_left: f(self.top_left),
        }
    }
}
