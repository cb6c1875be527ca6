//! Flight capture records and trajectory extraction.
//!
//! A survey flight interleaves RGB and thermal shutter events; when both
//! fire at nearly the same moment and position, the flight path should
//! show a single point. [`extract_trajectory`] implements that dedup.

mod capture;
mod trajectory;

pub use capture::Capture;
pub use trajectory::{
    extract_trajectory, trajectory_length_m, PAIR_DISTANCE_M, PAIR_WINDOW_MS,
};
