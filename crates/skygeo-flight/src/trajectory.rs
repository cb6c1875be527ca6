use log::debug;

use skygeo_core::GeoPoint;

use crate::Capture;

/// Max gap between shutter events for a thermal/RGB pair to collapse.
pub const PAIR_WINDOW_MS: i64 = 2000;

/// Max planar distance in meters for a thermal/RGB pair to collapse.
pub const PAIR_DISTANCE_M: f64 = 3.5;

/// Mean Earth radius in meters, for short-range path length only.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Reduce a capture list to one trajectory point per physical location.
///
/// Captures are sorted chronologically in place (stable, so equal
/// timestamps keep their input order). Panoramas and captures without a
/// GPS fix are skipped. When a thermal and an RGB capture fire within
/// [`PAIR_WINDOW_MS`] of each other and their UTM positions are within
/// [`PAIR_DISTANCE_M`], they collapse to a single point and the RGB
/// capture wins regardless of which arrived first. A capture missing its
/// UTM position never forms a pair and is kept on its own.
pub fn extract_trajectory(captures: &mut [Capture]) -> Vec<GeoPoint> {
    captures.sort_by_key(|c| c.created_at_ms);

    let mut selected: Vec<&Capture> = Vec::new();
    let mut skipped = 0usize;

    for img in captures.iter() {
        if img.gps.is_none() || img.is_panoramic {
            skipped += 1;
            continue;
        }

        let pairs_with_prev = match selected.last() {
            Some(prev)
                if (img.created_at_ms - prev.created_at_ms).abs() <= PAIR_WINDOW_MS
                    && img.is_thermal != prev.is_thermal =>
            {
                match (img.utm, prev.utm) {
                    (Some(a), Some(b)) => a.distance(b) <= PAIR_DISTANCE_M,
                    _ => false,
                }
            }
            _ => false,
        };

        if pairs_with_prev {
            // The regular capture represents the pair; the thermal one
            // either gets replaced or never enters the list.
            if !img.is_thermal {
                if let Some(last) = selected.last_mut() {
                    *last = img;
                }
            }
            continue;
        }

        selected.push(img);
    }

    if skipped > 0 {
        debug!("trajectory: skipped {skipped} captures without GPS or panoramic");
    }

    selected.iter().filter_map(|c| c.gps).collect()
}

/// Total path length in meters via the equirectangular approximation.
///
/// Good to well under a percent at survey-flight scale, which matches the
/// precision of the rest of the engine.
pub fn trajectory_length_m(path: &[GeoPoint]) -> f64 {
    path.windows(2)
        .map(|seg| {
            let (a, b) = (seg[0], seg[1]);
            let mean_lat = ((a.lat + b.lat) / 2.0).to_radians();
            let x = (b.lon - a.lon).to_radians() * mean_lat.cos();
            let y = (b.lat - a.lat).to_radians();
            EARTH_RADIUS_M * (x * x + y * y).sqrt()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use skygeo_core::UtmPoint;

    fn capture(id: u64, t_ms: i64, thermal: bool, utm: Option<(f64, f64)>) -> Capture {
        Capture {
            id,
            created_at_ms: t_ms,
            pixel_size: (640, 512),
            geo_corners: None,
            is_thermal: thermal,
            is_panoramic: false,
            utm: utm.map(|(e, n)| UtmPoint::new(e, n)),
            gps: Some(GeoPoint::new(45.0 + id as f64 * 1e-5, 7.0)),
        }
    }

    #[test]
    fn policy_constants_are_pinned() {
        assert_eq!(PAIR_WINDOW_MS, 2000);
        assert_relative_eq!(PAIR_DISTANCE_M, 3.5);
    }

    #[test]
    fn close_thermal_rgb_pair_collapses_to_rgb() {
        // thermal at t=0, RGB 1.5s later and ~1.44m away
        let mut caps = vec![
            capture(1, 0, true, Some((500_000.0, 4_500_000.0))),
            capture(2, 1500, false, Some((500_001.2, 4_500_000.8))),
        ];
        let path = extract_trajectory(&mut caps);
        assert_eq!(path.len(), 1);
        assert_relative_eq!(path[0].lat, 45.0 + 2e-5);
    }

    #[test]
    fn rgb_wins_even_when_it_arrives_first() {
        let mut caps = vec![
            capture(1, 0, false, Some((500_000.0, 4_500_000.0))),
            capture(2, 1500, true, Some((500_001.0, 4_500_000.0))),
        ];
        let path = extract_trajectory(&mut caps);
        assert_eq!(path.len(), 1);
        // thermal is skipped entirely, RGB point survives
        assert_relative_eq!(path[0].lat, 45.0 + 1e-5);
    }

    #[test]
    fn distant_pair_keeps_both_points() {
        let mut caps = vec![
            capture(1, 0, true, Some((500_000.0, 4_500_000.0))),
            capture(2, 1500, false, Some((500_010.0, 4_500_000.0))),
        ];
        assert_eq!(extract_trajectory(&mut caps).len(), 2);
    }

    #[test]
    fn slow_pair_keeps_both_points() {
        let mut caps = vec![
            capture(1, 0, true, Some((500_000.0, 4_500_000.0))),
            capture(2, 2001, false, Some((500_001.0, 4_500_000.0))),
        ];
        assert_eq!(extract_trajectory(&mut caps).len(), 2);
    }

    #[test]
    fn missing_utm_never_forms_a_pair() {
        let mut caps = vec![
            capture(1, 0, true, None),
            capture(2, 1500, false, Some((500_001.0, 4_500_000.0))),
        ];
        assert_eq!(extract_trajectory(&mut caps).len(), 2);
    }

    #[test]
    fn same_sensor_kind_never_forms_a_pair() {
        let mut caps = vec![
            capture(1, 0, false, Some((500_000.0, 4_500_000.0))),
            capture(2, 500, false, Some((500_000.5, 4_500_000.0))),
        ];
        assert_eq!(extract_trajectory(&mut caps).len(), 2);
    }

    #[test]
    fn panoramic_and_gpsless_captures_are_skipped() {
        let mut pano = capture(1, 0, false, Some((500_000.0, 4_500_000.0)));
        pano.is_panoramic = true;
        let mut no_gps = capture(2, 5000, false, None);
        no_gps.gps = None;
        let keeper = capture(3, 10_000, false, None);
        let mut caps = vec![pano, no_gps, keeper];
        let path = extract_trajectory(&mut caps);
        assert_eq!(path.len(), 1);
        assert_relative_eq!(path[0].lat, 45.0 + 3e-5);
    }

    #[test]
    fn unsorted_input_is_ordered_by_timestamp() {
        let mut caps = vec![
            capture(3, 9000, false, None),
            capture(1, 0, false, None),
            capture(2, 5000, false, None),
        ];
        let path = extract_trajectory(&mut caps);
        let lats: Vec<f64> = path.iter().map(|p| p.lat).collect();
        assert_relative_eq!(lats[0], 45.0 + 1e-5);
        assert_relative_eq!(lats[1], 45.0 + 2e-5);
        assert_relative_eq!(lats[2], 45.0 + 3e-5);
    }

    #[test]
    fn idempotent_on_deduplicated_input() {
        let mut caps = vec![
            capture(1, 0, true, Some((500_000.0, 4_500_000.0))),
            capture(2, 1500, false, Some((500_001.2, 4_500_000.8))),
            capture(3, 60_000, false, Some((500_050.0, 4_500_040.0))),
        ];
        let first = extract_trajectory(&mut caps);
        // keep only captures that survived, run again
        let mut survivors: Vec<Capture> = caps
            .iter()
            .filter(|c| first.contains(&c.gps.unwrap()))
            .cloned()
            .collect();
        let second = extract_trajectory(&mut survivors);
        assert_eq!(first, second);
    }

    #[test]
    fn path_length_matches_known_distance() {
        // 0.001 deg of latitude is ~111.2m
        let path = [GeoPoint::new(45.0, 7.0), GeoPoint::new(45.001, 7.0)];
        let len = trajectory_length_m(&path);
        assert!((len - 111.2).abs() < 1.0, "len = {len}");
    }

    #[test]
    fn empty_and_single_point_paths_have_zero_length() {
        assert_relative_eq!(trajectory_length_m(&[]), 0.0);
        assert_relative_eq!(trajectory_length_m(&[GeoPoint::new(1.0, 2.0)]), 0.0);
    }
}
