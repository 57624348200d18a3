//! Great-circle distance on a spherical Earth.

/// Distance in meters between `(latitude, longitude)` and the point
/// `(from_latitude, from_longitude)`, using the Vincenty formula for a sphere.
///
/// Angles are in degrees. Inputs are not range checked: any finite input gives
/// a finite result, meaningful or not.
pub fn distance(
    latitude: f64,
    longitude: f64,
    from_latitude: f64,
    from_longitude: f64,
    radius_meters: f64,
) -> f64 {
    let lat_a = from_latitude.to_radians();
    let lon_a = from_longitude.to_radians();
    let lat_b = latitude.to_radians();
    let lon_b = longitude.to_radians();

    let delta = lon_b - lon_a;
    let (sin_a, cos_a) = lat_a.sin_cos();
    let (sin_b, cos_b) = lat_b.sin_cos();
    let (sin_delta, cos_delta) = delta.sin_cos();

    let numerator = (cos_b * sin_delta).hypot(cos_a * sin_b - sin_a * cos_b * cos_delta);
    let denominator = sin_a * sin_b + cos_a * cos_b * cos_delta;

    numerator.atan2(denominator) * radius_meters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        DEFAULT_REFERENCE_LATITUDE as REF_LAT, DEFAULT_REFERENCE_LONGITUDE as REF_LON,
        EARTH_RADIUS_METERS,
    };

    const TOLERANCE_METERS: f64 = 20.0;

    #[test]
    fn test_reference_to_itself_is_zero() {
        let d = distance(REF_LAT, REF_LON, REF_LAT, REF_LON, EARTH_RADIUS_METERS);
        assert!(d.abs() < 1e-6);
    }

    #[test]
    fn test_known_distances() {
        let cases = [
            // (latitude, longitude, expected meters)
            (52.986375, -6.043701, 41_770.0),
            (51.92893, -10.27699, 313_256.0),
        ];

        for (lat, lon, expected) in cases {
            let d = distance(lat, lon, REF_LAT, REF_LON, EARTH_RADIUS_METERS);
            assert!(
                (d - expected).abs() < TOLERANCE_METERS,
                "({}, {}) -> {} expected {}",
                lat,
                lon,
                d,
                expected
            );
        }
    }

    #[test]
    fn test_antipode_is_half_circumference() {
        let d = distance(-REF_LAT, REF_LON + 180.0, REF_LAT, REF_LON, EARTH_RADIUS_METERS);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() < 1.0);
    }

    #[test]
    fn test_radius_scales_linearly() {
        let earth = distance(51.92893, -10.27699, REF_LAT, REF_LON, EARTH_RADIUS_METERS);
        let unit = distance(51.92893, -10.27699, REF_LAT, REF_LON, 1.0);
        assert!((earth - unit * EARTH_RADIUS_METERS).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_coordinates_stay_finite() {
        let d = distance(95.0, 200.0, REF_LAT, REF_LON, EARTH_RADIUS_METERS);
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }
}
