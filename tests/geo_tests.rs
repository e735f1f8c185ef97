use glam::Vec3;
use globe_tour::geo::{project, unproject, GeoPoint};

#[cfg(test)]
mod projection_tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_projection_preserves_radius() {
        let radii = [1.0, 105.0, 108.0, 110.0, 130.0];
        let latitudes = [-89.0, -43.559, -7.0, 0.0, 31.6286, 75.7069, 89.0];
        let longitudes = [-180.0, -160.4931, -0.1278, 0.0, 14.4378, 179.0];

        for &r in &radii {
            for &lat in &latitudes {
                for &lon in &longitudes {
                    let projected = project(GeoPoint::new(lat, lon), r);
                    assert!(
                        (projected.length() - r).abs() < EPSILON * r.max(1.0),
                        "({}, {}) at radius {} landed at distance {}",
                        lat,
                        lon,
                        r,
                        projected.length()
                    );
                }
            }
        }
    }

    #[test]
    fn test_antimeridian_anchor_point() {
        // Regression anchor: lat 0, lon -180 maps to the negative x axis.
        let projected = project(GeoPoint::new(0.0, -180.0), 110.0);

        assert!((projected.x - (-110.0)).abs() < EPSILON);
        assert!(projected.y.abs() < EPSILON);
        assert!(projected.z.abs() < EPSILON);
    }

    #[test]
    fn test_out_of_range_inputs_stay_on_sphere() {
        // Values past the canonical ranges still land on the sphere; the
        // default city table uses longitudes beyond -180.
        let wrapped = project(GeoPoint::new(29.6777, -192.85574), 105.0);
        assert!((wrapped.length() - 105.0).abs() < EPSILON * 105.0);

        let over_pole = project(GeoPoint::new(120.0, 45.0), 105.0);
        assert!((over_pole.length() - 105.0).abs() < EPSILON * 105.0);
    }

    #[test]
    fn test_hemisphere_signs() {
        let north = project(GeoPoint::new(60.0, 10.0), 100.0);
        let south = project(GeoPoint::new(-60.0, 10.0), 100.0);

        assert!(north.y > 0.0);
        assert!(south.y < 0.0);
        assert!((north.y + south.y).abs() < EPSILON);
    }

    #[test]
    fn test_unproject_inverts_project() {
        let points = [
            GeoPoint::new(41.0082, 28.9784),
            GeoPoint::new(-43.559, -175.8294),
            GeoPoint::new(75.7069, -30.6043),
            GeoPoint::new(0.0, 0.0),
        ];

        for point in points {
            let recovered = unproject(project(point, 110.0));
            assert!(
                (recovered.lat_deg - point.lat_deg).abs() < EPSILON,
                "latitude {} came back as {}",
                point.lat_deg,
                recovered.lat_deg
            );
            assert!(
                (recovered.lon_deg - point.lon_deg).abs() < EPSILON,
                "longitude {} came back as {}",
                point.lon_deg,
                recovered.lon_deg
            );
        }
    }

    #[test]
    fn test_unproject_scales_with_radius() {
        let point = GeoPoint::new(31.6286, -7.992);

        let near = unproject(project(point, 1.0));
        let far = unproject(project(point, 2000.0));

        assert!((near.lat_deg - far.lat_deg).abs() < EPSILON);
        assert!((near.lon_deg - far.lon_deg).abs() < EPSILON);
    }

    #[test]
    fn test_unproject_handles_origin() {
        let recovered = unproject(Vec3::ZERO);
        assert!(recovered.lat_deg.is_finite());
        assert!(recovered.lon_deg.is_finite());
    }
}
