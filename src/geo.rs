use glam::Vec3;
use serde::Deserialize;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoPoint {
    pub lat_deg: f32,
    pub lon_deg: f32,
}

impl GeoPoint {
    pub const fn new(lat_deg: f32, lon_deg: f32) -> Self {
        Self { lat_deg, lon_deg }
    }
}

/// Projects a geodetic point onto the surface of a sphere of the given radius.
///
/// Latitude becomes the elevation angle, longitude (shifted by 180°) the
/// azimuth. Inputs outside the canonical ranges still produce a valid point
/// on the sphere.
pub fn project(point: GeoPoint, radius: f32) -> Vec3 {
    let phi = point.lat_deg.to_radians();
    let theta = (point.lon_deg + 180.0).to_radians();

    Vec3::new(
        -radius * phi.cos() * theta.cos(),
        radius * phi.sin(),
        radius * phi.cos() * theta.sin(),
    )
}

/// Recovers the geodetic coordinates of a point in space.
///
/// Inverse of [`project`] for points off the polar axis; on the axis the
/// longitude is arbitrary and comes back as -180.
pub fn unproject(position: Vec3) -> GeoPoint {
    let radius = position.length();
    if radius <= f32::EPSILON {
        return GeoPoint::new(0.0, 0.0);
    }

    let lat_deg = (position.y / radius).clamp(-1.0, 1.0).asin().to_degrees();

    let mut lon_deg = position.z.atan2(-position.x).to_degrees() - 180.0;
    if lon_deg < -180.0 {
        lon_deg += 360.0;
    }

    GeoPoint::new(lat_deg, lon_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn projected_point_lies_on_sphere() {
        let point = GeoPoint::new(41.0082, 28.9784);
        let projected = project(point, 105.0);

        assert!((projected.length() - 105.0).abs() < EPSILON);
    }

    #[test]
    fn antimeridian_equator_is_negative_x_axis() {
        let projected = project(GeoPoint::new(0.0, -180.0), 110.0);

        assert!((projected - Vec3::new(-110.0, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn north_pole_is_positive_y() {
        let projected = project(GeoPoint::new(90.0, 0.0), 50.0);

        assert!((projected - Vec3::new(0.0, 50.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn unproject_recovers_coordinates() {
        let point = GeoPoint::new(-21.0926, -175.1834);
        let recovered = unproject(project(point, 108.0));

        assert!((recovered.lat_deg - point.lat_deg).abs() < EPSILON);
        assert!((recovered.lon_deg - point.lon_deg).abs() < EPSILON);
    }

    #[test]
    fn unproject_origin_is_finite() {
        let recovered = unproject(Vec3::ZERO);

        assert!(recovered.lat_deg.is_finite());
        assert!(recovered.lon_deg.is_finite());
    }
}
