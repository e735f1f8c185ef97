use glam::{Mat4, Vec3};

use crate::cities::START_CITY;
use crate::flight::FlightState;
use crate::geo;

/// Distance behind the airplane, along its negated heading.
pub const CHASE_DISTANCE: f32 = 20.0;
/// Small fixed framing offset applied to the camera position.
pub const LATERAL_OFFSET: Vec3 = Vec3::new(-2.0, 0.0, 0.0);

pub const FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const Z_NEAR: f32 = 0.01;
pub const Z_FAR: f32 = 2000.0;

/// Radius at which the startup view frames the start city.
const STARTUP_RADIUS: f32 = 130.0;

/// Camera placement for one frame. Fully recomputed from [`FlightState`];
/// no history is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub up: Vec3,
    pub target: Vec3,
}

/// Derives the camera pose from the airplane's pose each frame.
///
/// The up vector tracks the globe's outward radial at the airplane, keeping
/// the globe visually below the aircraft at all times.
pub struct ChaseCamera {
    chase_distance: f32,
    lateral_offset: Vec3,
    fov_y: f32,
    z_near: f32,
    z_far: f32,
}

impl ChaseCamera {
    pub fn new() -> Self {
        Self::with_params(CHASE_DISTANCE, LATERAL_OFFSET)
    }

    pub fn with_params(chase_distance: f32, lateral_offset: Vec3) -> Self {
        Self {
            chase_distance,
            lateral_offset,
            fov_y: FOV_Y,
            z_near: Z_NEAR,
            z_far: Z_FAR,
        }
    }

    /// Pure function of the flight state: calling it twice on the same
    /// state yields the identical pose.
    pub fn pose(&self, flight: &FlightState) -> CameraPose {
        let backward = -flight.heading * self.chase_distance;

        CameraPose {
            position: flight.position + backward + self.lateral_offset,
            up: flight.position.normalize(),
            target: flight.position,
        }
    }

    /// Combined projection * view matrix handed to the renderer.
    pub fn view_proj(&self, pose: &CameraPose, aspect: f32) -> Mat4 {
        let projection = Mat4::perspective_rh(self.fov_y, aspect, self.z_near, self.z_far);
        let view = Mat4::look_at_rh(pose.position, pose.target, pose.up);
        projection * view
    }

    /// View framing the start city, used before the first frame advances.
    pub fn startup_pose() -> CameraPose {
        let anchor = geo::project(START_CITY, STARTUP_RADIUS);

        CameraPose {
            position: anchor + Vec3::new(-10.0, -3.0, -10.0),
            up: Vec3::Y,
            target: anchor,
        }
    }
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self::new()
    }
}
