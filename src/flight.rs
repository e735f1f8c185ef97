use glam::{Quat, Vec3};

/// Radius of the orbital circle the airplane follows.
pub const ORBIT_RADIUS: f32 = 110.0;
/// Radians of orbital angle per elapsed second.
pub const ANGULAR_RATE: f32 = 0.1;
/// Blend factor pulling the stored heading toward the instantaneous
/// direction of travel. Also scales the positional correction in step 5.
pub const TURN_SCALE: f32 = 0.1;

/// Turns smaller than this are skipped; the rotation axis is degenerate
/// when the heading did not change.
const MIN_TURN_ANGLE: f32 = 1e-6;

/// The airplane's simulated pose. Mutated only by [`FlightController`].
#[derive(Debug, Clone, Copy)]
pub struct FlightState {
    pub position: Vec3,
    /// Unit vector, smoothed direction of travel.
    pub heading: Vec3,
    /// Accumulated attitude. Incremental turns are pre-multiplied on;
    /// it is never reset, so continuity survives across frames.
    pub orientation: Quat,
}

/// Advances the airplane along a vertical orbital circle, one step per
/// rendered frame.
///
/// The stored heading is a low-pass filter over the orbital tangent, so the
/// airplane banks into turns instead of snapping. The displayed position
/// carries a small correction along that smoothed heading; the visual orbit
/// radius breathes by up to `turn_scale` as a result, which is intentional.
pub struct FlightController {
    orbit_radius: f32,
    angular_rate: f32,
    turn_scale: f32,
    state: FlightState,
}

impl FlightController {
    pub fn new() -> Self {
        Self::with_params(ORBIT_RADIUS, ANGULAR_RATE, TURN_SCALE)
    }

    pub fn with_params(orbit_radius: f32, angular_rate: f32, turn_scale: f32) -> Self {
        Self {
            orbit_radius,
            angular_rate,
            turn_scale,
            state: FlightState {
                position: orbit_point(0.0, orbit_radius),
                heading: Vec3::Y,
                orientation: Quat::IDENTITY,
            },
        }
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    /// Advances the simulation to `elapsed` seconds since start.
    pub fn advance(&mut self, elapsed: f32) {
        let target = orbit_point(elapsed * self.angular_rate, self.orbit_radius);

        let previous_position = self.state.position;
        let previous_heading = self.state.heading;

        // Unit direction from last frame's position to the new orbital
        // target. Zero displacement contributes nothing to the blend.
        let raw_dir = (target - previous_position).normalize_or_zero();

        let heading = (previous_heading + raw_dir * self.turn_scale).normalize_or(previous_heading);

        self.state.position = target + heading * self.turn_scale;
        self.state.heading = heading;

        // Incremental rotation from the previous heading to the new one,
        // pre-multiplied onto the accumulated attitude. The dot product is
        // clamped: floating-point overshoot past 1.0 would make acos NaN.
        let cos_angle = previous_heading.dot(heading).clamp(-1.0, 1.0);
        let angle = cos_angle.acos();
        if angle > MIN_TURN_ANGLE {
            let axis = previous_heading.cross(heading);
            if axis.length_squared() > f32::EPSILON {
                let turn = Quat::from_axis_angle(axis.normalize(), angle);
                self.state.orientation = (turn * self.state.orientation).normalize();
            }
        }
    }
}

impl Default for FlightController {
    fn default() -> Self {
        Self::new()
    }
}

/// Point on the vertical orbit circle at the given angle. The orbit plane
/// is fixed with x = 0.
fn orbit_point(angle: f32, radius: f32) -> Vec3 {
    Vec3::new(0.0, angle.sin() * radius, angle.cos() * radius)
}
