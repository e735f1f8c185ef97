use std::f32::consts::{FRAC_PI_2, PI};

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::cities::City;
use crate::flight::FlightState;
use crate::geo::{self, GeoPoint};
use crate::loaders::{LoadedAssets, TextureData};
use crate::mesh::{self, MeshData};

pub const GLOBE_RADIUS: f32 = 105.0;
pub const GLOBE_SEGMENTS: u32 = 32;
pub const GLOBE_RINGS: u32 = 32;

/// Markers float slightly above the surface, nudged one degree east.
pub const MARKER_RADIUS: f32 = 108.0;
pub const MARKER_LON_OFFSET: f32 = 1.0;
pub const MARKER_SIZE: f32 = 3.0;

pub const LABEL_SIZE: f32 = 0.6;
pub const LABEL_THICKNESS: f32 = 0.08;

pub const AIRPLANE_SCALE: f32 = 0.001;

/// The whole globe group (globe, labels, markers) is pre-rotated a quarter
/// turn about Y.
pub const GLOBE_GROUP_YAW: f32 = -FRAC_PI_2;

/// Extra in-plane yaw applied to markers: a half turn below the equator,
/// 1.6 rad above it.
const MARKER_YAW_NORTH: f32 = 1.6;
const MARKER_YAW_SOUTH: f32 = PI;

/// Fixed label tilt (XYZ Euler), facing roughly along the group rotation.
const LABEL_TILT: Vec3 = Vec3::new(0.2, FRAC_PI_2, 0.0);

/// The airplane model noses along +Z after this quarter roll about Z;
/// incremental flight rotations compose on top of it.
pub const AIRPLANE_BASE_ROTATION: Quat =
    Quat::from_xyzw(0.0, 0.0, std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2);

/// One directional and one ambient light, fixed for the scene's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Lights {
    pub direction: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            direction: Vec3::ONE.normalize(),
            color: [1.0, 1.0, 1.0],
            intensity: 1.5,
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Material {
    pub base_color: [f32; 3],
    pub texture: Option<TextureData>,
    pub lit: bool,
}

impl Material {
    fn lit_textured(texture: TextureData) -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0],
            texture: Some(texture),
            lit: true,
        }
    }

    fn unlit(base_color: [f32; 3], texture: Option<TextureData>) -> Self {
        Self {
            base_color,
            texture,
            lit: false,
        }
    }
}

/// One drawable: a mesh with a material and a local transform, optionally
/// parented to the globe group.
pub struct SceneNode {
    pub mesh: MeshData,
    pub material: Material,
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
    pub in_globe_group: bool,
}

impl SceneNode {
    pub fn model_matrix(&self, globe_rotation: Quat) -> Mat4 {
        let local = Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation,
            self.translation,
        );
        if self.in_globe_group {
            Mat4::from_quat(globe_rotation) * local
        } else {
            local
        }
    }
}

/// The assembled scene, passed explicitly to the per-frame systems.
/// Only the airplane node is mutated after assembly.
pub struct SceneContext {
    pub globe_rotation: Quat,
    pub nodes: Vec<SceneNode>,
    pub airplane: usize,
    pub lights: Lights,
}

impl SceneContext {
    /// Per-frame update: copies the flight state onto the airplane node.
    pub fn set_airplane_pose(&mut self, state: &FlightState) {
        let node = &mut self.nodes[self.airplane];
        node.translation = state.position;
        node.rotation = state.orientation * AIRPLANE_BASE_ROTATION;
    }

    pub fn airplane_model_matrix(&self) -> Mat4 {
        self.nodes[self.airplane].model_matrix(self.globe_rotation)
    }
}

/// One-time scene construction: globe, city markers and labels, airplane.
pub fn assemble(assets: LoadedAssets, cities: &[City]) -> SceneContext {
    let mut nodes = Vec::new();

    nodes.push(SceneNode {
        mesh: mesh::uv_sphere(GLOBE_RADIUS, GLOBE_SEGMENTS, GLOBE_RINGS),
        material: Material::lit_textured(assets.earth_texture),
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: 1.0,
        in_globe_group: true,
    });

    for (city, image) in cities.iter().zip(assets.city_images) {
        nodes.push(marker_node(city, image));

        if let (Some(font), false) = (&assets.font, city.name.is_empty()) {
            let label_mesh = mesh::text_mesh(font, &city.name, LABEL_SIZE, LABEL_THICKNESS);
            if !label_mesh.is_empty() {
                nodes.push(SceneNode {
                    mesh: label_mesh,
                    material: Material::unlit([1.0, 1.0, 1.0], None),
                    translation: geo::project(city.point(), GLOBE_RADIUS),
                    rotation: Quat::from_euler(
                        EulerRot::XYZ,
                        LABEL_TILT.x,
                        LABEL_TILT.y,
                        LABEL_TILT.z,
                    ),
                    scale: 1.0,
                    in_globe_group: true,
                });
            }
        }
    }

    let airplane = nodes.len();
    nodes.push(SceneNode {
        mesh: assets.airplane,
        material: Material {
            base_color: [1.0, 1.0, 1.0],
            texture: None,
            lit: true,
        },
        translation: Vec3::ZERO,
        rotation: AIRPLANE_BASE_ROTATION,
        scale: AIRPLANE_SCALE,
        in_globe_group: false,
    });

    log::info!(
        "Scene assembled: {} nodes ({} cities, labels {})",
        nodes.len(),
        cities.len(),
        if assets.font.is_some() { "on" } else { "off" }
    );

    SceneContext {
        globe_rotation: Quat::from_rotation_y(GLOBE_GROUP_YAW),
        nodes,
        airplane,
        lights: Lights::default(),
    }
}

fn marker_node(city: &City, image: Option<TextureData>) -> SceneNode {
    let point = GeoPoint::new(city.lat, city.lon + MARKER_LON_OFFSET);
    let position = geo::project(point, MARKER_RADIUS);

    let yaw = if city.lat < 0.0 {
        MARKER_YAW_SOUTH
    } else {
        MARKER_YAW_NORTH
    };
    let rotation = outward_orientation(position.normalize()) * Quat::from_rotation_y(yaw);

    // A missing image falls back to a flat gray panel.
    let base_color = if image.is_some() {
        [1.0, 1.0, 1.0]
    } else {
        [0.6, 0.6, 0.6]
    };

    SceneNode {
        mesh: mesh::quad(MARKER_SIZE, MARKER_SIZE),
        material: Material::unlit(base_color, image),
        translation: position,
        rotation,
        scale: 1.0,
        in_globe_group: true,
    }
}

/// One-shot rotation aligning world +Y with the given outward unit normal:
/// same axis/angle construction as the flight controller's incremental
/// turn, but applied once at assembly.
pub fn outward_orientation(direction: Vec3) -> Quat {
    let axis = Vec3::Y.cross(direction);
    let angle = Vec3::Y.dot(direction).clamp(-1.0, 1.0).acos();

    if axis.length_squared() <= f32::EPSILON {
        // Parallel or anti-parallel to +Y: no unique axis.
        if angle < FRAC_PI_2 {
            Quat::IDENTITY
        } else {
            Quat::from_axis_angle(Vec3::X, PI)
        }
    } else {
        Quat::from_axis_angle(axis.normalize(), angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::default_cities;

    fn stub_assets(city_count: usize) -> LoadedAssets {
        LoadedAssets {
            earth_texture: TextureData::white(),
            airplane: mesh::quad(1.0, 1.0),
            font: None,
            city_images: vec![None; city_count],
        }
    }

    #[test]
    fn outward_orientation_aligns_y_with_direction() {
        let direction = Vec3::new(0.3, 0.8, -0.52).normalize();
        let rotation = outward_orientation(direction);

        assert!((rotation * Vec3::Y - direction).length() < 1e-5);
        assert!((rotation.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn outward_orientation_handles_poles() {
        let up = outward_orientation(Vec3::Y);
        assert_eq!(up, Quat::IDENTITY);

        let down = outward_orientation(-Vec3::Y);
        assert!(!down.is_nan());
        assert!((down * Vec3::Y - (-Vec3::Y)).length() < 1e-5);
    }

    #[test]
    fn assemble_without_font_skips_labels() {
        let cities = default_cities();
        let scene = assemble(stub_assets(cities.len()), &cities);

        // Globe + one marker per city + airplane, no labels.
        assert_eq!(scene.nodes.len(), 1 + cities.len() + 1);
        assert_eq!(scene.airplane, scene.nodes.len() - 1);
    }

    #[test]
    fn airplane_is_outside_globe_group() {
        let cities = default_cities();
        let scene = assemble(stub_assets(cities.len()), &cities);

        assert!(!scene.nodes[scene.airplane].in_globe_group);
        assert!(scene.nodes[..scene.airplane]
            .iter()
            .all(|node| node.in_globe_group));
    }

    #[test]
    fn set_airplane_pose_composes_base_rotation() {
        let cities = default_cities();
        let mut scene = assemble(stub_assets(cities.len()), &cities);

        let state = FlightState {
            position: Vec3::new(0.0, 110.0, 0.0),
            heading: Vec3::X,
            orientation: Quat::from_rotation_x(0.3),
        };
        scene.set_airplane_pose(&state);

        let node = &scene.nodes[scene.airplane];
        assert_eq!(node.translation, state.position);
        let expected = state.orientation * AIRPLANE_BASE_ROTATION;
        assert!((node.rotation.dot(expected).abs() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn base_rotation_is_quarter_roll() {
        let expected = Quat::from_rotation_z(FRAC_PI_2);
        assert!((AIRPLANE_BASE_ROTATION.dot(expected).abs() - 1.0).abs() < 1e-6);
    }
}
