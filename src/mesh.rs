use std::f32::consts::PI;

use crate::loaders::font::StrokeFont;
use crate::types::Vertex;

/// CPU-side mesh ready for upload.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Appends another mesh, re-basing its indices.
    pub fn merge(&mut self, other: &MeshData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Builds a UV sphere. Longitude runs along `u`, the north pole is at
/// `v = 0`, and the x axis is negated so that the texture seam sits on the
/// antimeridian, matching the geo-projection convention.
pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    let mut indices = Vec::new();

    for iy in 0..=rings {
        let v = iy as f32 / rings as f32;
        let phi = v * PI;

        for ix in 0..=segments {
            let u = ix as f32 / segments as f32;
            let theta = u * 2.0 * PI;

            let position = [
                -radius * theta.cos() * phi.sin(),
                radius * phi.cos(),
                radius * theta.sin() * phi.sin(),
            ];
            let normal = [
                position[0] / radius,
                position[1] / radius,
                position[2] / radius,
            ];

            vertices.push(Vertex::new(position, normal, [u, v]));
        }
    }

    let stride = segments + 1;
    for iy in 0..rings {
        for ix in 0..segments {
            let a = iy * stride + ix;
            let b = a + stride;

            // Pole rows collapse to a point; skip their degenerate triangles.
            if iy != 0 {
                indices.extend_from_slice(&[a, b, a + 1]);
            }
            if iy != rings - 1 {
                indices.extend_from_slice(&[b, b + 1, a + 1]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Flat quad in the XY plane, centered on the origin, facing +Z.
pub fn quad(width: f32, height: f32) -> MeshData {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let normal = [0.0, 0.0, 1.0];

    MeshData {
        vertices: vec![
            Vertex::new([-hw, -hh, 0.0], normal, [0.0, 1.0]),
            Vertex::new([hw, -hh, 0.0], normal, [1.0, 1.0]),
            Vertex::new([-hw, hh, 0.0], normal, [0.0, 0.0]),
            Vertex::new([hw, hh, 0.0], normal, [1.0, 0.0]),
        ],
        indices: vec![0, 1, 2, 2, 1, 3],
    }
}

const LETTER_SPACING: f32 = 0.12;
const SPACE_ADVANCE: f32 = 0.5;

/// Builds label geometry from a stroke font: each glyph stroke segment
/// becomes a thin quad in the XY plane. Characters missing from the font
/// are skipped; a space only advances the pen.
pub fn text_mesh(font: &StrokeFont, text: &str, size: f32, thickness: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let mut pen_x = 0.0;

    for c in text.chars() {
        if c == ' ' {
            pen_x += SPACE_ADVANCE * size;
            continue;
        }

        let Some(glyph) = font.glyph(c) else {
            continue;
        };

        for stroke in &glyph.strokes {
            for segment in stroke.windows(2) {
                let from = [pen_x + segment[0][0] * size, segment[0][1] * size];
                let to = [pen_x + segment[1][0] * size, segment[1][1] * size];
                mesh.merge(&segment_quad(from, to, thickness));
            }
        }

        pen_x += (glyph.width + LETTER_SPACING) * size;
    }

    mesh
}

/// Thin quad along a 2D segment, used for font strokes.
fn segment_quad(from: [f32; 2], to: [f32; 2], thickness: f32) -> MeshData {
    let dx = to[0] - from[0];
    let dy = to[1] - from[1];
    let len = (dx * dx + dy * dy).sqrt();
    if len <= f32::EPSILON {
        return MeshData::default();
    }

    let half = thickness * 0.5;
    let nx = -dy / len * half;
    let ny = dx / len * half;
    let normal = [0.0, 0.0, 1.0];

    MeshData {
        vertices: vec![
            Vertex::new([from[0] - nx, from[1] - ny, 0.0], normal, [0.0, 1.0]),
            Vertex::new([from[0] + nx, from[1] + ny, 0.0], normal, [0.0, 0.0]),
            Vertex::new([to[0] - nx, to[1] - ny, 0.0], normal, [1.0, 1.0]),
            Vertex::new([to[0] + nx, to[1] + ny, 0.0], normal, [1.0, 0.0]),
        ],
        indices: vec![0, 1, 2, 2, 1, 3],
    }
}
