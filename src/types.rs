use glam::Mat4;

/// Mesh vertex layout shared by every pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// Per-frame uniform data: camera matrix and light parameters.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalsUniform {
    pub view_proj: [[f32; 4]; 4],
    pub light_direction: [f32; 3],
    pub light_intensity: f32,
    pub light_color: [f32; 3],
    pub ambient_intensity: f32,
    pub ambient_color: [f32; 3],
    pub _pad: f32,
}

/// Per-node uniform data.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub base_color: [f32; 3],
    /// 1.0 for lit surfaces, 0.0 for unlit (labels, markers).
    pub shading: f32,
}

impl ModelUniform {
    pub fn new(model: Mat4, base_color: [f32; 3], lit: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            base_color,
            shading: if lit { 1.0 } else { 0.0 },
        }
    }
}
