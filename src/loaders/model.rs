use std::path::Path;

use anyhow::{Context, Result};
use glam::{Mat4, Vec3};

use crate::mesh::MeshData;
use crate::types::Vertex;

/// Loads a glTF file and flattens every mesh primitive into one [`MeshData`],
/// applying node transforms along the way.
pub async fn load_model(path: impl AsRef<Path>) -> Result<MeshData> {
    let path = path.as_ref();

    let (document, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load model: {:?}", path))?;

    let mut mesh = MeshData::default();

    for scene in document.scenes() {
        for node in scene.nodes() {
            process_node(&node, &buffers, &Mat4::IDENTITY, &mut mesh)?;
        }
    }

    if mesh.is_empty() {
        anyhow::bail!("Model {:?} contains no geometry", path);
    }

    log::info!(
        "Loaded model {:?} ({} vertices, {} triangles)",
        path,
        mesh.vertices.len(),
        mesh.indices.len() / 3
    );

    Ok(mesh)
}

/// Recursively walks glTF nodes, accumulating transforms.
fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    out: &mut MeshData,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        process_mesh(&mesh, buffers, &global_transform, out)?;
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, out)?;
    }

    Ok(())
}

fn process_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    out: &mut MeshData,
) -> Result<()> {
    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions: Vec<Vec3> = reader
            .read_positions()
            .context("Mesh primitive has no positions")?
            .map(|pos| transform.transform_point3(Vec3::from_array(pos)))
            .collect();

        if positions.is_empty() {
            continue;
        }

        let normals: Vec<Vec3> = match reader.read_normals() {
            Some(normals) => normals
                .map(|n| {
                    transform
                        .transform_vector3(Vec3::from_array(n))
                        .normalize_or(Vec3::Y)
                })
                .collect(),
            // Without authored normals, fall back to radial ones; the
            // airplane is tiny on screen and shaded mostly by ambient.
            None => positions
                .iter()
                .map(|p| p.normalize_or(Vec3::Y))
                .collect(),
        };

        let uvs: Vec<[f32; 2]> = match reader.read_tex_coords(0) {
            Some(coords) => coords.into_f32().collect(),
            None => vec![[0.0, 0.0]; positions.len()],
        };

        let base = out.vertices.len() as u32;
        for i in 0..positions.len() {
            out.vertices.push(Vertex::new(
                positions[i].to_array(),
                normals[i].to_array(),
                uvs[i],
            ));
        }

        match reader.read_indices() {
            Some(indices) => {
                out.indices.extend(indices.into_u32().map(|i| base + i));
            }
            None => {
                out.indices.extend(base..base + positions.len() as u32);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_reports_path() {
        let err = pollster::block_on(load_model("no/such/airplane.glb")).unwrap_err();
        assert!(format!("{:#}", err).contains("no/such/airplane.glb"));
    }
}
