//! Wavefront OBJ mesh loading, turning a parsed file into a tree mirroring
//! `raygo/obj`'s `ToGroup`: a root holding loose faces directly, plus one
//! child subgroup per named model the file defines.
//!
//! A [`MeshNode`] is plain data, not yet wired into a [`World`]'s arena —
//! [`crate::scene`] walks it with [`World::insert_root`]/[`World::add_child`]
//! once the scene knows where the mesh instance sits.
//!
//! [`World`]: ../world/struct.World.html
//! [`World::insert_root`]: ../world/struct.World.html#method.insert_root
//! [`World::add_child`]: ../world/struct.World.html#method.add_child

use crate::error::RenderError;
use crate::material::Material;
use crate::shape::{ShapeEnum, SmoothTriangle, Triangle};
use crate::transform::Transform;
use nalgebra::{Point3, Vector3};
use std::path::Path;

/// One group's worth of a parsed mesh: its own transform, the triangles it
/// owns directly, and any named subgroups nested beneath it.
pub struct MeshNode {
    /// This group's transform, relative to wherever it's attached.
    pub transform: Transform,
    /// Flat or smooth triangles belonging directly to this group.
    pub triangles: Vec<ShapeEnum>,
    /// Named subgroups nested under this one.
    pub children: Vec<MeshNode>,
}

/// Parse the OBJ file at `path`, applying `material` uniformly to every
/// face, into a [`MeshNode`] tree ready to be inserted into a world.
///
/// [`MeshNode`]: struct.MeshNode.html
pub fn load(path: &Path, material: &Material) -> Result<MeshNode, RenderError> {
    let options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };
    let (models, _materials) = tobj::load_obj(path, &options)?;

    let mut children = Vec::with_capacity(models.len());
    for model in &models {
        children.push(MeshNode {
            transform: Transform::identity(),
            triangles: mesh_triangles(model, material)?,
            children: Vec::new(),
        });
    }

    Ok(MeshNode {
        transform: Transform::identity(),
        triangles: Vec::new(),
        children,
    })
}

fn mesh_triangles(model: &tobj::Model, material: &Material) -> Result<Vec<ShapeEnum>, RenderError> {
    let mesh = &model.mesh;
    let positions: Vec<Point3<f64>> = mesh
        .positions
        .chunks(3)
        .map(|p| Point3::new(p[0] as f64, p[1] as f64, p[2] as f64))
        .collect();
    let normals: Vec<Vector3<f64>> = mesh
        .normals
        .chunks(3)
        .map(|n| Vector3::new(n[0] as f64, n[1] as f64, n[2] as f64))
        .collect();
    let has_normals = normals.len() == positions.len();

    let mut triangles = Vec::with_capacity(mesh.indices.len() / 3);
    for face in mesh.indices.chunks(3) {
        let (i0, i1, i2) = (face[0] as usize, face[1] as usize, face[2] as usize);
        let (p1, p2, p3) = (positions[i0], positions[i1], positions[i2]);

        let shape = if has_normals {
            SmoothTriangle::try_new(p1, p2, p3, normals[i0], normals[i1], normals[i2])
                .map(|t| ShapeEnum::SmoothTriangle(t.with(Transform::identity(), material.clone())))
        } else {
            Triangle::try_new(p1, p2, p3)
                .map(|t| ShapeEnum::Triangle(t.with(Transform::identity(), material.clone())))
        };

        match shape {
            Ok(shape) => triangles.push(shape),
            // A degenerate face (colinear or zero-area) contributes no
            // geometry rather than failing the whole mesh load.
            Err(_) => continue,
        }
    }
    Ok(triangles)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_file_is_a_mesh_load_error() {
        let result = load(Path::new("/nonexistent/teapot.obj"), &Material::default());
        assert!(matches!(result, Err(RenderError::MeshLoad(_))));
    }
}
