use glam::vec3;
use std::f32::consts::TAU;

use crate::geometry::MeshData;
use crate::render::RenderContext;
use crate::utils::SimError;

/// An open-ended unit cylinder along +z, radius 1, spanning z in [0, 1].
///
/// Side normals are radial and shared along each vertical seam for
/// smooth shading; the ends are left uncapped, matching how the
/// gondola hull is assembled from separate cap spheres.
#[derive(Debug, Clone)]
pub struct Cylinder {
    mesh: MeshData,
}

impl Cylinder {
    /// # Arguments
    /// * `slices` - Radial divisions, at least 3.
    pub fn new(slices: u32) -> Result<Self, SimError> {
        if slices < 3 {
            return Err(SimError::InvalidConfig(format!(
                "cylinder requires at least 3 slices, got {slices}"
            )));
        }
        Ok(Self {
            mesh: build_cylinder(slices),
        })
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    pub fn display(&self, ctx: &mut dyn RenderContext) {
        ctx.draw(&self.mesh);
    }
}

fn build_cylinder(slices: u32) -> MeshData {
    let ring = slices + 1;
    let mut mesh = MeshData::with_capacity("cylinder", (2 * ring) as usize);

    for slice in 0..=slices {
        let theta = slice as f32 / slices as f32 * TAU;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let normal = vec3(cos_theta, sin_theta, 0.0);

        mesh.vertices.push(vec3(cos_theta, sin_theta, 0.0));
        mesh.normals.push(normal);
        mesh.vertices.push(vec3(cos_theta, sin_theta, 1.0));
        mesh.normals.push(normal);
    }

    for slice in 0..slices {
        let i0 = 2 * slice;
        let i1 = i0 + 1;
        let i2 = i0 + 2;
        let i3 = i0 + 3;

        mesh.indices.extend_from_slice(&[i0, i2, i1]);
        mesh.indices.extend_from_slice(&[i1, i2, i3]);
    }

    mesh
}
