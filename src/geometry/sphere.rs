use glam::vec3;
use std::f32::consts::{PI, TAU};

use crate::geometry::MeshData;
use crate::render::RenderContext;
use crate::utils::SimError;

/// A smooth-shaded UV sphere of unit radius centred on the origin.
///
/// Vertices are shared between adjacent quads and each normal equals
/// its vertex position, unlike the faceted fan mesh.
#[derive(Debug, Clone)]
pub struct Sphere {
    mesh: MeshData,
}

impl Sphere {
    /// # Arguments
    /// * `slices` - Longitudinal divisions, at least 3.
    /// * `stacks` - Latitudinal divisions, at least 2.
    pub fn new(slices: u32, stacks: u32) -> Result<Self, SimError> {
        if slices < 3 || stacks < 2 {
            return Err(SimError::InvalidConfig(format!(
                "sphere requires slices >= 3 and stacks >= 2, got {slices}x{stacks}"
            )));
        }
        Ok(Self {
            mesh: build_sphere(slices, stacks),
        })
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    pub fn display(&self, ctx: &mut dyn RenderContext) {
        ctx.draw(&self.mesh);
    }
}

fn build_sphere(slices: u32, stacks: u32) -> MeshData {
    let ring = slices + 1;
    let mut mesh = MeshData::with_capacity("sphere", (ring * (stacks + 1)) as usize);

    for stack in 0..=stacks {
        let phi = stack as f32 / stacks as f32 * PI;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for slice in 0..=slices {
            let theta = slice as f32 / slices as f32 * TAU;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let position = vec3(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
            mesh.vertices.push(position);
            mesh.normals.push(position);
        }
    }

    for stack in 0..stacks {
        for slice in 0..slices {
            let i0 = stack * ring + slice;
            let i1 = i0 + 1;
            let i2 = i0 + ring;
            let i3 = i2 + 1;

            mesh.indices.extend_from_slice(&[i0, i2, i1]);
            mesh.indices.extend_from_slice(&[i1, i2, i3]);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertices_on_unit_radius() {
        let sphere = Sphere::new(8, 4).unwrap();
        for vertex in &sphere.mesh().vertices {
            assert_relative_eq!(vertex.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_normals_equal_positions() {
        let sphere = Sphere::new(6, 3).unwrap();
        let mesh = sphere.mesh();
        assert_eq!(mesh.vertices, mesh.normals);
    }

    #[test]
    fn test_index_count() {
        let sphere = Sphere::new(8, 4).unwrap();
        // Two triangles per quad
        assert_eq!(sphere.mesh().indices.len(), (8 * 4 * 6) as usize);
    }

    #[test]
    fn test_degenerate_resolution_rejected() {
        assert!(Sphere::new(2, 4).is_err());
        assert!(Sphere::new(8, 1).is_err());
    }
}
