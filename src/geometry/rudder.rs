use glam::{vec3, Vec3};

use crate::geometry::MeshData;
use crate::render::RenderContext;

/// A flat trapezoidal fin in the x/y plane, drawn two-sided.
///
/// The outline is a unit-height trapezoid swept back at the tip; both
/// windings are emitted so the fin is visible from either side without
/// relying on the renderer disabling face culling.
#[derive(Debug, Clone)]
pub struct Rudder {
    mesh: MeshData,
}

impl Default for Rudder {
    fn default() -> Self {
        Self::new()
    }
}

impl Rudder {
    pub fn new() -> Self {
        Self {
            mesh: build_rudder(),
        }
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    pub fn display(&self, ctx: &mut dyn RenderContext) {
        ctx.draw(&self.mesh);
    }
}

fn build_rudder() -> MeshData {
    let root_leading = vec3(0.0, 0.0, 0.0);
    let root_trailing = vec3(1.0, 0.0, 0.0);
    let tip_trailing = vec3(0.8, 1.0, 0.0);
    let tip_leading = vec3(0.2, 1.0, 0.0);

    let mut mesh = MeshData::with_capacity("rudder", 12);

    // Front face
    mesh.push_flat_triangle(root_leading, root_trailing, tip_trailing, Vec3::Z);
    mesh.push_flat_triangle(root_leading, tip_trailing, tip_leading, Vec3::Z);

    // Back face, reversed winding
    mesh.push_flat_triangle(root_leading, tip_trailing, root_trailing, -Vec3::Z);
    mesh.push_flat_triangle(root_leading, tip_leading, tip_trailing, -Vec3::Z);

    mesh
}
