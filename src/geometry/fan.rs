use glam::vec3;
use std::f32::consts::TAU;
use tracing::warn;

use crate::geometry::MeshData;
use crate::render::RenderContext;
use crate::utils::{complexity_to_slices, SimError};

/// Height of the fan apex above the rim plane.
const APEX_HEIGHT: f32 = 2.0;

/// A flat-shaded triangle fan approximating a cone or blade.
///
/// Each of the `slices` triangles runs from an apex above the origin to
/// two rim points on the unit circle. No vertices are shared between
/// faces: every triangle carries its own copy of the face normal, so
/// the shape renders faceted rather than smooth.
#[derive(Debug, Clone)]
pub struct FanMesh {
    slices: u32,
    mesh: MeshData,
}

impl FanMesh {
    /// # Arguments
    /// * `slices` - Number of triangles around the full circle; must be
    ///   at least 1.
    pub fn new(slices: u32) -> Result<Self, SimError> {
        if slices < 1 {
            return Err(SimError::InvalidConfig(
                "fan mesh requires at least 1 slice".into(),
            ));
        }
        Ok(Self {
            slices,
            mesh: build_fan(slices),
        })
    }

    pub fn slices(&self) -> u32 {
        self.slices
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Rebuild the buffers for a new complexity setting.
    ///
    /// Complexity maps linearly onto 3..=12 slices; values outside
    /// [0, 1] are clamped rather than rejected, since the GUI range is
    /// advisory. All three buffer sequences are replaced together.
    pub fn set_complexity(&mut self, complexity: f64) {
        if !(0.0..=1.0).contains(&complexity) {
            warn!(complexity, "complexity out of range, clamping to [0, 1]");
        }
        self.slices = complexity_to_slices(complexity);
        self.mesh = build_fan(self.slices);
    }

    pub fn display(&self, ctx: &mut dyn RenderContext) {
        ctx.draw(&self.mesh);
    }
}

/// Generate the fan buffers for a given slice count.
///
/// For step `i` the triangle spans the apex and the rim points at
/// angles `i*alpha` and `(i+1)*alpha`, with the rim z negated so the
/// fan winds counter-clockwise seen from above.
pub fn build_fan(slices: u32) -> MeshData {
    let mut mesh = MeshData::with_capacity("fan", 3 * slices as usize);
    let alpha = TAU / slices as f32;

    let mut ang: f32 = 0.0;
    for _ in 0..slices {
        let (sa, ca) = ang.sin_cos();
        let (saa, caa) = (ang + alpha).sin_cos();

        // Face normal: cross product of the two apex-to-rim edges.
        let normal = vec3(saa - sa, ca * saa - sa * caa, caa - ca).normalize();

        mesh.push_flat_triangle(
            vec3(0.0, APEX_HEIGHT, 0.0),
            vec3(ca, 0.0, -sa),
            vec3(caa, 0.0, -saa),
            normal,
        );

        ang += alpha;
    }
    mesh
}
