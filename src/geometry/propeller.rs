use glam::{vec3, Vec3};
use std::f64::consts::TAU;
use std::f32::consts::PI;

use crate::geometry::{MeshData, Sphere};
use crate::render::RenderContext;
use crate::utils::{SimError, IDLE_SPIN_RATE, SPIN_RATE_PER_VELOCITY};

/// Where the two engine propellers sit relative to the vehicle frame,
/// just aft of the nacelles under the gondola.
const ENGINE_OFFSETS: [Vec3; 2] = [
    Vec3::new(0.1, -0.5, -0.46),
    Vec3::new(-0.1, -0.5, -0.46),
];

/// A spinning blade pair with a spherical hub, one per engine nacelle.
///
/// The blade angle is advanced by `set_spin` during the kinematic
/// update; `display` only reads it, so repeated draws of the same frame
/// are identical.
#[derive(Debug, Clone)]
pub struct Propeller {
    hub: Sphere,
    blade: MeshData,
    angle: f64,
    spin_rate: f64,
}

impl Propeller {
    pub fn new(slices: u32, stacks: u32) -> Result<Self, SimError> {
        Ok(Self {
            hub: Sphere::new(slices, stacks)?,
            blade: build_blade(),
            angle: 0.0,
            spin_rate: 0.0,
        })
    }

    /// Feed the vehicle's scalar velocity into the visual spin.
    ///
    /// The rate never drops below the idle rate, so the blades keep
    /// ticking over while the vehicle hovers, and reversing thrust
    /// spins them just as fast.
    pub fn set_spin(&mut self, velocity: f64) {
        self.spin_rate = IDLE_SPIN_RATE + velocity.abs() * SPIN_RATE_PER_VELOCITY;
        self.angle = (self.angle + self.spin_rate) % TAU;
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn spin_rate(&self) -> f64 {
        self.spin_rate
    }

    pub fn display(&self, ctx: &mut dyn RenderContext) {
        for offset in ENGINE_OFFSETS {
            ctx.push();
            ctx.translate(offset);
            ctx.rotate(self.angle as f32, Vec3::Z);

            ctx.push();
            ctx.scale(Vec3::splat(0.03));
            self.hub.display(ctx);
            ctx.pop();

            for blade_index in 0..2u32 {
                ctx.push();
                ctx.rotate(blade_index as f32 * PI, Vec3::Z);
                ctx.scale(vec3(0.02, 0.12, 0.02));
                ctx.draw(&self.blade);
                ctx.pop();
            }

            ctx.pop();
        }
    }
}

/// A thin two-sided blade quad reaching from the hub along +y.
fn build_blade() -> MeshData {
    let mut mesh = MeshData::with_capacity("blade", 12);

    let root_left = vec3(-0.5, 0.0, 0.0);
    let root_right = vec3(0.5, 0.0, 0.0);
    let tip_right = vec3(0.35, 1.0, 0.0);
    let tip_left = vec3(-0.35, 1.0, 0.0);

    mesh.push_flat_triangle(root_left, root_right, tip_right, Vec3::Z);
    mesh.push_flat_triangle(root_left, tip_right, tip_left, Vec3::Z);
    mesh.push_flat_triangle(root_left, tip_right, root_right, -Vec3::Z);
    mesh.push_flat_triangle(root_left, tip_left, tip_right, -Vec3::Z);

    mesh
}
