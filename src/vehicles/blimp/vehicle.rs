use glam::{vec3, Vec3};
use nalgebra::Vector3;
use std::f32::consts::FRAC_PI_2;
use tracing::debug;

use crate::geometry::{Cylinder, FanMesh, Propeller, Rudder, Sphere};
use crate::render::RenderContext;
use crate::scene::SceneSettings;
use crate::utils::{deg_to_rad, SimError, ORBIT_RADIUS, RUDDER_DEFLECTION};
use crate::vehicles::blimp::state::{BlimpState, GuidanceMode, Orbit};
use crate::vehicles::Vehicle;

/// A procedurally built dirigible: balloon hull, gondola, four rudders,
/// and twin engine propellers, driven over the ground plane by a simple
/// constant-velocity model with a circular-orbit autopilot.
pub struct Blimp {
    pub state: BlimpState,
    fan: FanMesh,
    balloon: Sphere,
    gondola: Cylinder,
    top_rudder: Rudder,
    bottom_rudder: Rudder,
    starboard_rudder: Rudder,
    port_rudder: Rudder,
    propeller: Propeller,
}

impl Blimp {
    /// Build all sub-meshes at the given resolution. Resolution is
    /// fixed for the lifetime of the vehicle except for the fan mesh,
    /// which `set_complexity` rebuilds.
    pub fn new(slices: u32, stacks: u32) -> Result<Self, SimError> {
        Ok(Self {
            state: BlimpState::default(),
            fan: FanMesh::new(slices)?,
            balloon: Sphere::new(slices, stacks)?,
            gondola: Cylinder::new(slices)?,
            top_rudder: Rudder::new(),
            bottom_rudder: Rudder::new(),
            starboard_rudder: Rudder::new(),
            port_rudder: Rudder::new(),
            propeller: Propeller::new(slices, stacks)?,
        })
    }

    /// Adjust heading by `delta` degrees. The sign is flipped while
    /// reversing so the turn matches the apparent direction of travel.
    pub fn turn(&mut self, delta: f64) {
        if self.state.velocity < 0.0 {
            self.state.orientation -= delta;
        } else {
            self.state.orientation += delta;
        }
    }

    /// Add `delta` to the scalar velocity. No clamping: GUI bounds are
    /// advisory and out-of-range input is accepted.
    pub fn accelerate(&mut self, delta: f64) {
        self.state.velocity += delta;
    }

    /// Engage the autopilot: snapshot an orbit centred one radius to
    /// the side of the current position and zero the angular
    /// accumulator. The orbit completes automatically in `update`.
    pub fn engage_autopilot(&mut self) {
        let heading = -deg_to_rad(self.state.orientation);
        let center = Vector3::new(
            self.state.position.x - ORBIT_RADIUS * heading.cos(),
            0.0,
            self.state.position.z - ORBIT_RADIUS * heading.sin(),
        );
        debug!(?center, "autopilot engaged");
        self.state.guidance = GuidanceMode::Autopilot(Orbit::new(center));
    }

    pub fn set_turn_flags(&mut self, left: bool, right: bool) {
        self.state.turning_left = left;
        self.state.turning_right = right;
    }

    /// Rebuild the fan mesh for a new complexity setting; the other
    /// sub-meshes keep their construction resolution.
    pub fn set_complexity(&mut self, complexity: f64) {
        self.fan.set_complexity(complexity);
    }

    pub fn fan(&self) -> &FanMesh {
        &self.fan
    }

    pub fn propeller(&self) -> &Propeller {
        &self.propeller
    }

    fn display_vertical_rudder(
        &self,
        rudder: &Rudder,
        offset: Vec3,
        factors: Vec3,
        ctx: &mut dyn RenderContext,
    ) {
        ctx.push();
        ctx.translate(offset);
        ctx.rotate(FRAC_PI_2, Vec3::Y);
        ctx.scale(factors);
        // Right and autopilot take precedence over left: the flags are
        // not mutually exclusive and the original checks in this order.
        if self.state.turning_right || self.state.is_autopilot() {
            ctx.rotate(RUDDER_DEFLECTION, Vec3::Y);
        } else if self.state.turning_left {
            ctx.translate(vec3(0.0, 0.0, 0.2));
            ctx.rotate(-RUDDER_DEFLECTION, Vec3::Y);
        }
        rudder.display(ctx);
        ctx.pop();
    }
}

impl Vehicle for Blimp {
    fn update(&mut self, t: f64) {
        let orbit_complete = if let GuidanceMode::Autopilot(orbit) = &mut self.state.guidance {
            orbit.advance(t);
            orbit.completed()
        } else {
            // Constant-velocity step per call, independent of the
            // elapsed time: a deliberate simplification, not a physics
            // integrator.
            let heading = deg_to_rad(self.state.orientation);
            self.state.position.x += self.state.velocity * heading.sin();
            self.state.position.z += self.state.velocity * heading.cos();
            false
        };
        if orbit_complete {
            debug!("autopilot orbit complete, returning to manual");
            self.state.guidance = GuidanceMode::Manual;
        }
        self.propeller.set_spin(self.state.velocity);
    }

    fn display(&self, settings: &SceneSettings, ctx: &mut dyn RenderContext) {
        let state = &self.state;
        ctx.push();

        // While orbiting, the whole vehicle pivots about the orbit
        // centre by the accumulated angle.
        if let GuidanceMode::Autopilot(orbit) = &state.guidance {
            let center = vec3(orbit.center.x as f32, 0.0, orbit.center.z as f32);
            ctx.translate(center);
            ctx.rotate(orbit.angle as f32, Vec3::Y);
            ctx.translate(-center);
        }

        ctx.scale(Vec3::splat(settings.scale_factor as f32));
        ctx.translate(vec3(state.position.x as f32, 0.0, state.position.z as f32));
        ctx.rotate(deg_to_rad(state.orientation) as f32, Vec3::Y);

        // Balloon hull
        ctx.push();
        ctx.scale(vec3(0.5, 0.5, 1.0));
        self.balloon.display(ctx);
        ctx.pop();

        // Gondola
        ctx.push();
        ctx.translate(vec3(0.0, -0.5, -0.3));
        ctx.scale(vec3(0.1, 0.1, 0.6));
        ctx.rotate(FRAC_PI_2, Vec3::X);
        self.gondola.display(ctx);
        ctx.pop();

        // Tail fins: vertical pair deflects with the turn flags
        self.display_vertical_rudder(
            &self.top_rudder,
            vec3(0.0, 0.35, -1.0),
            vec3(0.3, 0.3, 0.3),
            ctx,
        );

        // Gondola end caps
        ctx.push();
        ctx.translate(vec3(0.0, -0.51, 0.3));
        ctx.scale(Vec3::splat(0.09));
        self.balloon.display(ctx);
        ctx.pop();

        ctx.push();
        ctx.translate(vec3(0.0, -0.51, -0.3));
        ctx.scale(Vec3::splat(0.09));
        self.balloon.display(ctx);
        ctx.pop();

        self.display_vertical_rudder(
            &self.bottom_rudder,
            vec3(0.0, -0.35, -1.0),
            vec3(0.3, -0.3, 0.3),
            ctx,
        );

        // Horizontal fins, mirrored port and starboard
        ctx.push();
        ctx.translate(vec3(0.25, 0.0, -1.2));
        ctx.rotate(FRAC_PI_2, Vec3::Y);
        ctx.rotate(-FRAC_PI_2, Vec3::X);
        ctx.scale(vec3(0.25, -0.25, 0.25));
        self.starboard_rudder.display(ctx);
        ctx.pop();

        ctx.push();
        ctx.translate(vec3(-0.25, 0.0, -1.2));
        ctx.rotate(-FRAC_PI_2, Vec3::Y);
        ctx.rotate(FRAC_PI_2, Vec3::X);
        ctx.scale(vec3(-0.25, 0.25, -0.25));
        self.port_rudder.display(ctx);
        ctx.pop();

        // Engine nacelles
        ctx.push();
        ctx.translate(vec3(0.1, -0.5, -0.25));
        ctx.scale(vec3(0.08, 0.08, 0.2));
        self.balloon.display(ctx);
        ctx.pop();

        ctx.push();
        ctx.translate(vec3(-0.1, -0.5, -0.25));
        ctx.scale(vec3(0.08, 0.08, 0.2));
        self.balloon.display(ctx);
        ctx.pop();

        self.propeller.display(ctx);

        ctx.pop();
    }

    fn reset(&mut self) {
        debug!("vehicle reset");
        self.state.velocity = 0.0;
        self.state.position = Vector3::zeros();
        self.state.orientation = 0.0;
        self.state.guidance = GuidanceMode::Manual;
    }
}
