use crate::render::RenderContext;
use crate::scene::SceneSettings;

/// The per-frame seam between the driving loop and a vehicle.
///
/// The driver calls `update` with the frame timestamp, then `display`
/// with the scene settings and a transform stack. Rendering must not
/// mutate vehicle state; all mutation goes through `update` and the
/// vehicle's command methods.
pub trait Vehicle {
    /// Advance kinematic state to the supplied timestamp, which is
    /// monotonically non-decreasing across calls.
    fn update(&mut self, t: f64);

    /// Issue the transform and draw operations for the current state.
    fn display(&self, settings: &SceneSettings, ctx: &mut dyn RenderContext);

    /// Return translational and guidance state to the origin without
    /// rebuilding geometry.
    fn reset(&mut self);
}
