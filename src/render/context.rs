use glam::Vec3;

use crate::geometry::MeshData;

/// Immediate-mode transform-stack boundary between the scene model and
/// whatever renders it.
///
/// Shapes are drawn during a depth-first traversal: `push` saves the
/// current local-to-world transform, the translate/rotate/scale calls
/// compose onto it in call order, `draw` emits a mesh under it, and
/// `pop` restores the saved transform. All operations are total and
/// return nothing.
pub trait RenderContext {
    fn push(&mut self);
    fn pop(&mut self);
    fn translate(&mut self, offset: Vec3);
    /// Rotate about `axis` (unit length) by `angle` radians.
    fn rotate(&mut self, angle: f32, axis: Vec3);
    fn scale(&mut self, factors: Vec3);
    fn draw(&mut self, mesh: &MeshData);
}
