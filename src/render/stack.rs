use glam::{Mat4, Vec3};
use tracing::warn;

use crate::geometry::MeshData;
use crate::render::RenderContext;

/// A mesh flattened to world space, ready for a renderer to consume.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub mesh: &'static str,
    pub transform: Mat4,
    pub triangles: usize,
}

/// An explicit stack of 4x4 local-to-world transforms.
///
/// `push` duplicates the top matrix and `pop` discards it; transform
/// calls right-multiply the top, so nested parts compose in traversal
/// order. Draw calls are collected with the composed transform at the
/// moment of the call.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    stack: Vec<Mat4>,
    draws: Vec<DrawCall>,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    pub fn new() -> Self {
        Self {
            stack: vec![Mat4::IDENTITY],
            draws: Vec::new(),
        }
    }

    /// Current composed transform.
    pub fn top(&self) -> Mat4 {
        *self.stack.last().unwrap_or(&Mat4::IDENTITY)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.draws
    }

    /// Drop collected draw calls and restore the identity root,
    /// typically at a frame boundary.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.stack.push(Mat4::IDENTITY);
        self.draws.clear();
    }

    fn apply(&mut self, local: Mat4) {
        if let Some(top) = self.stack.last_mut() {
            *top *= local;
        }
    }
}

impl RenderContext for MatrixStack {
    fn push(&mut self) {
        let top = self.top();
        self.stack.push(top);
    }

    fn pop(&mut self) {
        // The root transform stays; popping past it is a traversal bug
        // in the caller, not a reason to panic mid-frame.
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            warn!("transform stack pop with no matching push, ignoring");
        }
    }

    fn translate(&mut self, offset: Vec3) {
        self.apply(Mat4::from_translation(offset));
    }

    fn rotate(&mut self, angle: f32, axis: Vec3) {
        self.apply(Mat4::from_axis_angle(axis, angle));
    }

    fn scale(&mut self, factors: Vec3) {
        self.apply(Mat4::from_scale(factors));
    }

    fn draw(&mut self, mesh: &MeshData) {
        self.draws.push(DrawCall {
            mesh: mesh.name,
            transform: self.top(),
            triangles: mesh.triangle_count(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::vec3;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_push_pop_restores_transform() {
        let mut stack = MatrixStack::new();
        stack.translate(vec3(1.0, 2.0, 3.0));
        let outer = stack.top();

        stack.push();
        stack.scale(Vec3::splat(2.0));
        assert_ne!(stack.top(), outer);
        stack.pop();

        assert_eq!(stack.top(), outer);
    }

    #[test]
    fn test_nested_transforms_compose_in_order() {
        let mut stack = MatrixStack::new();
        stack.translate(vec3(1.0, 0.0, 0.0));
        stack.rotate(FRAC_PI_2, Vec3::Y);

        // A point at the local origin lands at the translation.
        let origin = stack.top().transform_point3(Vec3::ZERO);
        assert_relative_eq!(origin.x, 1.0, epsilon = 1e-6);

        // Local +x is rotated into -z before the translation applies.
        let x_axis = stack.top().transform_point3(Vec3::X);
        assert_relative_eq!(x_axis.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pop_underflow_is_ignored() {
        let mut stack = MatrixStack::new();
        stack.pop();
        stack.pop();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), Mat4::IDENTITY);
    }

    #[test]
    fn test_draw_records_composed_transform() {
        let mut stack = MatrixStack::new();
        let mesh = crate::geometry::fan::build_fan(4);

        stack.push();
        stack.translate(vec3(0.0, 5.0, 0.0));
        stack.draw(&mesh);
        stack.pop();

        let calls = stack.draw_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].mesh, "fan");
        assert_eq!(calls[0].triangles, 4);
        assert_relative_eq!(
            calls[0].transform.transform_point3(Vec3::ZERO).y,
            5.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_clear_resets_frame() {
        let mut stack = MatrixStack::new();
        let mesh = crate::geometry::fan::build_fan(3);
        stack.push();
        stack.draw(&mesh);
        stack.clear();

        assert_eq!(stack.depth(), 1);
        assert!(stack.draw_calls().is_empty());
    }
}
