use glam::Vec3;

use crate::geometry::MeshData;
use crate::render::RenderContext;

/// A single recorded transform-stack operation.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformOp {
    Push,
    Pop,
    Translate(Vec3),
    Rotate { angle: f32, axis: Vec3 },
    Scale(Vec3),
    Draw(&'static str),
}

/// Records the raw operation sequence a display traversal issues.
///
/// Two traversals of the same scene state record equal sequences, which
/// is how rendering is checked to be free of hidden state mutation.
#[derive(Debug, Clone, Default)]
pub struct OpRecorder {
    ops: Vec<TransformOp>,
}

impl OpRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    pub fn take(&mut self) -> Vec<TransformOp> {
        std::mem::take(&mut self.ops)
    }
}

impl RenderContext for OpRecorder {
    fn push(&mut self) {
        self.ops.push(TransformOp::Push);
    }

    fn pop(&mut self) {
        self.ops.push(TransformOp::Pop);
    }

    fn translate(&mut self, offset: Vec3) {
        self.ops.push(TransformOp::Translate(offset));
    }

    fn rotate(&mut self, angle: f32, axis: Vec3) {
        self.ops.push(TransformOp::Rotate { angle, axis });
    }

    fn scale(&mut self, factors: Vec3) {
        self.ops.push(TransformOp::Scale(factors));
    }

    fn draw(&mut self, mesh: &MeshData) {
        self.ops.push(TransformOp::Draw(mesh.name));
    }
}
