pub mod context;
pub mod recorder;
pub mod stack;

pub use context::RenderContext;
pub use recorder::{OpRecorder, TransformOp};
pub use stack::{DrawCall, MatrixStack};
