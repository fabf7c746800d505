pub mod geometry;
pub mod input;
pub mod render;
pub mod scene;
pub mod utils;
pub mod vehicles;

pub use geometry::{Cylinder, FanMesh, MeshData, Propeller, Rudder, Sphere};
pub use input::{KeyCode, KeyboardState};
pub use render::{DrawCall, MatrixStack, OpRecorder, RenderContext, TransformOp};
pub use scene::SceneSettings;
pub use utils::errors::SimError;
pub use vehicles::{Blimp, Vehicle};
