pub mod controller;
pub mod keyboard;

pub use controller::apply_controls;
pub use keyboard::{KeyCode, KeyboardState};
