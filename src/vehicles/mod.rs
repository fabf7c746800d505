pub mod blimp;
pub mod traits;

pub use blimp::{Blimp, BlimpState, GuidanceMode, Orbit};
pub use traits::Vehicle;
