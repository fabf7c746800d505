mod state;
mod vehicle;

pub use state::{BlimpState, GuidanceMode, Orbit};
pub use vehicle::Blimp;
