/// Radius of the autopilot orbit [scene units]
pub const ORBIT_RADIUS: f64 = 5.0;

/// Time for one full autopilot orbit [timestamp units]
pub const ORBIT_PERIOD: f64 = 5000.0;

/// Rudder deflection while turning [rad]
pub const RUDDER_DEFLECTION: f32 = std::f32::consts::FRAC_PI_6;

/// Orientation change per turn command at speed factor 1 [deg]
pub const TURN_STEP: f64 = 5.0;

/// Velocity change per accelerate command at speed factor 1 [scene units/frame]
pub const ACCEL_STEP: f64 = 0.02;

/// Propeller spin rate at zero velocity [rad/frame]
pub const IDLE_SPIN_RATE: f64 = 0.1;

/// Additional propeller spin per unit of vehicle velocity [rad/frame]
pub const SPIN_RATE_PER_VELOCITY: f64 = 1.0;
