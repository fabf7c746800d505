use crate::input::{KeyCode, KeyboardState};
use crate::scene::SceneSettings;
use crate::utils::{ACCEL_STEP, TURN_STEP};
use crate::vehicles::{Blimp, Vehicle};

/// Translate held keys into vehicle commands, once per frame before
/// the kinematic update.
///
/// Turn and acceleration steps scale with the speed factor. Holding P
/// only engages the autopilot from manual guidance, so a held key does
/// not keep re-snapshotting the orbit and stalling its progress.
pub fn apply_controls(keys: &KeyboardState, blimp: &mut Blimp, settings: &SceneSettings) {
    let speed = settings.speed_factor;

    if keys.is_pressed(KeyCode::KeyW) {
        blimp.accelerate(ACCEL_STEP * speed);
    }
    if keys.is_pressed(KeyCode::KeyS) {
        blimp.accelerate(-ACCEL_STEP * speed);
    }

    let left = keys.is_pressed(KeyCode::KeyA);
    let right = keys.is_pressed(KeyCode::KeyD);
    if left {
        blimp.turn(TURN_STEP * speed);
    }
    if right {
        blimp.turn(-TURN_STEP * speed);
    }
    blimp.set_turn_flags(left, right);

    if keys.is_pressed(KeyCode::KeyP) && !blimp.state.is_autopilot() {
        blimp.engage_autopilot();
    }
    if keys.is_pressed(KeyCode::KeyR) {
        blimp.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn setup() -> (KeyboardState, Blimp, SceneSettings) {
        (
            KeyboardState::new(),
            Blimp::new(8, 4).unwrap(),
            SceneSettings::default(),
        )
    }

    #[test]
    fn test_accelerate_keys() {
        let (mut keys, mut blimp, settings) = setup();
        keys.press(KeyCode::KeyW);
        apply_controls(&keys, &mut blimp, &settings);
        assert_relative_eq!(blimp.state.velocity, ACCEL_STEP);

        keys.release(KeyCode::KeyW);
        keys.press(KeyCode::KeyS);
        apply_controls(&keys, &mut blimp, &settings);
        assert_relative_eq!(blimp.state.velocity, 0.0);
    }

    #[test]
    fn test_speed_factor_scales_commands() {
        let (mut keys, mut blimp, mut settings) = setup();
        settings.speed_factor = 3.0;
        keys.press(KeyCode::KeyW);
        apply_controls(&keys, &mut blimp, &settings);
        assert_relative_eq!(blimp.state.velocity, 3.0 * ACCEL_STEP);
    }

    #[test]
    fn test_turn_keys_set_flags() {
        let (mut keys, mut blimp, settings) = setup();
        blimp.accelerate(1.0);
        keys.press(KeyCode::KeyA);
        apply_controls(&keys, &mut blimp, &settings);
        assert!(blimp.state.turning_left);
        assert!(!blimp.state.turning_right);
        assert_relative_eq!(blimp.state.orientation, TURN_STEP);

        keys.release(KeyCode::KeyA);
        apply_controls(&keys, &mut blimp, &settings);
        assert!(!blimp.state.turning_left);
    }

    #[test]
    fn test_both_turn_keys_allowed() {
        let (mut keys, mut blimp, settings) = setup();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::KeyD);
        apply_controls(&keys, &mut blimp, &settings);
        // Flags are recorded as-is; precedence is resolved at display
        // time, not here.
        assert!(blimp.state.turning_left);
        assert!(blimp.state.turning_right);
        assert_relative_eq!(blimp.state.orientation, 0.0);
    }

    #[test]
    fn test_held_autopilot_key_does_not_restart_orbit() {
        let (mut keys, mut blimp, settings) = setup();
        keys.press(KeyCode::KeyP);
        apply_controls(&keys, &mut blimp, &settings);
        blimp.update(0.0);
        blimp.update(1000.0);

        apply_controls(&keys, &mut blimp, &settings);
        match &blimp.state.guidance {
            crate::vehicles::GuidanceMode::Autopilot(orbit) => {
                assert!(orbit.angle < 0.0, "orbit progress was reset");
            }
            crate::vehicles::GuidanceMode::Manual => panic!("autopilot not engaged"),
        }
    }

    #[test]
    fn test_reset_key() {
        let (mut keys, mut blimp, settings) = setup();
        blimp.accelerate(5.0);
        keys.press(KeyCode::KeyR);
        apply_controls(&keys, &mut blimp, &settings);
        assert_relative_eq!(blimp.state.velocity, 0.0);
    }
}
