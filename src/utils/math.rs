use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Map a normalised complexity value onto a mesh slice count.
///
/// Complexity varies over [0, 1] and slices over 3..=12; out-of-range
/// input is clamped since GUI bounds are advisory only.
pub fn complexity_to_slices(complexity: f64) -> u32 {
    let clamped = complexity.clamp(0.0, 1.0);
    3 + (9.0 * clamped).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_conversions() {
        assert_relative_eq!(deg_to_rad(180.0), PI);
        assert_relative_eq!(rad_to_deg(PI / 2.0), 90.0);
    }

    #[test]
    fn test_complexity_mapping_range() {
        assert_eq!(complexity_to_slices(0.0), 3);
        assert_eq!(complexity_to_slices(0.5), 8);
        assert_eq!(complexity_to_slices(1.0), 12);
    }

    #[test]
    fn test_complexity_mapping_clamps() {
        assert_eq!(complexity_to_slices(-2.0), 3);
        assert_eq!(complexity_to_slices(7.5), 12);
    }
}
