/// Circular orbit math — pure functions, no engine state.
///
/// Angles accumulate in f64 without wrapping; a long session adds up to large
/// angles and f32 would lose the sub-frame increments.

use glam::Vec3;

/// Self-rotation about Y applied per unpaused update, independent of frame time.
pub const SELF_ROTATION_STEP: f32 = 0.03;

/// Advance an orbital angle by `dt` seconds at `speed` radians per second.
pub fn advance_angle(angle: f64, speed: f32, dt: f32) -> f64 {
    angle + dt as f64 * speed as f64
}

/// Position on a horizontal circle of radius `distance` at `height`.
pub fn orbit_position(distance: f32, angle: f64, height: f32) -> Vec3 {
    let d = distance as f64;
    Vec3::new((d * angle.cos()) as f32, height, (d * angle.sin()) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_after_one_second() {
        let angle = advance_angle(0.0, 0.6, 1.0);
        assert!((angle - 0.6).abs() < 1e-6);
        let pos = orbit_position(18.0, angle, 0.0);
        assert!((pos.x - 14.856).abs() < 1e-2, "x = {}", pos.x);
        assert!((pos.z - 10.164).abs() < 1e-2, "z = {}", pos.z);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn position_stays_on_circle() {
        let mut angle = 1.3;
        for step in 0..500 {
            angle = advance_angle(angle, 0.25 + step as f32 * 0.01, 0.016);
            let pos = orbit_position(34.0, angle, 0.0);
            let r = (pos.x * pos.x + pos.z * pos.z).sqrt();
            assert!((r - 34.0).abs() < 1e-3);
        }
    }

    #[test]
    fn angles_accumulate_without_wrapping() {
        let mut angle = 0.0;
        for _ in 0..1000 {
            angle = advance_angle(angle, 1.0, 0.1);
        }
        assert!((angle - 100.0).abs() < 1e-4);
    }

    #[test]
    fn zero_delta_keeps_angle() {
        assert_eq!(advance_angle(2.5, 0.8, 0.0), 2.5);
    }

    #[test]
    fn negative_speed_runs_backwards() {
        assert!(advance_angle(1.0, -0.5, 1.0) < 1.0);
    }
}
