use std::f32::consts::FRAC_PI_4;

use starfield_engine::coords::Vec2;

/// Heading of the ship before wobble is applied (radians, +Y down).
pub const BASE_HEADING: f32 = -FRAC_PI_4;
pub const WOBBLE_RATE: f64 = 0.005;
pub const WOBBLE_AMPLITUDE: f32 = 0.1;

pub const FLAME_BASE_LENGTH: f32 = 25.0;
pub const FLAME_FLICKER_RATE: f64 = 0.02;
pub const FLAME_FLICKER_AMPLITUDE: f32 = 6.0;

/// Ship rotation at `now_ms` milliseconds since start.
pub fn heading(now_ms: u64) -> f32 {
    BASE_HEADING + wave(now_ms, WOBBLE_RATE) * WOBBLE_AMPLITUDE
}

/// Flame length at `now_ms`, oscillating within `[19, 31]`.
pub fn flame_length(now_ms: u64) -> f32 {
    FLAME_BASE_LENGTH + wave(now_ms, FLAME_FLICKER_RATE) * FLAME_FLICKER_AMPLITUDE
}

// Phase is computed in f64 so long runs keep their precision.
fn wave(now_ms: u64, rate: f64) -> f32 {
    (now_ms as f64 * rate).sin() as f32
}

/// Ship triangle after rotation about its center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ship {
    pub center: Vec2,
    pub heading: f32,
    pub nose: Vec2,
    pub rear_left: Vec2,
    pub rear_right: Vec2,
}

impl Ship {
    /// Upward-pointing isosceles triangle of half-extent `size`, rotated by
    /// `heading` about `center`.
    pub fn at(center: Vec2, size: f32, heading: f32) -> Self {
        let nose = Vec2::new(center.x, center.y - size);
        let rear_left = Vec2::new(center.x - size, center.y + size);
        let rear_right = Vec2::new(center.x + size, center.y + size);

        Self {
            center,
            heading,
            nose: nose.rotated_about(center, heading),
            rear_left: rear_left.rotated_about(center, heading),
            rear_right: rear_right.rotated_about(center, heading),
        }
    }

    #[inline]
    pub fn vertices(&self) -> [Vec2; 3] {
        [self.nose, self.rear_left, self.rear_right]
    }

    /// Midpoint of the rear edge; the flame is anchored here.
    #[inline]
    pub fn rear_midpoint(&self) -> Vec2 {
        self.rear_left.midpoint(self.rear_right)
    }

    /// Flame extending `length` from the rear midpoint, opposite the heading.
    pub fn flame(&self, length: f32) -> Flame {
        let tip = self.rear_midpoint() - Vec2::from_angle(self.heading) * length;
        Flame {
            tip,
            rear_left: self.rear_left,
            rear_right: self.rear_right,
        }
    }
}

/// Thruster flame triangle: the tip plus the ship's rear vertices.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Flame {
    pub tip: Vec2,
    pub rear_left: Vec2,
    pub rear_right: Vec2,
}

impl Flame {
    #[inline]
    pub fn vertices(&self) -> [Vec2; 3] {
        [self.tip, self.rear_left, self.rear_right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Vec2 = Vec2::new(320.0, 240.0);
    const EPS: f32 = 1e-3;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPS
    }

    #[test]
    fn at_time_zero_wobble_and_flicker_vanish() {
        assert_eq!(heading(0), BASE_HEADING);
        assert_eq!(flame_length(0), 25.0);
    }

    #[test]
    fn heading_stays_within_wobble_bounds() {
        for ms in (0..200_000).step_by(7) {
            let h = heading(ms);
            assert!((h - BASE_HEADING).abs() <= WOBBLE_AMPLITUDE + 1e-6, "ms={ms} h={h}");
        }
    }

    #[test]
    fn flame_length_stays_within_flicker_bounds() {
        for ms in (0..200_000).step_by(3) {
            let len = flame_length(ms);
            assert!((19.0..=31.0).contains(&len), "ms={ms} len={len}");
        }
    }

    #[test]
    fn unrotated_ship_points_up() {
        let ship = Ship::at(CENTER, 20.0, 0.0);
        assert_eq!(ship.nose, Vec2::new(320.0, 220.0));
        assert_eq!(ship.rear_left, Vec2::new(300.0, 260.0));
        assert_eq!(ship.rear_right, Vec2::new(340.0, 260.0));
        assert_eq!(ship.rear_midpoint(), Vec2::new(320.0, 260.0));
    }

    #[test]
    fn rotation_preserves_distance_from_center() {
        let upright = Ship::at(CENTER, 20.0, 0.0);

        for ms in (0..10_000).step_by(37) {
            let ship = Ship::at(CENTER, 20.0, heading(ms));
            for (before, after) in upright.vertices().into_iter().zip(ship.vertices()) {
                assert!(approx(before.distance(CENTER), after.distance(CENTER)));
            }
        }
    }

    #[test]
    fn flame_tip_extends_opposite_heading() {
        let ship = Ship::at(CENTER, 20.0, 0.0);
        let flame = ship.flame(25.0);

        // Heading 0 points along +X, so the tip sits 25 px to the left of the anchor.
        assert!(approx(flame.tip.x, 295.0));
        assert!(approx(flame.tip.y, 260.0));
        assert_eq!(flame.rear_left, ship.rear_left);
        assert_eq!(flame.rear_right, ship.rear_right);
    }

    #[test]
    fn flame_tip_is_flame_length_from_anchor() {
        for ms in (0..5_000).step_by(41) {
            let ship = Ship::at(CENTER, 20.0, heading(ms));
            let len = flame_length(ms);
            let flame = ship.flame(len);
            assert!(approx(flame.tip.distance(ship.rear_midpoint()), len));
        }
    }
}
