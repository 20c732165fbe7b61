use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Both components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Unit vector pointing along `angle` (radians, +Y down).
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: c, y: s }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    #[inline]
    pub fn midpoint(self, other: Vec2) -> Vec2 {
        (self + other) * 0.5
    }

    /// Rotates `self` by `angle` radians around `pivot`.
    ///
    /// The point is translated so the pivot sits at the origin, rotated with the
    /// standard 2D rotation matrix, then translated back.
    #[inline]
    pub fn rotated_about(self, pivot: Vec2, angle: f32) -> Vec2 {
        let (s, c) = angle.sin_cos();
        let t = self - pivot;
        Vec2::new(t.x * c - t.y * s, t.x * s + t.y * c) + pivot
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn rotate_quarter_turn_about_origin() {
        // +Y is down, so a positive quarter turn maps +X onto +Y.
        let p = Vec2::new(1.0, 0.0).rotated_about(Vec2::zero(), FRAC_PI_2);
        assert!(approx(p, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn rotate_about_pivot_keeps_pivot_fixed() {
        let pivot = Vec2::new(320.0, 240.0);
        assert!(approx(pivot.rotated_about(pivot, 1.234), pivot));
    }

    #[test]
    fn rotate_half_turn_mirrors_through_pivot() {
        let pivot = Vec2::new(10.0, 10.0);
        let p = Vec2::new(15.0, 10.0).rotated_about(pivot, PI);
        assert!(approx(p, Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn rotate_preserves_distance_to_pivot() {
        let pivot = Vec2::new(320.0, 240.0);
        let p = Vec2::new(300.0, 260.0);
        let before = p.distance(pivot);
        for i in 0..16 {
            let angle = i as f32 * 0.41 - 3.0;
            let after = p.rotated_about(pivot, angle).distance(pivot);
            assert!((before - after).abs() < 1e-3, "angle {angle}: {before} vs {after}");
        }
    }

    #[test]
    fn midpoint_is_average() {
        let m = Vec2::new(0.0, 4.0).midpoint(Vec2::new(10.0, 8.0));
        assert_eq!(m, Vec2::new(5.0, 6.0));
    }

    #[test]
    fn from_angle_is_unit_length() {
        assert!((Vec2::from_angle(0.7).length() - 1.0).abs() < 1e-6);
    }
}
