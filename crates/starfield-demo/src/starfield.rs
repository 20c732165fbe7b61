use rand::Rng;
use starfield_engine::coords::{Vec2, Viewport};

/// Inclusive speed range in logical pixels per second.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl SpeedRange {
    #[inline]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(self, speed: f32) -> bool {
        (self.min..=self.max).contains(&speed)
    }

    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Field of points streaking diagonally down-right.
///
/// Every point moves `elapsed * speed` along both axes. Points that leave the
/// bounds on the right or bottom reappear on the top or left edge with a new
/// random speed.
#[derive(Debug, Clone)]
pub struct Starfield {
    positions: Vec<Vec2>,
    speeds: Vec<f32>,
    bounds: Viewport,
    speed_range: SpeedRange,
}

impl Starfield {
    /// Places `count` points uniformly inside `bounds`, each with a random speed.
    ///
    /// `bounds` must be valid (positive and finite).
    pub fn scatter<R: Rng + ?Sized>(
        count: usize,
        bounds: Viewport,
        speed_range: SpeedRange,
        rng: &mut R,
    ) -> Self {
        debug_assert!(bounds.is_valid());

        let mut positions = Vec::with_capacity(count);
        let mut speeds = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec2::new(
                rng.gen_range(0.0..bounds.width),
                rng.gen_range(0.0..bounds.height),
            ));
            speeds.push(speed_range.sample(rng));
        }

        Self { positions, speeds, bounds, speed_range }
    }

    /// Builds a field from explicit state.
    ///
    /// Entries beyond the shorter of `positions` and `speeds` are dropped.
    pub fn from_parts(
        mut positions: Vec<Vec2>,
        mut speeds: Vec<f32>,
        bounds: Viewport,
        speed_range: SpeedRange,
    ) -> Self {
        let len = positions.len().min(speeds.len());
        positions.truncate(len);
        speeds.truncate(len);
        Self { positions, speeds, bounds, speed_range }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    #[inline]
    pub fn speeds(&self) -> &[f32] {
        &self.speeds
    }

    #[inline]
    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    /// Moves every point by `elapsed` seconds and respawns the ones that left
    /// the bounds. Returns how many points respawned.
    pub fn advance<R: Rng + ?Sized>(&mut self, elapsed: f32, rng: &mut R) -> usize {
        let mut respawned = 0;

        for (pos, speed) in self.positions.iter_mut().zip(self.speeds.iter_mut()) {
            let distance = elapsed * *speed;
            pos.x += distance;
            pos.y += distance;

            if pos.x >= self.bounds.width || pos.y >= self.bounds.height {
                *pos = respawn_position(self.bounds, rng);
                *speed = self.speed_range.sample(rng);
                respawned += 1;
            }
        }

        if respawned > 0 {
            log::trace!("respawned {respawned} of {} points", self.positions.len());
        }
        respawned
    }
}

/// Random point on the top edge or the left edge, with equal probability.
fn respawn_position<R: Rng + ?Sized>(bounds: Viewport, rng: &mut R) -> Vec2 {
    if rng.gen_bool(0.5) {
        Vec2::new(rng.gen_range(0.0..bounds.width), 0.0)
    } else {
        Vec2::new(0.0, rng.gen_range(0.0..bounds.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BOUNDS: Viewport = Viewport::new(640.0, 480.0);
    const SPEEDS: SpeedRange = SpeedRange::new(30.0, 960.0);

    fn in_bounds(p: Vec2) -> bool {
        (0.0..BOUNDS.width).contains(&p.x) && (0.0..BOUNDS.height).contains(&p.y)
    }

    fn on_respawn_edge(p: Vec2) -> bool {
        p.x == 0.0 || p.y == 0.0
    }

    #[test]
    fn scatter_places_points_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = Starfield::scatter(500, BOUNDS, SPEEDS, &mut rng);

        assert_eq!(field.len(), 500);
        assert!(field.positions().iter().all(|&p| in_bounds(p)));
        assert!(field.speeds().iter().all(|&s| SPEEDS.contains(s)));
    }

    #[test]
    fn point_moves_diagonally_by_elapsed_times_speed() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = Starfield::from_parts(
            vec![Vec2::new(100.0, 50.0)],
            vec![200.0],
            BOUNDS,
            SPEEDS,
        );

        let respawned = field.advance(0.25, &mut rng);

        assert_eq!(respawned, 0);
        assert_eq!(field.positions()[0], Vec2::new(150.0, 100.0));
        assert_eq!(field.speeds()[0], 200.0);
    }

    #[test]
    fn zero_elapsed_leaves_points_in_place() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = vec![Vec2::new(10.0, 20.0), Vec2::new(630.0, 470.0)];
        let mut field = Starfield::from_parts(start.clone(), vec![960.0, 30.0], BOUNDS, SPEEDS);

        assert_eq!(field.advance(0.0, &mut rng), 0);
        assert_eq!(field.positions(), start.as_slice());
    }

    #[test]
    fn point_past_right_edge_respawns_on_top_or_left_edge() {
        // Point 0 at (700, 10) with speed 500: after one second x = 1200 > 640.
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = Starfield::from_parts(
            vec![Vec2::new(700.0, 10.0)],
            vec![500.0],
            BOUNDS,
            SPEEDS,
        );

        assert_eq!(field.advance(1.0, &mut rng), 1);

        let p = field.positions()[0];
        assert!(in_bounds(p), "respawned at {p:?}");
        assert!(on_respawn_edge(p), "respawned at {p:?}");
        assert!(SPEEDS.contains(field.speeds()[0]));
    }

    #[test]
    fn point_past_bottom_edge_respawns() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = Starfield::from_parts(
            vec![Vec2::new(10.0, 479.0)],
            vec![30.0],
            BOUNDS,
            SPEEDS,
        );

        assert_eq!(field.advance(0.1, &mut rng), 1);
        assert!(on_respawn_edge(field.positions()[0]));
    }

    #[test]
    fn landing_exactly_on_the_edge_respawns() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = Starfield::from_parts(
            vec![Vec2::new(540.0, 0.0)],
            vec![100.0],
            BOUNDS,
            SPEEDS,
        );

        assert_eq!(field.advance(1.0, &mut rng), 1);
    }

    #[test]
    fn respawns_stay_in_bounds_over_many_frames() {
        let mut rng = StdRng::seed_from_u64(0xdead_beef);
        let mut field = Starfield::scatter(500, BOUNDS, SPEEDS, &mut rng);

        let mut total = 0;
        for frame in 0..600 {
            // Mix of regular and long frames.
            let elapsed = if frame % 50 == 0 { 0.5 } else { 1.0 / 60.0 };
            total += field.advance(elapsed, &mut rng);

            assert!(field.positions().iter().all(|&p| in_bounds(p)));
            assert!(field.speeds().iter().all(|&s| SPEEDS.contains(s)));
        }
        assert!(total > 0);
    }

    #[test]
    fn respawn_uses_both_edges() {
        let mut rng = StdRng::seed_from_u64(11);
        let (mut top, mut left) = (0, 0);
        for _ in 0..200 {
            let p = respawn_position(BOUNDS, &mut rng);
            if p.y == 0.0 {
                top += 1;
            }
            if p.x == 0.0 {
                left += 1;
            }
        }
        assert!(top > 0 && left > 0);
    }

    #[test]
    fn from_parts_truncates_to_shorter_input() {
        let field = Starfield::from_parts(
            vec![Vec2::zero(), Vec2::zero()],
            vec![100.0],
            BOUNDS,
            SPEEDS,
        );
        assert_eq!(field.len(), 1);
        assert_eq!(field.speeds().len(), 1);
    }

    #[test]
    fn speed_range_sample_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(5);
        let fixed = SpeedRange::new(500.0, 500.0);
        assert_eq!(fixed.sample(&mut rng), 500.0);
    }
}
