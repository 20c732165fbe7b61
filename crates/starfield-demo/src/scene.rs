//! Per-frame update and draw-list recording.

use rand::Rng;
use rand::rngs::StdRng;

use starfield_engine::coords::{Rect, Vec2};
use starfield_engine::paint::Color;
use starfield_engine::scene::{ColoredVertex, DrawList, TextureId, ZIndex};

use crate::config::StarfieldConfig;
use crate::ship::{self, Flame, Ship};
use crate::starfield::Starfield;

pub const LAYER_POINTS: ZIndex = ZIndex(0);
pub const LAYER_FLAME: ZIndex = ZIndex(1);
pub const LAYER_SHIP: ZIndex = ZIndex(2);
pub const LAYER_GLOW: ZIndex = ZIndex(3);

/// Glow blit sizes, in logical pixels.
pub const THRUSTER_GLOW_SIZE: f32 = 80.0;
pub const BODY_GLOW_SIZE: f32 = 70.0;
pub const AMBIENT_GLOW_SIZE: f32 = 240.0;

const NOSE_COLOR: [u8; 3] = [0, 255, 0];
const REAR_COLOR: [u8; 3] = [0, 200, 0];
const FLAME_TIP_COLOR: [u8; 3] = [255, 100, 30];
const FLAME_BASE_COLOR: [u8; 3] = [255, 200, 30];

/// Ship and flame geometry for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameGeometry {
    pub ship: Ship,
    pub flame: Flame,
}

impl FrameGeometry {
    /// Glow destinations in paint order: thruster, body, ambient.
    pub fn glow_rects(&self) -> [Rect; 3] {
        [
            Rect::centered_square(self.flame.tip, THRUSTER_GLOW_SIZE),
            Rect::centered_square(self.ship.center, BODY_GLOW_SIZE),
            Rect::centered_square(self.ship.center, AMBIENT_GLOW_SIZE),
        ]
    }
}

/// All simulation state of the demo, owned in one place.
pub struct Scene<R = StdRng> {
    config: StarfieldConfig,
    starfield: Starfield,
    rng: R,
    draw_list: DrawList,
}

impl<R: Rng> Scene<R> {
    pub fn new(config: StarfieldConfig, mut rng: R) -> Self {
        let starfield =
            Starfield::scatter(config.point_count, config.logical_size, config.speed, &mut rng);

        Self {
            config,
            starfield,
            rng,
            draw_list: DrawList::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    #[inline]
    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    #[inline]
    pub fn draw_list_mut(&mut self) -> &mut DrawList {
        &mut self.draw_list
    }

    /// Advances the points by `elapsed` seconds and computes the ship and
    /// flame for `now_ms`.
    pub fn update(&mut self, elapsed: f32, now_ms: u64) -> FrameGeometry {
        self.starfield.advance(elapsed, &mut self.rng);

        let size = self.config.logical_size;
        let center = Vec2::new(size.width * 0.5, size.height * 0.5);
        let ship = Ship::at(center, self.config.ship_size, ship::heading(now_ms));
        let flame = ship.flame(ship::flame_length(now_ms));

        FrameGeometry { ship, flame }
    }

    /// Rebuilds the draw list: points, flame, ship, then the three glows.
    pub fn record(&mut self, geometry: &FrameGeometry, glow: TextureId) {
        let dl = &mut self.draw_list;
        dl.clear();

        dl.push_points(LAYER_POINTS, self.starfield.positions().to_vec(), Color::white());

        let flame_base = rgb(FLAME_BASE_COLOR);
        dl.push_triangle(
            LAYER_FLAME,
            [
                ColoredVertex::new(geometry.flame.tip, rgb(FLAME_TIP_COLOR)),
                ColoredVertex::new(geometry.flame.rear_left, flame_base),
                ColoredVertex::new(geometry.flame.rear_right, flame_base),
            ],
        );

        let rear = rgb(REAR_COLOR);
        dl.push_triangle(
            LAYER_SHIP,
            [
                ColoredVertex::new(geometry.ship.nose, rgb(NOSE_COLOR)),
                ColoredVertex::new(geometry.ship.rear_left, rear),
                ColoredVertex::new(geometry.ship.rear_right, rear),
            ],
        );

        for dst in geometry.glow_rects() {
            dl.push_sprite(LAYER_GLOW, glow, dst, Color::white());
        }
    }

    /// [`Scene::update`] followed by [`Scene::record`].
    pub fn step(&mut self, elapsed: f32, now_ms: u64, glow: TextureId) -> FrameGeometry {
        let geometry = self.update(elapsed, now_ms);
        self.record(&geometry, glow);
        geometry
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgb8(r, g, b)
}
