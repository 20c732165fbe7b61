use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use starfield_engine::core::{App, AppControl, AppOutcome, FrameCtx, InitCtx};
use starfield_engine::paint::{Color, RadialFalloff};
use starfield_engine::render::shapes::points::PointRenderer;
use starfield_engine::render::shapes::sprite::{SpriteRenderer, TextureOptions};
use starfield_engine::render::shapes::triangle::TriangleRenderer;
use starfield_engine::render::shapes::BlendMode;
use starfield_engine::scene::TextureId;

use crate::config::StarfieldConfig;
use crate::scene::Scene;

/// Engine-facing side of the demo: owns the scene, the renderers and the glow
/// texture handle.
pub struct StarfieldApp {
    scene: Scene,

    point_renderer: PointRenderer,
    triangle_renderer: TriangleRenderer,
    sprite_renderer: SpriteRenderer,

    glow: Option<TextureId>,
}

impl StarfieldApp {
    /// Seeds the point field from OS entropy.
    pub fn new(config: StarfieldConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: StarfieldConfig, rng: StdRng) -> Result<Self> {
        config.validate().context("invalid starfield configuration")?;

        Ok(Self {
            scene: Scene::new(config, rng),
            point_renderer: PointRenderer::new(),
            triangle_renderer: TriangleRenderer::new(),
            sprite_renderer: SpriteRenderer::new(),
            glow: None,
        })
    }
}

impl App for StarfieldApp {
    fn init(&mut self, ctx: &mut InitCtx<'_, '_>) -> Result<()> {
        let config = self.scene.config();
        let image = RadialFalloff::new(config.glow_radius, config.glow_rgb).render();
        let options = TextureOptions {
            blend: BlendMode::Additive,
            alpha_mod: f32::from(config.glow_alpha_mod) / 255.0,
        };

        let glow = self
            .sprite_renderer
            .create_texture(ctx.gpu.device(), ctx.gpu.queue(), &image, options, "glow")
            .context("failed to create glow texture")?;

        log::debug!("glow texture {glow:?}: {}x{}", image.width(), image.height());
        self.glow = Some(glow);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(glow) = self.glow else {
            log::error!("frame requested before the glow texture exists");
            return AppControl::Exit;
        };

        self.scene.step(ctx.time.dt, ctx.time.ticks_ms(), glow);

        let dl = self.scene.draw_list_mut();
        let points = &mut self.point_renderer;
        let triangles = &mut self.triangle_renderer;
        let sprites = &mut self.sprite_renderer;

        ctx.render(Color::black(), |rctx, target| {
            points.render(rctx, target, dl);
            triangles.render(rctx, target, dl);
            sprites.render(rctx, target, dl);
        })
    }

    fn on_quit(&mut self, outcome: AppOutcome) {
        log::info!(
            "starfield stopped ({outcome:?}) with {} points",
            self.scene.starfield().len()
        );
    }
}
