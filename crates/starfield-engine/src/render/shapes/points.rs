use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{
    begin_load_pass, create_color_pipeline, write_viewport_uniform, ColorVertex, GrowableBuffer,
    ViewportBindings,
};

/// Renderer for `DrawCmd::Points`.
///
/// Every point is rasterized as one pixel (`PointList` topology); all point
/// clouds of a frame are drawn in a single call.
#[derive(Default)]
pub struct PointRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bindings: Option<ViewportBindings>,

    vertices: Vec<ColorVertex>,
    vbo: GrowableBuffer,
}

impl PointRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.vertices.clear();
        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Points(cmd) = &item.cmd else { continue };
            let color = cmd.color.to_array();
            self.vertices.extend(
                cmd.points
                    .iter()
                    .filter(|p| p.is_finite())
                    .map(|p| ColorVertex { pos: [p.x, p.y], color }),
            );
        }

        if self.vertices.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);

        let Some(bindings) = self.bindings.as_ref() else { return };
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        write_viewport_uniform(ctx, &bindings.ubo);

        let Some(vbo) = self.vbo.upload(ctx, "starfield points vbo", &self.vertices) else {
            return;
        };

        let mut rpass = begin_load_pass(ctx, target, "starfield points pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &bindings.bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.vertices.len() as u32, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bindings = ViewportBindings::new(ctx, "starfield points bindings");
        let pipeline = create_color_pipeline(
            ctx,
            &bindings.layout,
            wgpu::PrimitiveTopology::PointList,
            "starfield points pipeline",
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bindings = Some(bindings);
        log::debug!("points pipeline built for {:?}", ctx.surface_format);
    }
}
