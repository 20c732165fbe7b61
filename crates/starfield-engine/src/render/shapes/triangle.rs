use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{
    begin_load_pass, create_color_pipeline, write_viewport_uniform, ColorVertex, GrowableBuffer,
    ViewportBindings,
};

/// Renderer for `DrawCmd::Triangle`.
///
/// Triangles are flattened into one `TriangleList` in paint order, so later
/// triangles cover earlier ones. Vertex colors are interpolated across each face.
#[derive(Default)]
pub struct TriangleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bindings: Option<ViewportBindings>,

    vertices: Vec<ColorVertex>,
    vbo: GrowableBuffer,
}

impl TriangleRenderer {
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
            let DrawCmd::Triangle(cmd) = &item.cmd else { continue };
            if cmd.vertices.iter().any(|v| !v.pos.is_finite()) {
                continue;
            }
            self.vertices.extend(cmd.vertices.iter().copied().map(ColorVertex::from));
        }

        if self.vertices.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);

        let Some(bindings) = self.bindings.as_ref() else { return };
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        write_viewport_uniform(ctx, &bindings.ubo);

        let Some(vbo) = self.vbo.upload(ctx, "starfield triangle vbo", &self.vertices) else {
            return;
        };

        let mut rpass = begin_load_pass(ctx, target, "starfield triangle pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &bindings.bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.vertices.len() as u32, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bindings = ViewportBindings::new(ctx, "starfield triangle bindings");
        let pipeline = create_color_pipeline(
            ctx,
            &bindings.layout,
            wgpu::PrimitiveTopology::TriangleList,
            "starfield triangle pipeline",
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bindings = Some(bindings);
        log::debug!("triangle pipeline built for {:?}", ctx.surface_format);
    }
}
