use std::collections::HashMap;

use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::paint::Image;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, TextureId};

use super::common::{
    begin_load_pass, create_viewport_ubo, viewport_bgl_entry, write_viewport_uniform,
    BlendMode, GrowableBuffer, QuadVertex, QUAD_INDICES, QUAD_VERTICES,
};

/// Per-texture draw state, fixed at upload time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextureOptions {
    pub blend: BlendMode,
    /// Multiplies every blit of this texture; `1.0` = unmodulated.
    pub alpha_mod: f32,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self { blend: BlendMode::Alpha, alpha_mod: 1.0 }
    }
}

struct TextureSlot {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    options: TextureOptions,
}

/// Renderer for `DrawCmd::Sprite`.
///
/// Owns the textures it draws. Upload with [`SpriteRenderer::create_texture`]
/// and reference the returned [`TextureId`] from sprite commands. Consecutive
/// sprites sharing a texture are drawn with one instanced call.
#[derive(Default)]
pub struct SpriteRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipelines: HashMap<BlendMode, wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    viewport_ubo: Option<wgpu::Buffer>,
    sampler: Option<wgpu::Sampler>,

    textures: Vec<TextureSlot>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,
    instances: Vec<(TextureId, SpriteInstance)>,
    instance_vbo: GrowableBuffer,

    warned_unknown_texture: bool,
}

impl SpriteRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads `image` as an RGBA8 texture.
    ///
    /// Fails when the image is empty or exceeds the device's 2D texture limit.
    pub fn create_texture(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &Image,
        options: TextureOptions,
        label: &str,
    ) -> Result<TextureId> {
        anyhow::ensure!(!image.is_empty(), "texture `{label}` has zero size");

        let max_dim = device.limits().max_texture_dimension_2d;
        anyhow::ensure!(
            image.width() <= max_dim && image.height() <= max_dim,
            "texture `{label}` is {}x{}, device limit is {max_dim}",
            image.width(),
            image.height(),
        );

        let id = u32::try_from(self.textures.len())
            .map(TextureId)
            .context("too many sprite textures")?;

        self.ensure_layout(device);
        let (Some(bgl), Some(ubo), Some(sampler)) = (
            self.bind_group_layout.as_ref(),
            self.viewport_ubo.as_ref(),
            self.sampler.as_ref(),
        ) else {
            anyhow::bail!("sprite bind group layout unavailable");
        };

        let size = wgpu::Extent3d {
            width: image.width(),
            height: image.height(),
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.as_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width()),
                rows_per_image: Some(image.height()),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        let options = TextureOptions {
            alpha_mod: options.alpha_mod.clamp(0.0, 1.0),
            ..options
        };

        log::debug!(
            "texture `{label}` uploaded as {id:?}: {}x{}, {} blend, alpha mod {:.3}",
            image.width(),
            image.height(),
            options.blend.label(),
            options.alpha_mod,
        );

        self.textures.push(TextureSlot { _texture: texture, bind_group, options });
        Ok(id)
    }

    /// Renders all `DrawCmd::Sprite` entries in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.instances.clear();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Sprite(cmd) = &item.cmd else { continue };

            let Some(slot) = self.textures.get(cmd.texture.0 as usize) else {
                if !self.warned_unknown_texture {
                    log::warn!("sprite references unknown texture {:?}; skipped", cmd.texture);
                    self.warned_unknown_texture = true;
                }
                continue;
            };

            let dst = cmd.dst.normalized();
            if dst.is_empty() || !dst.is_finite() {
                continue;
            }

            let max = dst.max();
            self.instances.push((
                cmd.texture,
                SpriteInstance {
                    dst_min: [dst.origin.x, dst.origin.y],
                    dst_max: [max.x, max.y],
                    tint: cmd.tint.faded(slot.options.alpha_mod).to_array(),
                },
            ));
        }

        if self.instances.is_empty() {
            return;
        }

        self.ensure_layout(ctx.device);
        self.ensure_pipelines(ctx);
        self.ensure_static_buffers(ctx);

        let raw: Vec<SpriteInstance> = self.instances.iter().map(|(_, inst)| *inst).collect();
        let Some(instance_vbo) = self.instance_vbo.upload(ctx, "starfield sprite instance vbo", &raw)
        else {
            return;
        };

        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        write_viewport_uniform(ctx, ubo);

        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = begin_load_pass(ctx, target, "starfield sprite pass");
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);

        for (texture, range) in texture_runs(&self.instances) {
            let Some(slot) = self.textures.get(texture.0 as usize) else { continue };
            let Some(pipeline) = self.pipelines.get(&slot.options.blend) else { continue };

            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, &slot.bind_group, &[]);
            rpass.draw_indexed(0..6, 0, range);
        }
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_layout(&mut self, device: &wgpu::Device) {
        if self.bind_group_layout.is_some() && self.viewport_ubo.is_some() && self.sampler.is_some()
        {
            return;
        }

        self.bind_group_layout = Some(device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("starfield sprite bgl"),
                entries: &[
                    viewport_bgl_entry(),
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            },
        ));

        self.viewport_ubo = Some(create_viewport_ubo(device, "starfield sprite viewport ubo"));

        self.sampler = Some(device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("starfield sprite sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }));
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && !self.pipelines.is_empty() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("starfield sprite shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("starfield sprite pipeline layout"),
            bind_group_layouts: &[bgl],
            immediate_size: 0,
        });

        self.pipelines.clear();
        for blend in [BlendMode::Alpha, BlendMode::Additive] {
            let label = format!("starfield sprite pipeline ({})", blend.label());
            let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label.as_str()),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[QuadVertex::layout(), SpriteInstance::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(blend.blend_state()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });
            self.pipelines.insert(blend, pipeline);
        }

        self.pipeline_format = Some(ctx.surface_format);
        log::debug!("sprite pipelines built for {:?}", ctx.surface_format);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }
        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("starfield sprite quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("starfield sprite quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

/// Splits instances into maximal runs that share a texture, preserving order.
fn texture_runs<T>(instances: &[(TextureId, T)]) -> Vec<(TextureId, std::ops::Range<u32>)> {
    let mut runs = Vec::new();
    let mut i = 0usize;
    while i < instances.len() {
        let texture = instances[i].0;
        let mut j = i + 1;
        while j < instances.len() && instances[j].0 == texture {
            j += 1;
        }
        runs.push((texture, i as u32..j as u32));
        i = j;
    }
    runs
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (32 bytes):
///
///  offset  0  dst_min  [f32; 2]   loc 1
///  offset  8  dst_max  [f32; 2]   loc 2
///  offset 16  tint     [f32; 4]   loc 3
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct SpriteInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    tint: [f32; 4],
}

impl SpriteInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x4  // tint
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_group_consecutive_textures_only() {
        let a = TextureId(0);
        let b = TextureId(1);
        let runs = texture_runs(&[(a, ()), (a, ()), (b, ()), (a, ())]);
        assert_eq!(runs, vec![(a, 0..2), (b, 2..3), (a, 3..4)]);
    }

    #[test]
    fn runs_of_empty_input() {
        assert!(texture_runs::<()>(&[]).is_empty());
    }

    #[test]
    fn instance_layout_is_32_bytes() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 32);
    }
}
