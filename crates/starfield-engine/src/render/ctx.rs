use crate::coords::{Rect, Viewport};

/// Renderer-facing context (device/queue + surface format + viewport).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical coordinate space seen by draw commands.
    pub viewport: Viewport,
    /// Destination of `viewport` on the surface, in physical pixels.
    ///
    /// `None` means the logical space covers the whole surface.
    pub presentation_rect: Option<Rect>,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
        presentation_rect: Option<Rect>,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            viewport,
            presentation_rect,
        }
    }
}

/// Target for drawing (encoder + color view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
