use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Handle to a texture owned by a sprite renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

/// Textured-rectangle blit payload.
///
/// The whole texture is stretched over `dst`. `tint` multiplies the sampled
/// color; blend mode and alpha modulation are properties of the texture.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCmd {
    pub texture: TextureId,
    pub dst: Rect,
    pub tint: Color,
}

impl SpriteCmd {
    #[inline]
    pub fn new(texture: TextureId, dst: Rect, tint: Color) -> Self {
        Self { texture, dst, tint }
    }
}

impl DrawList {
    /// Records a sprite blit.
    #[inline]
    pub fn push_sprite(&mut self, z: ZIndex, texture: TextureId, dst: Rect, tint: Color) {
        self.push(z, DrawCmd::Sprite(SpriteCmd::new(texture, dst, tint)));
    }
}
