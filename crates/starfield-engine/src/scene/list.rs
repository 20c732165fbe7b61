use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// Each renderer draws its own command kind in paint order within one pass, so
/// ordering across kinds follows the order in which renderers are invoked.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;
    use crate::scene::TextureId;

    fn sprite_x(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Sprite(s) => s.dst.origin.x,
            other => panic!("unexpected command {other:?}"),
        }
    }

    fn push_marker(list: &mut DrawList, z: i32, x: f32) {
        list.push_sprite(ZIndex::new(z), TextureId(0), Rect::new(x, 0.0, 1.0, 1.0), Color::white());
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        push_marker(&mut list, 2, 0.0);
        push_marker(&mut list, 0, 1.0);
        push_marker(&mut list, 2, 2.0);
        push_marker(&mut list, 1, 3.0);

        let xs: Vec<f32> = list.iter_in_paint_order().map(sprite_x).collect();
        assert_eq!(xs, vec![1.0, 3.0, 0.0, 2.0]);
    }

    #[test]
    fn clear_resets_order_and_items() {
        let mut list = DrawList::new();
        push_marker(&mut list, 0, 0.0);
        list.clear();
        assert!(list.is_empty());

        push_marker(&mut list, 0, 5.0);
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(list.iter_in_paint_order().count(), 1);
    }

    #[test]
    fn insertion_order_is_kept_across_kinds() {
        let mut list = DrawList::new();
        list.push_points(ZIndex::default(), vec![Vec2::zero()], Color::white());
        push_marker(&mut list, 0, 0.0);
        assert!(matches!(list.items()[0].cmd, DrawCmd::Points(_)));
        assert!(matches!(list.items()[1].cmd, DrawCmd::Sprite(_)));
    }
}
