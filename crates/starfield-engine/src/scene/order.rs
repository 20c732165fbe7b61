/// Layer of a draw item. Higher layers paint over lower ones.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(layer: i32) -> Self {
        Self(layer)
    }
}

/// Paint-order key: layer first, then insertion order within the layer.
///
/// Field order matters; the derived `Ord` compares `z` before `order`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_wins_over_insertion_order() {
        let early_top = SortKey::new(ZIndex(3), 0);
        let late_bottom = SortKey::new(ZIndex(0), 9);
        assert!(late_bottom < early_top);
    }

    #[test]
    fn insertion_order_breaks_ties() {
        assert!(SortKey::new(ZIndex(1), 1) < SortKey::new(ZIndex(1), 2));
        assert!(ZIndex(-1) < ZIndex::default());
    }
}
