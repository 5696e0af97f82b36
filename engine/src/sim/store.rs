use crate::gfx::Rgba;

/// Default number of sprite slots.
pub const DEFAULT_CAPACITY: usize = 500_000;

/// A single bouncing sprite. Plain data, identified only by its slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    /// Horizontal velocity in pixels per frame.
    pub speed_x: f32,
    /// Vertical velocity in pixels per frame. Positive is down.
    pub speed_y: f32,
    pub tint: Rgba,
}

/// Fixed-capacity sprite storage with a live-count cursor.
///
/// All slots are allocated up front in one contiguous buffer. Slots
/// `[0, count)` are live; everything past the cursor is stale and is never
/// handed out. Appending writes the slot at the cursor and bumps it, removing
/// only moves the cursor back, so both are O(1) and nothing is ever
/// reallocated or compacted.
///
/// | Operation | Time |
/// |-----------|------|
/// | `push()` | O(1) |
/// | `truncate_by()` | O(1), independent of `n` |
/// | `live()` / `live_mut()` | O(1) |
///
/// Overflow and underflow clamp instead of failing: a full store ignores
/// pushes and removing more sprites than exist empties it.
#[derive(Debug)]
pub struct SpriteStore {
    slots: Box<[Sprite]>,
    live: usize,
}

impl SpriteStore {
    /// Create an empty store with room for `capacity` sprites.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Sprite::default(); capacity].into_boxed_slice(),
            live: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live sprites.
    #[inline]
    pub fn count(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.live == self.slots.len()
    }

    /// Free slots left before the store is full.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.slots.len() - self.live
    }

    /// Live sprite at `index`, or `None` past the live count.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&Sprite> {
        self.live().get(index)
    }

    /// Mutable live sprite at `index`, or `None` past the live count.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Option<&mut Sprite> {
        self.live_mut().get_mut(index)
    }

    /// The live sprites, in slot order.
    #[inline]
    pub fn live(&self) -> &[Sprite] {
        &self.slots[..self.live]
    }

    #[inline]
    pub fn live_mut(&mut self) -> &mut [Sprite] {
        &mut self.slots[..self.live]
    }

    /// Append a sprite at the cursor. Returns `false` (and drops the sprite)
    /// when the store is full.
    #[inline]
    pub fn push(&mut self, sprite: Sprite) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[self.live] = sprite;
        self.live += 1;
        true
    }

    /// Retire the last `n` live sprites, clamped to the live count. The
    /// retired slots keep their contents until a later push overwrites them.
    /// Returns how many sprites were retired.
    #[inline]
    pub fn truncate_by(&mut self, n: usize) -> usize {
        let removed = n.min(self.live);
        self.live -= removed;
        removed
    }
}

impl Default for SpriteStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite(x: f32) -> Sprite {
        Sprite {
            x,
            ..Default::default()
        }
    }

    #[test]
    fn starts_empty() {
        let store = SpriteStore::with_capacity(8);
        assert_eq!(store.capacity(), 8);
        assert_eq!(store.count(), 0);
        assert!(store.is_empty());
        assert!(!store.is_full());
        assert!(store.live().is_empty());
        assert_eq!(store.at(0), None);
    }

    #[test]
    fn default_capacity() {
        let store = SpriteStore::default();
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn push_appends_in_order() {
        let mut store = SpriteStore::with_capacity(4);
        assert!(store.push(sprite(1.0)));
        assert!(store.push(sprite(2.0)));

        assert_eq!(store.count(), 2);
        assert_eq!(store.remaining(), 2);
        assert_eq!(store.at(0).map(|s| s.x), Some(1.0));
        assert_eq!(store.at(1).map(|s| s.x), Some(2.0));
        assert_eq!(store.at(2), None);
    }

    #[test]
    fn push_clamps_at_capacity() {
        let mut store = SpriteStore::with_capacity(2);
        assert!(store.push(sprite(1.0)));
        assert!(store.push(sprite(2.0)));
        assert!(!store.push(sprite(3.0)));

        assert!(store.is_full());
        assert_eq!(store.count(), 2);
        assert_eq!(store.live()[1].x, 2.0);
    }

    #[test]
    fn truncate_clamps_to_zero() {
        let mut store = SpriteStore::with_capacity(4);
        store.push(sprite(1.0));
        store.push(sprite(2.0));

        assert_eq!(store.truncate_by(5), 2);
        assert_eq!(store.count(), 0);
        assert_eq!(store.truncate_by(1), 0);
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn truncated_slots_are_not_reachable() {
        let mut store = SpriteStore::with_capacity(4);
        store.push(sprite(1.0));
        store.push(sprite(2.0));
        store.truncate_by(1);

        assert_eq!(store.at(1), None);
        assert!(store.at_mut(1).is_none());
        assert_eq!(store.live().len(), 1);
    }

    #[test]
    fn push_overwrites_retired_slot() {
        let mut store = SpriteStore::with_capacity(4);
        store.push(sprite(1.0));
        store.push(sprite(2.0));
        store.truncate_by(1);
        store.push(sprite(9.0));

        assert_eq!(store.count(), 2);
        assert_eq!(store.at(1).map(|s| s.x), Some(9.0));
    }

    #[test]
    fn at_mut_edits_in_place() {
        let mut store = SpriteStore::with_capacity(1);
        store.push(sprite(1.0));
        if let Some(s) = store.at_mut(0) {
            s.speed_y = 4.0;
        }
        assert_eq!(store.live()[0].speed_y, 4.0);
    }

    #[test]
    fn zero_capacity_store_is_always_full() {
        let mut store = SpriteStore::with_capacity(0);
        assert!(store.is_full());
        assert!(store.is_empty());
        assert!(!store.push(sprite(1.0)));
    }
}
