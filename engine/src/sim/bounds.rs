/// The rectangle sprite positions are clamped to.
///
/// Positions are top-left corners, so the far edges are the surface size minus
/// the sprite size. Built once at startup and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
}

impl WorldBounds {
    /// Bounds from explicit edges. A max below its min collapses onto the min
    /// so both axes stay ordered.
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x: max_x.max(min_x),
            min_y,
            max_y: max_y.max(min_y),
        }
    }

    /// Bounds that keep a `sprite_width` x `sprite_height` sprite fully on a
    /// `surface_width` x `surface_height` surface.
    pub fn for_surface(
        surface_width: u32,
        surface_height: u32,
        sprite_width: u32,
        sprite_height: u32,
    ) -> Self {
        Self::new(
            0.0,
            surface_width.saturating_sub(sprite_width) as f32,
            0.0,
            surface_height.saturating_sub(sprite_height) as f32,
        )
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.min_x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.min_y
    }

    /// The floor.
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_minus_sprite() {
        let bounds = WorldBounds::for_surface(800, 450, 32, 32);
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.max_x(), 768.0);
        assert_eq!(bounds.min_y(), 0.0);
        assert_eq!(bounds.max_y(), 418.0);
    }

    #[test]
    fn oversized_sprite_collapses_axis() {
        let bounds = WorldBounds::for_surface(16, 16, 32, 8);
        assert_eq!(bounds.max_x(), 0.0);
        assert_eq!(bounds.max_y(), 8.0);
    }

    #[test]
    fn inverted_edges_are_ordered() {
        let bounds = WorldBounds::new(10.0, 5.0, 0.0, 1.0);
        assert!(bounds.min_x() <= bounds.max_x());
    }

    #[test]
    fn contains_is_inclusive() {
        let bounds = WorldBounds::new(0.0, 10.0, 0.0, 5.0);
        assert!(bounds.contains(0.0, 0.0));
        assert!(bounds.contains(10.0, 5.0));
        assert!(!bounds.contains(10.1, 5.0));
        assert!(!bounds.contains(5.0, -0.1));
    }
}
