use std::path::Path;

use log::info;

use super::bounds::WorldBounds;
use super::config::SimConfig;
use super::random::{RandomSource, SeededRandom};
use super::render::{self, HudStats};
use super::store::SpriteStore;
use super::{physics, population};
use crate::core::StartupError;
use crate::gfx::{
    BackendError, Canvas, FilterMode, Input, Modifier, MouseButton, Surface, Texture,
    TextureLoader,
};

/// One running bunnymark: the sprite store, the world it lives in, its random
/// stream and the texture every sprite is drawn with.
///
/// The context owns all simulation state; nothing is global, so several
/// simulations can coexist in one process. Dropping it releases the texture.
pub struct Bunnymark<T: Texture, R: RandomSource = SeededRandom> {
    store: SpriteStore,
    bounds: WorldBounds,
    config: SimConfig,
    rng: R,
    texture: T,
}

impl<T: Texture> Bunnymark<T, SeededRandom> {
    /// Load the shared texture from `backend` and build a simulation sized to
    /// the backend's surface. Any failure here is fatal for the caller.
    pub fn load<B>(
        backend: &mut B,
        config: &SimConfig,
        texture_path: &Path,
        filter: FilterMode,
    ) -> Result<Self, StartupError>
    where
        B: Surface + TextureLoader + Canvas<Texture = T>,
    {
        let mut texture = backend
            .load_texture(texture_path)
            .map_err(StartupError::Texture)?;
        texture.set_filter(filter);

        let (width, height) = backend.size();
        if texture.width() > width || texture.height() > height {
            return Err(StartupError::Surface(BackendError::SurfaceTooSmall {
                width,
                height,
                min_width: texture.width(),
                min_height: texture.height(),
            }));
        }

        let rng = match config.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        info!(
            "loaded texture {} as {:?} ({}x{} px, {:?} filter)",
            texture_path.display(),
            texture.id(),
            texture.width(),
            texture.height(),
            filter
        );
        Ok(Self::new(config, texture, (width, height), rng))
    }
}

impl<T: Texture, R: RandomSource> Bunnymark<T, R> {
    /// Build a simulation around an already loaded texture.
    pub fn new(config: &SimConfig, texture: T, surface: (u32, u32), rng: R) -> Self {
        let bounds =
            WorldBounds::for_surface(surface.0, surface.1, texture.width(), texture.height());
        info!(
            "simulation ready: capacity {}, bounds {:?}",
            config.capacity, bounds
        );
        Self {
            store: SpriteStore::with_capacity(config.capacity),
            bounds,
            config: config.clone(),
            rng,
            texture,
        }
    }

    pub fn store(&self) -> &SpriteStore {
        &self.store
    }

    /// Live sprite count.
    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn bounds(&self) -> &WorldBounds {
        &self.bounds
    }

    pub fn texture(&self) -> &T {
        &self.texture
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Spawn up to `n` sprites. See [`population::add`].
    pub fn add(&mut self, n: usize) -> usize {
        population::add(&mut self.store, n, &mut self.rng)
    }

    /// Retire up to `n` sprites. See [`population::remove`].
    pub fn remove(&mut self, n: usize) -> usize {
        population::remove(&mut self.store, n)
    }

    /// Left click adds a batch, right click removes one. Shift boosts the
    /// batch size.
    pub fn handle_input<I: Input + ?Sized>(&mut self, input: &I) {
        let batch = self.config.batch(input.is_modifier_down(Modifier::Shift));
        if input.is_mouse_button_pressed(MouseButton::Left) {
            self.add(batch);
        }
        if input.is_mouse_button_pressed(MouseButton::Right) {
            self.remove(batch);
        }
    }

    /// Integrate every live sprite by one frame.
    pub fn update(&mut self) {
        physics::step(
            self.store.live_mut(),
            &self.bounds,
            &self.config.physics,
            &mut self.rng,
        );
    }

    /// Draw every live sprite and the overlay onto `canvas`.
    pub fn render<C>(&self, canvas: &mut C, stats: &HudStats)
    where
        C: Canvas<Texture = T> + ?Sized,
    {
        render::draw(canvas, &self.texture, &self.store, stats);
    }
}

impl<T: Texture, R: RandomSource> Drop for Bunnymark<T, R> {
    fn drop(&mut self) {
        info!(
            "shutting down with {} live sprites, releasing texture {:?}",
            self.store.count(),
            self.texture.id()
        );
    }
}
