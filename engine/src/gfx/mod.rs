//! Presentation backend boundary.
//!
//! The simulation never talks to a window, a terminal or a GPU directly. It
//! drives whatever implements [`Backend`]: a surface it can clear and present,
//! an input source, a texture loader and two draw primitives. Creating the
//! backend opens the window; dropping it closes it. Textures follow the same
//! rule and are released when dropped.

use std::path::Path;

pub mod color;
pub mod error;
pub mod headless;

pub use color::Rgba;
pub use error::BackendError;
pub use headless::{DrawCommand, HeadlessBackend, HeadlessTexture};

/// Opaque identity of a loaded texture. Two draws with the same id share one
/// GPU resource and can be batched together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// How a texture is sampled when drawn at a sub-pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Snap to the pixel the position falls in.
    #[default]
    Point,
    /// Snap to the nearest pixel.
    Bilinear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Shift,
    Control,
    Alt,
}

/// Window parameters handed to a backend constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Requested surface width in pixels.
    pub width: u32,
    /// Requested surface height in pixels.
    pub height: u32,
    /// Presentation rate `end_drawing` paces itself to. `0` disables pacing.
    pub target_fps: u32,
    pub background: Rgba,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "bunnymark".into(),
            width: 800,
            height: 450,
            target_fps: 60,
            background: Rgba::RAY_WHITE,
        }
    }
}

/// A GPU (or GPU-like) image owned by the backend.
pub trait Texture {
    fn id(&self) -> TextureId;

    /// Width in surface pixels.
    fn width(&self) -> u32;

    /// Height in surface pixels.
    fn height(&self) -> u32;

    fn set_filter(&mut self, filter: FilterMode);
}

/// The presentation surface (window) the frame loop draws into.
pub trait Surface {
    /// Surface size in pixels.
    fn size(&self) -> (u32, u32);

    /// Pump pending platform events and report whether a close was requested.
    /// Called once per frame, before any other work.
    fn close_requested(&mut self) -> bool;

    fn begin_drawing(&mut self);

    fn clear_background(&mut self, color: Rgba);

    /// Present the frame and wait for the next presentation slot.
    fn end_drawing(&mut self) -> Result<(), BackendError>;
}

/// Per-frame input state, sampled by [`Surface::close_requested`].
pub trait Input {
    /// Edge-triggered: true only on the frame the button went down.
    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool;

    /// Level-triggered: true while the modifier is held.
    fn is_modifier_down(&self, modifier: Modifier) -> bool;
}

/// Draw primitives.
pub trait Canvas {
    type Texture: Texture;

    /// Draw `texture` with its top-left corner at `(x, y)`, modulated by `tint`.
    fn draw_texture(&mut self, texture: &Self::Texture, x: f32, y: f32, tint: Rgba);

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: u16, color: Rgba);
}

pub trait TextureLoader: Canvas {
    fn load_texture(&mut self, path: &Path) -> Result<Self::Texture, BackendError>;
}

/// Everything the frame loop needs from the outside world.
pub trait Backend: Surface + Input + TextureLoader {}

impl<T> Backend for T where T: Surface + Input + TextureLoader {}
