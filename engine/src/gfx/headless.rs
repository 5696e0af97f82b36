//! A backend with no window behind it.
//!
//! [`HeadlessBackend`] records what the simulation draws instead of putting it
//! on screen, replays scripted input and closes itself after a frame budget.
//! Benchmarks use it with recording turned off to measure the simulation on
//! its own; tests use it to inspect draw sequences.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::rc::Rc;

use log::debug;

use super::{
    BackendError, Canvas, FilterMode, Input, Modifier, MouseButton, Rgba, Surface, Texture,
    TextureId, TextureLoader,
};

/// One recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    Texture {
        texture: TextureId,
        x: f32,
        y: f32,
        tint: Rgba,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        font_size: u16,
        color: Rgba,
    },
}

/// Texture handed out by [`HeadlessBackend`]. Dropping it counts as a release.
#[derive(Debug)]
pub struct HeadlessTexture {
    id: TextureId,
    width: u32,
    height: u32,
    filter: FilterMode,
    releases: Rc<Cell<usize>>,
}

impl HeadlessTexture {
    pub fn filter(&self) -> FilterMode {
        self.filter
    }
}

impl Texture for HeadlessTexture {
    fn id(&self) -> TextureId {
        self.id
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
    }
}

impl Drop for HeadlessTexture {
    fn drop(&mut self) {
        self.releases.set(self.releases.get() + 1);
        debug!("released headless texture {:?}", self.id);
    }
}

/// In-memory backend for tests and benchmarks.
pub struct HeadlessBackend {
    width: u32,
    height: u32,
    texture_size: (u32, u32),
    fail_texture_loads: bool,
    next_texture: u32,
    releases: Rc<Cell<usize>>,

    frame: u64,
    frame_budget: Option<u64>,
    fail_on_frame: Option<u64>,
    close_polls: u64,

    record: bool,
    commands: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    draw_calls: usize,
    last_draw_calls: usize,

    presses: HashMap<u64, Vec<MouseButton>>,
    held: HashSet<Modifier>,
}

impl HeadlessBackend {
    /// A surface of `width` x `height` pixels that loads 32x32 textures.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            texture_size: (32, 32),
            fail_texture_loads: false,
            next_texture: 0,
            releases: Rc::new(Cell::new(0)),
            frame: 0,
            frame_budget: None,
            fail_on_frame: None,
            close_polls: 0,
            record: true,
            commands: Vec::new(),
            last_frame: Vec::new(),
            draw_calls: 0,
            last_draw_calls: 0,
            presses: HashMap::new(),
            held: HashSet::new(),
        }
    }

    /// Size of every texture this backend loads.
    pub fn with_texture_size(mut self, width: u32, height: u32) -> Self {
        self.texture_size = (width, height);
        self
    }

    /// Request a close once `frames` frames have been presented.
    pub fn with_frame_budget(mut self, frames: u64) -> Self {
        self.frame_budget = Some(frames);
        self
    }

    /// Make every `load_texture` call fail.
    pub fn with_failing_textures(mut self) -> Self {
        self.fail_texture_loads = true;
        self
    }

    /// Make `end_drawing` fail when presenting frame `frame` (zero based).
    pub fn with_present_failure(mut self, frame: u64) -> Self {
        self.fail_on_frame = Some(frame);
        self
    }

    /// Toggle command recording. Draw calls are counted either way.
    pub fn record_commands(mut self, record: bool) -> Self {
        self.record = record;
        self
    }

    /// Schedule a mouse press for frame `frame` (zero based).
    pub fn press(&mut self, frame: u64, button: MouseButton) {
        self.presses.entry(frame).or_default().push(button);
    }

    pub fn hold(&mut self, modifier: Modifier) {
        self.held.insert(modifier);
    }

    pub fn release(&mut self, modifier: Modifier) {
        self.held.remove(&modifier);
    }

    /// Frames presented so far.
    pub fn frames_presented(&self) -> u64 {
        self.frame
    }

    /// How many times the loop asked whether to close.
    pub fn close_polls(&self) -> u64 {
        self.close_polls
    }

    /// Number of textures handed out by this backend that have been dropped.
    pub fn textures_released(&self) -> usize {
        self.releases.get()
    }

    /// Commands of the last presented frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Draw calls (texture and text) of the last presented frame.
    pub fn last_draw_calls(&self) -> usize {
        self.last_draw_calls
    }

    /// Commands recorded since the last `begin_drawing` or `take_commands`.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.draw_calls = 0;
        std::mem::take(&mut self.commands)
    }

    fn record(&mut self, command: DrawCommand) {
        if self.record {
            self.commands.push(command);
        }
    }
}

impl Surface for HeadlessBackend {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn close_requested(&mut self) -> bool {
        self.close_polls += 1;
        self.frame_budget.is_some_and(|budget| self.frame >= budget)
    }

    fn begin_drawing(&mut self) {
        self.commands.clear();
        self.draw_calls = 0;
    }

    fn clear_background(&mut self, color: Rgba) {
        self.record(DrawCommand::Clear(color));
    }

    fn end_drawing(&mut self) -> Result<(), BackendError> {
        if self.fail_on_frame == Some(self.frame) {
            return Err(BackendError::Io(std::io::Error::other(
                "headless present failure",
            )));
        }
        self.last_frame = std::mem::take(&mut self.commands);
        self.last_draw_calls = self.draw_calls;
        self.draw_calls = 0;
        self.frame += 1;
        Ok(())
    }
}

impl Input for HeadlessBackend {
    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.presses
            .get(&self.frame)
            .is_some_and(|buttons| buttons.contains(&button))
    }

    fn is_modifier_down(&self, modifier: Modifier) -> bool {
        self.held.contains(&modifier)
    }
}

impl Canvas for HeadlessBackend {
    type Texture = HeadlessTexture;

    fn draw_texture(&mut self, texture: &HeadlessTexture, x: f32, y: f32, tint: Rgba) {
        self.draw_calls += 1;
        self.record(DrawCommand::Texture {
            texture: texture.id,
            x,
            y,
            tint,
        });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: u16, color: Rgba) {
        self.draw_calls += 1;
        self.record(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            font_size,
            color,
        });
    }
}

impl TextureLoader for HeadlessBackend {
    fn load_texture(&mut self, path: &Path) -> Result<HeadlessTexture, BackendError> {
        if self.fail_texture_loads {
            return Err(BackendError::TextureLoad {
                path: path.to_path_buf(),
                reason: "texture loading disabled".into(),
            });
        }
        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        debug!("loaded headless texture {:?} for {}", id, path.display());
        Ok(HeadlessTexture {
            id,
            width: self.texture_size.0,
            height: self.texture_size.1,
            filter: FilterMode::default(),
            releases: Rc::clone(&self.releases),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_after_budget() {
        let mut backend = HeadlessBackend::new(100, 100).with_frame_budget(2);
        assert!(!backend.close_requested());
        backend.begin_drawing();
        backend.end_drawing().unwrap();
        assert!(!backend.close_requested());
        backend.begin_drawing();
        backend.end_drawing().unwrap();
        assert!(backend.close_requested());
        assert_eq!(backend.close_polls(), 3);
    }

    #[test]
    fn presses_are_edge_triggered_per_frame() {
        let mut backend = HeadlessBackend::new(100, 100);
        backend.press(1, MouseButton::Left);

        assert!(!backend.is_mouse_button_pressed(MouseButton::Left));
        backend.begin_drawing();
        backend.end_drawing().unwrap();
        assert!(backend.is_mouse_button_pressed(MouseButton::Left));
        assert!(!backend.is_mouse_button_pressed(MouseButton::Right));
        backend.begin_drawing();
        backend.end_drawing().unwrap();
        assert!(!backend.is_mouse_button_pressed(MouseButton::Left));
    }

    #[test]
    fn modifiers_are_level_triggered() {
        let mut backend = HeadlessBackend::new(100, 100);
        backend.hold(Modifier::Shift);
        assert!(backend.is_modifier_down(Modifier::Shift));
        assert!(!backend.is_modifier_down(Modifier::Control));
        backend.release(Modifier::Shift);
        assert!(!backend.is_modifier_down(Modifier::Shift));
    }

    #[test]
    fn texture_drop_counts_release() {
        let mut backend = HeadlessBackend::new(100, 100).with_texture_size(16, 8);
        let texture = backend.load_texture(Path::new("bunny")).unwrap();
        assert_eq!((texture.width(), texture.height()), (16, 8));
        assert_eq!(backend.textures_released(), 0);
        drop(texture);
        assert_eq!(backend.textures_released(), 1);
    }

    #[test]
    fn frame_commands_move_to_last_frame() {
        let mut backend = HeadlessBackend::new(100, 100);
        let texture = backend.load_texture(Path::new("bunny")).unwrap();
        backend.begin_drawing();
        backend.clear_background(Rgba::WHITE);
        backend.draw_texture(&texture, 1.5, 2.5, Rgba::MAROON);
        backend.end_drawing().unwrap();

        assert_eq!(backend.last_draw_calls(), 1);
        assert_eq!(
            backend.last_frame(),
            &[
                DrawCommand::Clear(Rgba::WHITE),
                DrawCommand::Texture {
                    texture: texture.id(),
                    x: 1.5,
                    y: 2.5,
                    tint: Rgba::MAROON,
                },
            ]
        );
    }

    #[test]
    fn counting_without_recording() {
        let mut backend = HeadlessBackend::new(100, 100).record_commands(false);
        let texture = backend.load_texture(Path::new("bunny")).unwrap();
        backend.begin_drawing();
        for _ in 0..10 {
            backend.draw_texture(&texture, 0.0, 0.0, Rgba::WHITE);
        }
        backend.end_drawing().unwrap();
        assert_eq!(backend.last_draw_calls(), 10);
        assert!(backend.last_frame().is_empty());
    }
}
