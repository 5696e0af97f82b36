use std::fs;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use bunny_engine::gfx::{
    BackendError, Canvas, Input, Modifier, MouseButton, Rgba, Surface, TextureId, TextureLoader,
    WindowConfig,
};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use log::{info, warn};

use crate::glyph::{CELL_HEIGHT, CELL_WIDTH, GlyphTexture};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    fg: Rgba,
    bg: Rgba,
}

impl Cell {
    fn blank(background: Rgba) -> Self {
        Self {
            glyph: ' ',
            fg: background,
            bg: background,
        }
    }
}

/// Presentation surface backed by the terminal.
///
/// Each cell stands for a `CELL_WIDTH` x `CELL_HEIGHT` block of pixels. The
/// surface is sized from the requested window, shrunk to what the terminal
/// can show, and stays that size for the whole run. Opening switches to the
/// alternate screen with raw mode and mouse capture; dropping restores the
/// terminal.
pub struct TerminalBackend {
    out: BufWriter<Stdout>,
    columns: u16,
    rows: u16,
    cells: Vec<Cell>,
    frame_period: Option<Duration>,
    last_present: Instant,
    pressed: Vec<MouseButton>,
    modifiers: KeyModifiers,
    close: bool,
    next_texture: u32,
    attached: bool,
}

impl TerminalBackend {
    /// Take over the terminal and open a surface for `config`.
    pub fn open(config: &WindowConfig) -> Result<Self, BackendError> {
        let (term_columns, term_rows) = terminal::size()?;
        let columns = (config.width / CELL_WIDTH).min(term_columns as u32) as u16;
        let rows = (config.height / CELL_HEIGHT).min(term_rows as u32) as u16;
        if columns == 0 || rows == 0 {
            return Err(BackendError::SurfaceTooSmall {
                width: columns as u32 * CELL_WIDTH,
                height: rows as u32 * CELL_HEIGHT,
                min_width: CELL_WIDTH,
                min_height: CELL_HEIGHT,
            });
        }

        let mut backend = Self::detached(config, columns, rows);
        // From here on Drop restores the terminal if setup fails half way.
        backend.attached = true;
        terminal::enable_raw_mode()?;
        execute!(
            backend.out,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            SetTitle(&config.title),
            Clear(ClearType::All)
        )?;
        info!(
            "opened {}x{} cell terminal surface ({}x{} px)",
            columns,
            rows,
            columns as u32 * CELL_WIDTH,
            rows as u32 * CELL_HEIGHT
        );
        backend.last_present = Instant::now();
        Ok(backend)
    }

    /// A surface that never touches the terminal until presented.
    fn detached(config: &WindowConfig, columns: u16, rows: u16) -> Self {
        let frame_period = (config.target_fps > 0)
            .then(|| Duration::from_secs_f64(1.0 / config.target_fps as f64));
        Self {
            out: BufWriter::new(io::stdout()),
            columns,
            rows,
            cells: vec![Cell::blank(config.background); columns as usize * rows as usize],
            frame_period,
            last_present: Instant::now(),
            pressed: Vec::new(),
            modifiers: KeyModifiers::NONE,
            close: false,
            next_texture: 0,
            attached: false,
        }
    }

    fn put(&mut self, column: i64, row: i64, glyph: char, color: Rgba) {
        if column < 0 || row < 0 || column >= self.columns as i64 || row >= self.rows as i64 {
            return;
        }
        let index = row as usize * self.columns as usize + column as usize;
        let cell = &mut self.cells[index];
        cell.glyph = glyph;
        cell.fg = color;
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) => {
                self.modifiers = modifiers;
                if kind != KeyEventKind::Press {
                    return;
                }
                match code {
                    KeyCode::Esc | KeyCode::Char('q') => self.close = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        self.close = true
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) => {
                self.modifiers = mouse.modifiers;
                if let MouseEventKind::Down(button) = mouse.kind {
                    self.pressed.push(match button {
                        event::MouseButton::Left => MouseButton::Left,
                        event::MouseButton::Right => MouseButton::Right,
                        event::MouseButton::Middle => MouseButton::Middle,
                    });
                }
            }
            Event::Resize(columns, rows) => {
                info!(
                    "terminal resized to {}x{}, surface stays {}x{}",
                    columns, rows, self.columns, self.rows
                );
                if let Err(err) = queue!(self.out, Clear(ClearType::All)) {
                    warn!("failed to clear after resize: {}", err);
                }
            }
            _ => {}
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut fg = None;
        let mut bg = None;
        for row in 0..self.rows {
            queue!(self.out, cursor::MoveTo(0, row))?;
            let start = row as usize * self.columns as usize;
            for index in start..start + self.columns as usize {
                let cell = self.cells[index];
                if fg != Some(cell.fg) {
                    queue!(self.out, SetForegroundColor(color(cell.fg)))?;
                    fg = Some(cell.fg);
                }
                if bg != Some(cell.bg) {
                    queue!(self.out, SetBackgroundColor(color(cell.bg)))?;
                    bg = Some(cell.bg);
                }
                queue!(self.out, Print(cell.glyph))?;
            }
        }
        self.out.flush()
    }
}

fn color(rgba: Rgba) -> Color {
    Color::Rgb {
        r: rgba.r,
        g: rgba.g,
        b: rgba.b,
    }
}

impl Surface for TerminalBackend {
    fn size(&self) -> (u32, u32) {
        (
            self.columns as u32 * CELL_WIDTH,
            self.rows as u32 * CELL_HEIGHT,
        )
    }

    fn close_requested(&mut self) -> bool {
        self.pressed.clear();
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => match event::read() {
                    Ok(event) => self.handle_event(event),
                    Err(err) => {
                        warn!("failed to read terminal event, closing: {}", err);
                        self.close = true;
                        break;
                    }
                },
                Ok(false) => break,
                Err(err) => {
                    warn!("failed to poll terminal events, closing: {}", err);
                    self.close = true;
                    break;
                }
            }
        }
        self.close
    }

    fn begin_drawing(&mut self) {}

    fn clear_background(&mut self, color: Rgba) {
        self.cells.fill(Cell::blank(color));
    }

    fn end_drawing(&mut self) -> Result<(), BackendError> {
        self.present()?;
        if let Some(period) = self.frame_period {
            let elapsed = self.last_present.elapsed();
            if elapsed < period {
                std::thread::sleep(period - elapsed);
            }
        }
        self.last_present = Instant::now();
        Ok(())
    }
}

impl Input for TerminalBackend {
    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed.contains(&button)
    }

    fn is_modifier_down(&self, modifier: Modifier) -> bool {
        let flag = match modifier {
            Modifier::Shift => KeyModifiers::SHIFT,
            Modifier::Control => KeyModifiers::CONTROL,
            Modifier::Alt => KeyModifiers::ALT,
        };
        self.modifiers.contains(flag)
    }
}

impl Canvas for TerminalBackend {
    type Texture = GlyphTexture;

    fn draw_texture(&mut self, texture: &GlyphTexture, x: f32, y: f32, tint: Rgba) {
        let (column, row) = texture.cell_of(x, y);
        for &(dx, dy, glyph) in texture.opaque() {
            self.put(column + dx as i64, row + dy as i64, glyph, tint);
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, _font_size: u16, color: Rgba) {
        let row = (y / CELL_HEIGHT as i32) as i64;
        let start = (x / CELL_WIDTH as i32) as i64;
        for (offset, glyph) in text.chars().enumerate() {
            self.put(start + offset as i64, row, glyph, color);
        }
    }
}

impl TextureLoader for TerminalBackend {
    fn load_texture(&mut self, path: &Path) -> Result<GlyphTexture, BackendError> {
        let art = fs::read_to_string(path).map_err(|err| BackendError::TextureLoad {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        let texture = GlyphTexture::parse(TextureId(self.next_texture), path, &art)?;
        self.next_texture += 1;
        Ok(texture)
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        if !self.attached {
            return;
        }
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        info!("closed terminal surface");
    }
}
