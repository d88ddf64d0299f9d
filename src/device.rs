//! Device capability boundary.
//!
//! Everything that touches a window, input hardware, audio stream, or actual
//! pixels goes through [`DeviceManager`]. The core only decides *what* to
//! draw and in which order; the host supplies the backend (and tests supply a
//! recording mock). The trait is object safe and lives in the world as a
//! non-send resource, keeping the whole frame loop on one thread.

use glam::Vec2;

use crate::collision::Rect;
use crate::color::Color;
use crate::resources::config::EngineConfig;

/// Mouse buttons the core polls and re-broadcasts as signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];
}

/// Logical keys the core polls and re-broadcasts as signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
}

impl Key {
    pub const ALL: [Key; 11] = [
        Key::Escape,
        Key::Enter,
        Key::Space,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
    ];
}

/// Fully resolved sprite draw call handed to the device.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    pub sheet: String,
    pub frame: String,
    /// Source rectangle inside the sheet.
    pub src: Rect,
    /// World anchor position.
    pub pos: Vec2,
    /// Normalized pivot relative to the source rectangle.
    pub pivot: Vec2,
    pub scale: f32,
    pub rotation: f32,
    pub flip_h: bool,
    pub flip_v: bool,
    pub tint: Color,
}

/// Capability boundary for window, input, drawing, and audio primitives.
pub trait DeviceManager {
    // -- window lifecycle --
    fn open(&mut self, config: &EngineConfig);
    fn close(&mut self);
    fn begin_frame(&mut self);
    fn end_frame(&mut self);
    fn should_close(&self) -> bool;
    /// Wall-clock seconds since the previous frame.
    fn frame_delta(&self) -> f32;

    // -- input polling --
    fn mouse_position(&self) -> Vec2;
    fn mouse_pressed(&self, button: MouseButton) -> bool;
    fn mouse_released(&self, button: MouseButton) -> bool;
    fn key_pressed(&self, key: Key) -> bool;
    fn key_released(&self, key: Key) -> bool;

    // -- drawing --
    fn draw_sprite(&mut self, draw: &SpriteDraw);
    fn draw_text(&mut self, text: &str, font: &str, pos: Vec2, size: f32, color: Color);
    fn measure_text(&self, text: &str, font: &str, size: f32) -> Vec2;
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_rect_outline(&mut self, rect: Rect, color: Color);
    fn draw_rect_gradient(&mut self, rect: Rect, top: Color, bottom: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn begin_scissor(&mut self, rect: Rect);
    fn end_scissor(&mut self);

    // -- audio --
    fn play_music(&mut self, name: &str, volume: f32);
    fn stop_music(&mut self, name: &str);
    fn pause_music(&mut self, name: &str);
    fn resume_music(&mut self, name: &str);
    fn set_music_volume(&mut self, name: &str, volume: f32);
    /// Keep the stream decoder primed. Called every tick for every known
    /// track regardless of its play state.
    fn update_music_stream(&mut self, name: &str);
    fn play_sound(&mut self, name: &str, volume: f32);
    fn set_master_volume(&mut self, volume: f32);
}

/// How the device capability is stored in the world (non-send resource).
pub type DeviceBox = Box<dyn DeviceManager>;
