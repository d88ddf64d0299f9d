//! Shared test doubles: a recording mock device and an in-memory storage.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use bevy_ecs::event::Event;
use bevy_ecs::world::World;
use glam::Vec2;
use rustc_hash::FxHashMap;

use emberengine::collision::Rect;
use emberengine::color::Color;
use emberengine::device::{DeviceManager, Key, MouseButton, SpriteDraw};
use emberengine::resources::config::EngineConfig;
use emberengine::storage::{
    FontDef, MusicDef, SoundDef, SpriteDef, StorageManager, TiledMapDef,
};

/// Every call a test can assert on, in the order the device received them.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    Open,
    Close,
    BeginFrame,
    EndFrame,
    DrawSprite(SpriteDraw),
    DrawText {
        text: String,
        font: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
    DrawRect {
        rect: Rect,
        color: Color,
    },
    DrawRectOutline {
        rect: Rect,
        color: Color,
    },
    DrawRectGradient {
        rect: Rect,
        top: Color,
        bottom: Color,
    },
    DrawLine {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    BeginScissor(Rect),
    EndScissor,
    PlayMusic {
        name: String,
        volume: f32,
    },
    StopMusic(String),
    PauseMusic(String),
    ResumeMusic(String),
    SetMusicVolume {
        name: String,
        volume: f32,
    },
    UpdateMusicStream(String),
    PlaySound {
        name: String,
        volume: f32,
    },
    SetMasterVolume(f32),
}

pub type CallLog = Rc<RefCell<Vec<DeviceCall>>>;

/// Inputs the mock reports on the next poll. Edges are one-shot: the input
/// pump reads them every frame, so tests clear them between ticks.
#[derive(Default)]
pub struct DeviceScript {
    pub mouse_pos: Vec2,
    pub mouse_pressed: Vec<MouseButton>,
    pub mouse_released: Vec<MouseButton>,
    pub keys_pressed: Vec<Key>,
    pub keys_released: Vec<Key>,
    pub should_close: bool,
}

impl DeviceScript {
    pub fn clear_edges(&mut self) {
        self.mouse_pressed.clear();
        self.mouse_released.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
    }
}

pub type ScriptHandle = Rc<RefCell<DeviceScript>>;

/// Recording device: appends every call to a shared log and answers input
/// polls from a shared script.
pub struct MockDevice {
    pub calls: CallLog,
    pub script: ScriptHandle,
    /// Constant per-frame delta reported by `frame_delta`.
    pub delta: f32,
}

impl MockDevice {
    pub fn new(delta: f32) -> (Self, CallLog, ScriptHandle) {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let script: ScriptHandle = Rc::new(RefCell::new(DeviceScript::default()));
        let device = MockDevice {
            calls: Rc::clone(&calls),
            script: Rc::clone(&script),
            delta,
        };
        (device, calls, script)
    }

    fn log(&self, call: DeviceCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl DeviceManager for MockDevice {
    fn open(&mut self, _config: &EngineConfig) {
        self.log(DeviceCall::Open);
    }
    fn close(&mut self) {
        self.log(DeviceCall::Close);
    }
    fn begin_frame(&mut self) {
        self.log(DeviceCall::BeginFrame);
    }
    fn end_frame(&mut self) {
        self.log(DeviceCall::EndFrame);
    }
    fn should_close(&self) -> bool {
        self.script.borrow().should_close
    }
    fn frame_delta(&self) -> f32 {
        self.delta
    }

    fn mouse_position(&self) -> Vec2 {
        self.script.borrow().mouse_pos
    }
    fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.script.borrow().mouse_pressed.contains(&button)
    }
    fn mouse_released(&self, button: MouseButton) -> bool {
        self.script.borrow().mouse_released.contains(&button)
    }
    fn key_pressed(&self, key: Key) -> bool {
        self.script.borrow().keys_pressed.contains(&key)
    }
    fn key_released(&self, key: Key) -> bool {
        self.script.borrow().keys_released.contains(&key)
    }

    fn draw_sprite(&mut self, draw: &SpriteDraw) {
        self.log(DeviceCall::DrawSprite(draw.clone()));
    }
    fn draw_text(&mut self, text: &str, font: &str, pos: Vec2, size: f32, color: Color) {
        self.log(DeviceCall::DrawText {
            text: text.to_string(),
            font: font.to_string(),
            pos,
            size,
            color,
        });
    }
    fn measure_text(&self, text: &str, _font: &str, size: f32) -> Vec2 {
        // predictable box: half a glyph-height advance per character
        Vec2::new(text.len() as f32 * size * 0.5, size)
    }
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.log(DeviceCall::DrawRect { rect, color });
    }
    fn draw_rect_outline(&mut self, rect: Rect, color: Color) {
        self.log(DeviceCall::DrawRectOutline { rect, color });
    }
    fn draw_rect_gradient(&mut self, rect: Rect, top: Color, bottom: Color) {
        self.log(DeviceCall::DrawRectGradient { rect, top, bottom });
    }
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.log(DeviceCall::DrawLine { from, to, color });
    }
    fn begin_scissor(&mut self, rect: Rect) {
        self.log(DeviceCall::BeginScissor(rect));
    }
    fn end_scissor(&mut self) {
        self.log(DeviceCall::EndScissor);
    }

    fn play_music(&mut self, name: &str, volume: f32) {
        self.log(DeviceCall::PlayMusic {
            name: name.to_string(),
            volume,
        });
    }
    fn stop_music(&mut self, name: &str) {
        self.log(DeviceCall::StopMusic(name.to_string()));
    }
    fn pause_music(&mut self, name: &str) {
        self.log(DeviceCall::PauseMusic(name.to_string()));
    }
    fn resume_music(&mut self, name: &str) {
        self.log(DeviceCall::ResumeMusic(name.to_string()));
    }
    fn set_music_volume(&mut self, name: &str, volume: f32) {
        self.log(DeviceCall::SetMusicVolume {
            name: name.to_string(),
            volume,
        });
    }
    fn update_music_stream(&mut self, name: &str) {
        self.log(DeviceCall::UpdateMusicStream(name.to_string()));
    }
    fn play_sound(&mut self, name: &str, volume: f32) {
        self.log(DeviceCall::PlaySound {
            name: name.to_string(),
            volume,
        });
    }
    fn set_master_volume(&mut self, volume: f32) {
        self.log(DeviceCall::SetMasterVolume(volume));
    }
}

/// In-memory storage preloaded by the test.
#[derive(Default)]
pub struct MemoryStorage {
    sprites: FxHashMap<(String, String), SpriteDef>,
    fonts: FxHashMap<String, FontDef>,
    musics: FxHashMap<String, MusicDef>,
    sounds: FxHashMap<String, SoundDef>,
    maps: FxHashMap<String, TiledMapDef>,
    pub clear_count: Rc<RefCell<u32>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sprite(mut self, sheet: &str, name: &str, def: SpriteDef) -> Self {
        self.sprites.insert((sheet.to_string(), name.to_string()), def);
        self
    }

    pub fn with_font(mut self, name: &str) -> Self {
        self.fonts.insert(name.to_string(), FontDef { base_size: 16.0 });
        self
    }

    pub fn with_music(mut self, name: &str) -> Self {
        self.musics.insert(
            name.to_string(),
            MusicDef {
                path: format!("assets/{name}.ogg"),
            },
        );
        self
    }

    pub fn with_sound(mut self, name: &str) -> Self {
        self.sounds.insert(
            name.to_string(),
            SoundDef {
                path: format!("assets/{name}.wav"),
            },
        );
        self
    }

    pub fn with_map(mut self, name: &str, def: TiledMapDef) -> Self {
        self.maps.insert(name.to_string(), def);
        self
    }

    pub fn clear_handle(&self) -> Rc<RefCell<u32>> {
        Rc::clone(&self.clear_count)
    }
}

impl StorageManager for MemoryStorage {
    fn sprite(&self, sheet: &str, name: &str) -> Option<&SpriteDef> {
        self.sprites.get(&(sheet.to_string(), name.to_string()))
    }
    fn font(&self, name: &str) -> Option<&FontDef> {
        self.fonts.get(name)
    }
    fn music(&self, name: &str) -> Option<&MusicDef> {
        self.musics.get(name)
    }
    fn sound(&self, name: &str) -> Option<&SoundDef> {
        self.sounds.get(name)
    }
    fn tilemap(&self, name: &str) -> Option<&TiledMapDef> {
        self.maps.get(name)
    }
    fn clear(&mut self) {
        *self.clear_count.borrow_mut() += 1;
        self.sprites.clear();
        self.fonts.clear();
        self.musics.clear();
        self.sounds.clear();
        self.maps.clear();
    }
}

/// Trigger an event and apply whatever its observers queued, mirroring the
/// flush the scheduler performs after every manager system.
pub fn send<E>(world: &mut World, event: E)
where
    E: Event,
    for<'t> E::Trigger<'t>: Default,
{
    world.trigger(event);
    world.flush();
}

/// Route `log` output to the test harness. Safe to call repeatedly.
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Plain square sprite definition with a zero pivot.
pub fn square_sprite(size: f32) -> SpriteDef {
    SpriteDef {
        x: 0.0,
        y: 0.0,
        width: size,
        height: size,
        pivot_x: 0.0,
        pivot_y: 0.0,
    }
}
