//! Storage capability boundary.
//!
//! The core never decodes sprite-sheet JSON, fonts, audio files, or tiled-map
//! XML itself; it looks decoded definitions up by logical name through the
//! [`StorageManager`] trait supplied by the host. `clear` is invoked on stage
//! change and final teardown so a new stage starts from a cold cache.

use serde::{Deserialize, Serialize};

use glam::Vec2;

/// One frame rectangle inside a sprite sheet plus its normalized pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteDef {
    /// Source rectangle origin inside the sheet, in pixels.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pivot in normalized [0, 1] sprite coordinates.
    #[serde(default)]
    pub pivot_x: f32,
    #[serde(default)]
    pub pivot_y: f32,
}

impl SpriteDef {
    pub fn pivot(&self) -> Vec2 {
        Vec2::new(self.pivot_x, self.pivot_y)
    }

    pub fn src(&self) -> crate::collision::Rect {
        crate::collision::Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Decoded font metadata. Glyph data stays on the device side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDef {
    pub base_size: f32,
}

/// A streamable music track known to the device by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicDef {
    pub path: String,
}

/// A fire-and-forget sound effect known to the device by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundDef {
    pub path: String,
}

/// Decoded tiled-map metadata: a sheet, square tile size, and per-layer tile
/// placements in tile coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiledMapDef {
    pub sheet: String,
    pub tile_size: f32,
    pub layers: Vec<TileLayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    /// Explicit render depth assigned to every tile of this layer.
    pub depth: i32,
    pub tiles: Vec<TilePlacement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilePlacement {
    pub x: i32,
    pub y: i32,
    /// Sprite frame name inside the map's sheet.
    pub frame: String,
}

/// Capability boundary for decoded asset definitions, keyed by logical name.
pub trait StorageManager {
    fn sprite(&self, sheet: &str, name: &str) -> Option<&SpriteDef>;
    fn font(&self, name: &str) -> Option<&FontDef>;
    fn music(&self, name: &str) -> Option<&MusicDef>;
    fn sound(&self, name: &str) -> Option<&SoundDef>;
    fn tilemap(&self, name: &str) -> Option<&TiledMapDef>;

    /// Drop every cached definition. Called on stage change and teardown.
    fn clear(&mut self);
}

/// How the storage capability is stored in the world (non-send resource).
pub type StorageBox = Box<dyn StorageManager>;
