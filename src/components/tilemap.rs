use bevy_ecs::prelude::{Component, Entity};
use glam::Vec2;

/// Marks an entity as the anchor of a tiled map. The tilemap manager
/// materializes one tile-sprite entity per placement the first time it sees
/// the component.
#[derive(Component, Clone, Debug)]
pub struct TiledMap {
    /// Tiled-map definition name resolved through storage.
    pub map: String,
    pub scale: f32,
}

impl TiledMap {
    pub fn new(map: impl Into<String>) -> Self {
        TiledMap {
            map: map.into(),
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Last-applied anchor and scale of a tiled map plus the tile entities it
/// spawned, so later frames shift the existing tiles by the position delta
/// instead of rebuilding them.
#[derive(Component, Clone, Debug)]
pub struct TiledMapState {
    pub pos: Vec2,
    pub scale: f32,
    pub tiles: Vec<Entity>,
}
