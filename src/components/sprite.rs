use bevy_ecs::prelude::Component;

/// Renderable sprite reference: a sheet name, a frame name inside that sheet,
/// and the transform applied at draw time. Written by the animation manager
/// every tick for animated entities, or placed directly for static sprites.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct SpriteRef {
    pub sheet: String,
    pub frame: String,
    pub scale: f32,
    pub rotation: f32,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl SpriteRef {
    pub fn new(sheet: impl Into<String>, frame: impl Into<String>) -> Self {
        SpriteRef {
            sheet: sheet.into(),
            frame: frame.into(),
            scale: 1.0,
            rotation: 0.0,
            flip_h: false,
            flip_v: false,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}
