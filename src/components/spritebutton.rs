use bevy_ecs::prelude::Component;

/// Sprite-backed button. The UI manager keeps a live sprite reference on the
/// entity, swapping between `normal` and `hover` frame names from
/// sprite-precise (pivot/scale aware) hit tests. Activation optionally fires
/// a named sound before broadcasting the payload.
#[derive(Component, Clone, Debug)]
pub struct SpriteButton {
    pub sheet: String,
    pub normal: String,
    pub hover: String,
    pub scale: f32,
    /// Sound effect name played on activation, if any.
    pub sound: Option<String>,
    /// Opaque payload broadcast verbatim on activation.
    pub payload: String,
}

impl SpriteButton {
    pub fn new(
        sheet: impl Into<String>,
        normal: impl Into<String>,
        hover: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        SpriteButton {
            sheet: sheet.into(),
            normal: normal.into(),
            hover: hover.into(),
            scale: 1.0,
            sound: None,
            payload: payload.into(),
        }
    }

    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}
