use bevy_ecs::prelude::Component;

use crate::color::Color;

#[derive(Component, Clone, Debug)]
/// Plain text renderable drawn at the entity's anchor.
pub struct Text {
    pub content: String,
    /// Font name resolved through storage at draw time.
    pub font: String,
    pub size: f32,
    pub color: Color,
}

impl Text {
    pub fn new(content: impl Into<String>, font: impl Into<String>, size: f32, color: Color) -> Self {
        Text {
            content: content.into(),
            font: font.into(),
            size,
            color,
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}
