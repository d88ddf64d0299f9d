use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::color::Color;

/// Bounded progress bar. The renderer draws an optional drop shadow, the
/// empty track, a scissor-clipped fill proportional to
/// `(current - min) / (max - min)`, and an optional border outline.
#[derive(Component, Clone, Debug)]
pub struct ProgressBar {
    pub size: Vec2,
    pub min: f32,
    pub max: f32,
    pub current: f32,
    pub fill: Color,
    pub track: Color,
    pub border: Option<Color>,
    pub shadow: Option<Vec2>,
}

impl ProgressBar {
    pub fn new(size: Vec2, min: f32, max: f32, fill: Color, track: Color) -> Self {
        ProgressBar {
            size,
            min,
            max,
            current: min,
            fill,
            track,
            border: None,
            shadow: None,
        }
    }

    pub fn with_border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    pub fn with_shadow(mut self, offset: Vec2) -> Self {
        self.shadow = Some(offset);
        self
    }

    /// Fill ratio clamped to `[0, 1]`. A degenerate `max <= min` range
    /// renders as empty.
    pub fn ratio(&self) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.current - self.min) / span).clamp(0.0, 1.0)
    }
}
