//! Flat/gradient button widgets.
//!
//! A [`FlatButton`] carries its static base fill and an opaque payload string
//! broadcast verbatim on activation. The UI manager derives a
//! [`HoverColors`] cache on first sight (never eagerly, so base colors may be
//! assembled over several frames) and keeps an [`ActiveFill`] up to date from
//! pointer-move hit tests.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::color::Color;

/// Solid or vertical-gradient paint. The two variants are mutually
/// exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    Solid(Color),
    Gradient(Color, Color),
}

impl Fill {
    /// Blend every color of the fill `t` of the way toward `target`.
    pub fn blended(&self, target: Color, t: f32) -> Fill {
        match self {
            Fill::Solid(c) => Fill::Solid(c.blend(target, t)),
            Fill::Gradient(top, bottom) => {
                Fill::Gradient(top.blend(target, t), bottom.blend(target, t))
            }
        }
    }

    /// Representative color of the fill, used to derive the label color.
    pub fn primary(&self) -> Color {
        match self {
            Fill::Solid(c) => *c,
            Fill::Gradient(top, _) => *top,
        }
    }
}

/// Flat button widget with a box geometry hit area.
#[derive(Component, Clone, Debug)]
pub struct FlatButton {
    pub label: String,
    pub font: String,
    pub font_size: f32,
    /// Unscaled box size; the hit rectangle is `size * scale` at the anchor.
    pub size: Vec2,
    pub scale: f32,
    /// Static base fill the hover-color set is derived from.
    pub fill: Fill,
    /// Drop-shadow offset, drawn behind the body when present.
    pub shadow: Option<Vec2>,
    /// Opaque payload broadcast verbatim on activation.
    pub payload: String,
}

impl FlatButton {
    pub fn new(label: impl Into<String>, size: Vec2, fill: Fill, payload: impl Into<String>) -> Self {
        FlatButton {
            label: label.into(),
            font: "default".into(),
            font_size: 16.0,
            size,
            scale: 1.0,
            fill,
            shadow: None,
            payload: payload.into(),
        }
    }

    pub fn with_font(mut self, font: impl Into<String>, font_size: f32) -> Self {
        self.font = font.into();
        self.font_size = font_size;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_shadow(mut self, offset: Vec2) -> Self {
        self.shadow = Some(offset);
        self
    }
}

/// Derived hover-color set, cached on the entity on first observation.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct HoverColors {
    pub normal: Fill,
    pub hover: Fill,
}

/// Fraction the base fill is blended toward black for the normal state.
const NORMAL_DIM: f32 = 0.25;

impl HoverColors {
    /// Derive the cache from a widget's static base fill: `normal` is the
    /// base blended a quarter of the way toward black, `hover` is the base
    /// unmodified.
    pub fn derive(base: &Fill) -> Self {
        HoverColors {
            normal: base.blended(Color::BLACK, NORMAL_DIM),
            hover: base.clone(),
        }
    }
}

/// The fill the renderer paints the button body with this frame.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct ActiveFill(pub Fill);
