//! Render composition.
//!
//! Collects every renderable entity, orders it by effective depth descending
//! (higher depth paints first, entities without a [`Layer`] sit below every
//! explicit layer) with ties broken by creation order, then walks the
//! sorted list dispatching one draw call chain per entity through the
//! device. All pixel output is the device's problem; this system only owns
//! the ordering and the compositing decision tree.

use bevy_ecs::prelude::*;
use bevy_ecs::query::AnyOf;

use crate::collision::Rect;
use crate::color::Color;
use crate::components::anchor::Anchor;
use crate::components::button::{ActiveFill, FlatButton};
use crate::components::layer::{effective_depth, Layer};
use crate::components::progressbar::ProgressBar;
use crate::components::shapes::{BoxFill, BoxOutline, Line};
use crate::components::sprite::SpriteRef;
use crate::components::text::Text;
use crate::components::tint::Tint;
use crate::device::{DeviceBox, SpriteDraw};
use crate::error::{AssetKind, CoreError, CoreResult};
use crate::storage::StorageBox;

/// Paint used for flat button and progress bar drop shadows.
const SHADOW_COLOR: Color = Color::new(0, 0, 0, 160);

/// Compose and dispatch one frame's draw calls.
pub fn render_frame(
    query: Query<(
        Entity,
        &Anchor,
        Option<&Layer>,
        Option<&Tint>,
        Option<&ActiveFill>,
        AnyOf<(
            &SpriteRef,
            &FlatButton,
            &ProgressBar,
            &BoxFill,
            &BoxOutline,
            &Line,
            &Text,
        )>,
    )>,
    mut device: NonSendMut<DeviceBox>,
    storage: NonSend<StorageBox>,
) -> CoreResult<()> {
    let mut items: Vec<_> = query.iter().collect();
    items.sort_by(|a, b| {
        // Entity's own Ord is niche-inverted; the row index follows spawn
        // order, so equal depths paint oldest first.
        effective_depth(b.2)
            .cmp(&effective_depth(a.2))
            .then(a.0.index_u32().cmp(&b.0.index_u32()))
    });

    for (_, anchor, _, tint, active, renderable) in items {
        let (sprite, flat, bar, box_fill, box_outline, line, text) = renderable;
        if let Some(sprite) = sprite {
            draw_sprite(&mut device, &storage, anchor, sprite, tint)?;
        } else if let Some(button) = flat {
            draw_flat_button(&mut device, &storage, anchor, button, active)?;
        } else if let Some(bar) = bar {
            draw_progress_bar(&mut device, anchor, bar);
        } else if let Some(fill) = box_fill {
            device.draw_rect(Rect::from_origin_size(anchor.pos, fill.size), fill.color);
        } else if let Some(outline) = box_outline {
            device.draw_rect_outline(
                Rect::from_origin_size(anchor.pos, outline.size),
                outline.color,
            );
        } else if let Some(line) = line {
            device.draw_line(anchor.pos, line.to, line.color);
        } else if let Some(text) = text {
            if storage.font(&text.font).is_none() {
                return Err(CoreError::asset(AssetKind::Font, &text.font));
            }
            device.draw_text(&text.content, &text.font, anchor.pos, text.size, text.color);
        }
    }

    Ok(())
}

fn draw_sprite(
    device: &mut DeviceBox,
    storage: &StorageBox,
    anchor: &Anchor,
    sprite: &SpriteRef,
    tint: Option<&Tint>,
) -> CoreResult<()> {
    let def = storage.sprite(&sprite.sheet, &sprite.frame).ok_or_else(|| {
        CoreError::asset(
            AssetKind::Sprite,
            format!("{}/{}", sprite.sheet, sprite.frame),
        )
    })?;
    device.draw_sprite(&SpriteDraw {
        sheet: sprite.sheet.clone(),
        frame: sprite.frame.clone(),
        src: def.src(),
        pos: anchor.pos,
        pivot: def.pivot(),
        scale: sprite.scale,
        rotation: sprite.rotation,
        flip_h: sprite.flip_h,
        flip_v: sprite.flip_v,
        tint: tint.map(|t| t.color).unwrap_or(Color::WHITE),
    });
    Ok(())
}

fn draw_flat_button(
    device: &mut DeviceBox,
    storage: &StorageBox,
    anchor: &Anchor,
    button: &FlatButton,
    active: Option<&ActiveFill>,
) -> CoreResult<()> {
    let size = button.size * button.scale;
    let body = Rect::from_origin_size(anchor.pos, size);

    if let Some(offset) = button.shadow {
        device.draw_rect(Rect::from_origin_size(anchor.pos + offset, size), SHADOW_COLOR);
    }

    // Before the UI manager has derived the hover cache, the base fill paints.
    let fill = active.map(|a| &a.0).unwrap_or(&button.fill);
    match fill {
        crate::components::button::Fill::Solid(color) => device.draw_rect(body, *color),
        crate::components::button::Fill::Gradient(top, bottom) => {
            device.draw_rect_gradient(body, *top, *bottom)
        }
    }

    if storage.font(&button.font).is_none() {
        return Err(CoreError::asset(AssetKind::Font, &button.font));
    }
    let text_size = device.measure_text(&button.label, &button.font, button.font_size);
    let text_pos = anchor.pos + (size - text_size) * 0.5;
    device.draw_text(
        &button.label,
        &button.font,
        text_pos,
        button.font_size,
        fill.primary().inverted(),
    );

    Ok(())
}

fn draw_progress_bar(device: &mut DeviceBox, anchor: &Anchor, bar: &ProgressBar) {
    let body = Rect::from_origin_size(anchor.pos, bar.size);

    if let Some(offset) = bar.shadow {
        device.draw_rect(Rect::from_origin_size(anchor.pos + offset, bar.size), SHADOW_COLOR);
    }
    device.draw_rect(body, bar.track);

    let ratio = bar.ratio();
    if ratio >= 1.0 {
        // Full fill skips the scissor entirely.
        device.draw_rect(body, bar.fill);
    } else if ratio > 0.0 {
        device.begin_scissor(Rect::new(body.x, body.y, body.width * ratio, body.height));
        device.draw_rect(body, bar.fill);
        device.end_scissor();
    }

    if let Some(border) = bar.border {
        device.draw_rect_outline(body, border);
    }
}
