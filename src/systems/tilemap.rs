//! Tiled-map manager.
//!
//! On first sight of a [`TiledMap`] component the manager materializes one
//! tile-sprite entity per placement in the map definition, each carrying the
//! layer's explicit render depth. On later frames it compares the stored
//! against the current anchor and scale and shifts or rescales the existing
//! tile entities instead of rebuilding them. The position diff is applied
//! with the same sign on both axes.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::anchor::Anchor;
use crate::components::layer::Layer;
use crate::components::sprite::SpriteRef;
use crate::components::tilemap::{TiledMap, TiledMapState};
use crate::error::{AssetKind, CoreError, CoreResult};
use crate::storage::StorageBox;

struct MapWork {
    entity: Entity,
    map: String,
    pos: Vec2,
    scale: f32,
    state: Option<TiledMapState>,
}

/// Materialize new tiled maps and reposition already-materialized ones.
pub fn update_tilemaps(world: &mut World) -> CoreResult<()> {
    let mut work: Vec<MapWork> = Vec::new();
    {
        let mut query = world.query::<(Entity, &Anchor, &TiledMap, Option<&TiledMapState>)>();
        for (entity, anchor, map, state) in query.iter(world) {
            work.push(MapWork {
                entity,
                map: map.map.clone(),
                pos: anchor.pos,
                scale: map.scale,
                state: state.cloned(),
            });
        }
    }

    for mut item in work {
        match item.state.take() {
            None => materialize(world, item)?,
            Some(state) => reposition(world, item, state),
        }
    }

    Ok(())
}

fn materialize(world: &mut World, item: MapWork) -> CoreResult<()> {
    let def = {
        let storage = world.non_send_resource::<StorageBox>();
        storage
            .tilemap(&item.map)
            .cloned()
            .ok_or_else(|| CoreError::asset(AssetKind::Tilemap, &item.map))?
    };

    let step = def.tile_size * item.scale;
    let mut tiles: Vec<Entity> = Vec::new();
    for layer in &def.layers {
        for placement in &layer.tiles {
            let pos = item.pos + Vec2::new(placement.x as f32, placement.y as f32) * step;
            let tile = world
                .spawn((
                    Anchor { pos },
                    SpriteRef::new(&def.sheet, &placement.frame).with_scale(item.scale),
                    Layer(layer.depth),
                ))
                .id();
            tiles.push(tile);
        }
    }
    debug!("materialized map {:?}: {} tiles", item.map, tiles.len());

    world.entity_mut(item.entity).insert(TiledMapState {
        pos: item.pos,
        scale: item.scale,
        tiles,
    });
    Ok(())
}

fn reposition(world: &mut World, item: MapWork, state: TiledMapState) {
    let moved = item.pos != state.pos;
    let rescaled = item.scale != state.scale;
    if !moved && !rescaled {
        return;
    }

    let diff = item.pos - state.pos;
    let scale_ratio = if state.scale != 0.0 {
        item.scale / state.scale
    } else {
        1.0
    };

    for &tile in &state.tiles {
        let Ok(mut entry) = world.get_entity_mut(tile) else {
            continue;
        };
        if let Some(mut anchor) = entry.get_mut::<Anchor>() {
            // Keep each tile's offset from the map anchor proportional to
            // the scale change, then apply the move on both axes alike.
            let offset = anchor.pos - state.pos;
            anchor.pos = state.pos + offset * scale_ratio + diff;
        }
        if rescaled {
            if let Some(mut sprite) = entry.get_mut::<SpriteRef>() {
                sprite.scale = item.scale;
            }
        }
    }

    let tiles = state.tiles;
    world.entity_mut(item.entity).insert(TiledMapState {
        pos: item.pos,
        scale: item.scale,
        tiles,
    });
}
