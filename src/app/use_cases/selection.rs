//! Use-Case-Funktionen für die Feature-Selektion.

use glam::Vec2;

use crate::app::AppState;
use crate::core::HitTestRegistry;

/// Selektiert das oberste Feature unter dem Weltpunkt oder hebt die
/// Selektion auf (Klick in leeren Raum).
pub fn pick_feature(state: &mut AppState, world_pos: Vec2) {
    let hit = state.city_map.as_deref().and_then(|map| {
        HitTestRegistry::new(state.pick_radius_world()).hit_test(map, world_pos)
    });

    match hit {
        Some(feature) => {
            log::debug!("Feature selektiert: {feature:?}");
            state.selection.select(feature);
        }
        None => state.selection.clear(),
    }
}

/// Hebt die aktuelle Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}
