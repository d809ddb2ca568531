//! Use-Case-Funktionen für Domänen-Mutationen auf der CityMap.
//!
//! Mutationen laufen über `Arc::make_mut` (Copy-on-Write gegen die
//! Undo-Snapshots). Ein fehlendes Dokument überspringt die Operation.

use std::sync::Arc;

use glam::Vec2;

use crate::app::state::DrawKind;
use crate::app::AppState;
use crate::core::{DistrictKind, FeatureRef, LineProperties, RoadClass, RoadEnd, SeedKind};

/// Committet einen abgeschlossenen Pfad als Distrikt, Straße oder Split-Linie.
pub fn complete_drawing(state: &mut AppState, kind: DrawKind, vertices: Vec<Vec2>) {
    let Some(map) = state.city_map.as_mut() else {
        return;
    };
    let map = Arc::make_mut(map);
    let count = vertices.len();

    let id = match kind {
        DrawKind::Neighborhood => map.add_district(DistrictKind::Neighborhood, vertices),
        DrawKind::CityLimits => map.add_district(DistrictKind::CityLimits, vertices),
        DrawKind::Split => map.add_split_line(vertices),
        DrawKind::Road => map.add_road(RoadClass::Street, vertices),
        DrawKind::Highway => map.add_road(RoadClass::Highway, vertices),
    };

    log::info!(
        "{} #{id} mit {count} Punkten erstellt",
        kind.label()
    );
}

/// Bestätigt eine Seed-Platzierung.
///
/// Stations-Seeds erzeugen eine Station; alle anderen ein Seed-Objekt mit
/// der übergebenen Größe (`None` → Standardgröße), geklemmt auf die
/// konfigurierten Grenzen.
pub fn confirm_placement(state: &mut AppState, kind: SeedKind, position: Vec2, size: Option<f32>) {
    let size = size
        .unwrap_or(state.options.seed_size_default)
        .clamp(state.options.seed_size_min, state.options.seed_size_max);

    let Some(map) = state.city_map.as_mut() else {
        return;
    };
    let map = Arc::make_mut(map);

    if let Some(station_kind) = kind.station_kind() {
        let id = map.add_station(station_kind, position);
        log::info!("Station #{id} ({}) platziert", kind.label());
    } else {
        let id = map.add_seed(kind, position, size);
        log::info!("Seed #{id} ({}, Radius {size:.0}) platziert", kind.label());
    }
}

/// Schreibt die finale Position eines Straßen-Endpunkts.
pub fn update_road_endpoint(state: &mut AppState, road_id: u64, end: RoadEnd, position: Vec2) {
    let Some(map) = state.city_map.as_mut() else {
        return;
    };
    if !Arc::make_mut(map).set_road_endpoint(road_id, end, position) {
        // Straße zwischenzeitlich entfernt: Drag läuft ins Leere, kein Fehler
        log::debug!("Endpunkt-Update für unbekannte Straße {road_id} ignoriert");
    }
}

/// Committet eine Transit-Linie über die verketteten Stationen.
pub fn commit_transit_line(state: &mut AppState, stations: Vec<u64>, properties: LineProperties) {
    if stations.len() < 2 {
        return;
    }
    let Some(map) = state.city_map.as_mut() else {
        return;
    };
    let map = Arc::make_mut(map);
    let count = stations.len();
    let id = map.add_transit_line(stations, properties);
    log::info!("Transit-Linie #{id} mit {count} Stationen erstellt");
}

/// Löscht das selektierte Feature und hebt die Selektion auf.
pub fn delete_selected_feature(state: &mut AppState) {
    let Some(feature) = state.selection.selected else {
        return;
    };
    let Some(map) = state.city_map.as_mut() else {
        return;
    };
    let map = Arc::make_mut(map);

    let removed = match feature {
        FeatureRef::Station(id) => map.remove_station(id),
        FeatureRef::RoadEndpoint { road_id, .. } | FeatureRef::Road(road_id) => {
            map.remove_road(road_id)
        }
        FeatureRef::Seed(id) => map.remove_seed(id),
        FeatureRef::District(id) => map.remove_district(id),
    };

    if removed {
        log::info!("Feature gelöscht: {feature:?}");
    }
    state.selection.clear();
}
