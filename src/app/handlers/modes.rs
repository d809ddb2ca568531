//! Der Modus-Arbitrator: Zustandsmaschine über dem exklusiven Editier-Modus.
//!
//! Konsumiert Pointer-Down/Move/Up und Tastatur-Commands in fester
//! Präzedenz-Reihenfolge und ruft pro Geste höchstens einen Domänen-Handler
//! auf. Vorbedingung: höchstens ein Modus ist aktiv — das stellt das
//! Intent-Mapping am Aufrufort sicher und wird hier nicht erneut geprüft.
//!
//! Gate-Invariante: Jeder Eintritt in einen Nicht-Idle-Modus pausiert das
//! Pan-Gate genau einmal (`enter_mode`), jeder Austritt — Abschluss wie
//! Abbruch — setzt es genau einmal fort (`exit_mode`).

use glam::Vec2;

use crate::app::handlers::{editing, selection};
use crate::app::state::{DrawKind, ExclusiveMode, PathInput, SnapTarget};
use crate::app::AppState;
use crate::core::{HitTestRegistry, LineProperties, SeedKind};

/// Betritt einen exklusiven Modus aus Idle heraus und pausiert das Pan-Gate.
fn enter_mode(state: &mut AppState, mode: ExclusiveMode) {
    debug_assert!(
        state.editor.mode.is_idle(),
        "Modus-Eintritt setzt Idle voraus"
    );
    log::info!("Modus betreten: {}", mode.label());
    state.view.pan_gate.pause();
    state.editor.mode = mode;
}

/// Verlässt den aktiven Modus nach Abschluss/Abbruch und setzt das Gate fort.
///
/// Erwartet, dass der Aufrufer den Modus bereits aus dem State genommen hat.
fn exit_mode(state: &mut AppState, label: &str) {
    log::info!("Modus verlassen: {label}");
    state.editor.mode = ExclusiveMode::Idle;
    state.view.pan_gate.resume();
}

/// Fügt einen Freihand-Punkt an, wenn der Mindestabstand erreicht ist.
fn push_freehand_point(vertices: &mut Vec<Vec2>, world_pos: Vec2, min_spacing: f32) {
    let should_push = vertices
        .last()
        .is_none_or(|last| last.distance_squared(world_pos) >= min_spacing * min_spacing);
    if should_push {
        vertices.push(world_pos);
    }
}

// ── Werkzeug-Eintritt (nur aus Idle, siehe intent_mapping) ──────────

/// Betritt den Platzierungsmodus für einen Seed.
pub fn enter_placing(state: &mut AppState, kind: SeedKind) {
    let preview = state.view.cursor_world.unwrap_or(Vec2::ZERO);
    enter_mode(
        state,
        ExclusiveMode::Placing {
            kind,
            preview,
            drag_origin: None,
            drag_size: None,
        },
    );
}

/// Betritt den Zeichenmodus für Polygone/Linien.
pub fn enter_drawing(state: &mut AppState, kind: DrawKind) {
    let input = state.editor.path_input;
    enter_mode(
        state,
        ExclusiveMode::DrawingPath {
            kind,
            vertices: Vec::new(),
            input,
            freehand_active: false,
            preview: None,
        },
    );
}

/// Betritt den Transit-Linien-Modus.
pub fn enter_transit(state: &mut AppState) {
    let properties = state.editor.line_properties.clone();
    enter_mode(
        state,
        ExclusiveMode::DrawingTransitLine {
            first_station: None,
            stations: Vec::new(),
            properties,
            hovered_station: None,
            preview: None,
        },
    );
}

// ── Pointer-Down ────────────────────────────────────────────────────

/// Pointer-Down-Präzedenz (erster Treffer gewinnt):
/// 1. Zeichenmodus mit Freihand-Eingabe (oder gehaltenem Override) → Strich beginnen
/// 2. Idle + Endpunkt unter dem Cursor → Endpunkt-Drag betreten
/// 3. Platzierung eines dimensionierbaren Seeds → Sizing-Ursprung merken
/// 4. Default: nichts — Drag-Session und Kamera-Pan verwaltet die Input-Schicht
pub fn pointer_pressed(state: &mut AppState, world_pos: Vec2) {
    let mode = std::mem::take(&mut state.editor.mode);
    match mode {
        ExclusiveMode::DrawingPath {
            kind,
            mut vertices,
            input,
            freehand_active,
            preview,
        } => {
            let freehand = state.editor.freehand_override || input == PathInput::Freehand;
            if freehand {
                // Strich beginnt mit dem Druckpunkt; Gummiband-Vorschau ruht
                push_freehand_point(&mut vertices, world_pos, state.options.freehand_min_spacing);
                state.editor.mode = ExclusiveMode::DrawingPath {
                    kind,
                    vertices,
                    input,
                    freehand_active: true,
                    preview: None,
                };
            } else {
                state.editor.mode = ExclusiveMode::DrawingPath {
                    kind,
                    vertices,
                    input,
                    freehand_active,
                    preview,
                };
            }
        }

        ExclusiveMode::Idle => {
            // Endpunkt-Drag ist nur aus Idle heraus verfügbar
            let hit = state.city_map.as_deref().and_then(|map| {
                HitTestRegistry::new(state.pick_radius_world()).hit_test_endpoint(map, world_pos)
            });
            if let Some((road_id, end)) = hit {
                let position = state
                    .city_map
                    .as_deref()
                    .and_then(|map| map.roads.get(&road_id))
                    .and_then(|road| road.endpoint(end))
                    .unwrap_or(world_pos);
                enter_mode(
                    state,
                    ExclusiveMode::DraggingEndpoint {
                        road_id,
                        end,
                        position,
                        snapped: false,
                        snap_target: None,
                    },
                );
            }
        }

        ExclusiveMode::Placing {
            kind,
            preview,
            drag_origin: _,
            drag_size: _,
        } if kind.supports_drag_size() => {
            state.editor.mode = ExclusiveMode::Placing {
                kind,
                preview,
                drag_origin: Some(world_pos),
                drag_size: Some(0.0),
            };
        }

        other => state.editor.mode = other,
    }
}

// ── Pointer-Move ────────────────────────────────────────────────────

/// Aktualisiert den aktiven Modus pro Frame (Snap, Sizing, Vorschau, Hover).
pub fn pointer_moved(state: &mut AppState, world_pos: Vec2) {
    state.view.cursor_world = Some(world_pos);
    state.view.hovered_endpoint = None;

    let mode = std::mem::take(&mut state.editor.mode);
    match mode {
        ExclusiveMode::DraggingEndpoint {
            road_id,
            end,
            position: _,
            snapped: _,
            snap_target: _,
        } => {
            // Snap-Ergebnis ist beratend — der Endpunkt-Drag wendet es immer an
            let snap = state.city_map.as_deref().and_then(|map| {
                map.find_snap_point(world_pos, state.options.snap_threshold_world)
            });
            let (position, snapped, snap_target) = match snap {
                Some(hit) => (
                    hit.point,
                    true,
                    Some(SnapTarget {
                        geometry_id: hit.geometry_id,
                        geometry: hit.geometry,
                    }),
                ),
                None => (world_pos, false, None),
            };
            state.editor.mode = ExclusiveMode::DraggingEndpoint {
                road_id,
                end,
                position,
                snapped,
                snap_target,
            };
        }

        ExclusiveMode::Placing {
            kind,
            preview,
            drag_origin: Some(origin),
            drag_size: _,
        } => {
            // Sizing läuft: Radius = rohe Drag-Distanz, nach oben gekappt.
            // Normale Vorschau-Positions-Updates sind währenddessen unterdrückt.
            let size = origin.distance(world_pos).min(state.options.seed_size_max);
            state.editor.mode = ExclusiveMode::Placing {
                kind,
                preview,
                drag_origin: Some(origin),
                drag_size: Some(size),
            };
        }

        ExclusiveMode::Placing { kind, .. } => {
            state.editor.mode = ExclusiveMode::Placing {
                kind,
                preview: world_pos,
                drag_origin: None,
                drag_size: None,
            };
        }

        ExclusiveMode::DrawingPath {
            kind,
            mut vertices,
            input,
            freehand_active: true,
            preview: _,
        } => {
            // Freihand sammelt Punkte; Klick-Modus aktualisiert nur die Vorschau
            push_freehand_point(&mut vertices, world_pos, state.options.freehand_min_spacing);
            state.editor.mode = ExclusiveMode::DrawingPath {
                kind,
                vertices,
                input,
                freehand_active: true,
                preview: None,
            };
        }

        ExclusiveMode::DrawingPath {
            kind,
            vertices,
            input,
            freehand_active,
            preview: _,
        } => {
            state.editor.mode = ExclusiveMode::DrawingPath {
                kind,
                vertices,
                input,
                freehand_active,
                preview: Some(world_pos),
            };
        }

        ExclusiveMode::DrawingTransitLine {
            first_station,
            stations,
            properties,
            hovered_station: _,
            preview: _,
        } => {
            let hovered = state
                .city_map
                .as_deref()
                .and_then(|map| {
                    map.nearest_station_within(
                        world_pos,
                        state.options.station_hover_radius_world,
                    )
                })
                .map(|m| m.station_id);
            state.editor.mode = ExclusiveMode::DrawingTransitLine {
                first_station,
                stations,
                properties,
                hovered_station: hovered,
                preview: Some(world_pos),
            };
        }

        ExclusiveMode::Idle => {
            // Hover-Hervorhebung für Endpunkte (nur informativ)
            state.view.hovered_endpoint = state.city_map.as_deref().and_then(|map| {
                HitTestRegistry::new(state.pick_radius_world()).hit_test_endpoint(map, world_pos)
            });
        }
    }
}

// ── Pointer-Up ──────────────────────────────────────────────────────

/// Pointer-Up-Präzedenz (erster Treffer gewinnt):
/// 1. Freihand-Strich beenden (Vertices committen)
/// 2. Endpunkt-Drag auflösen (gesnappt oder frei)
/// 3. Sizing-Drag auflösen (bestätigen oder stiller Abbruch)
/// 4. Drag-Flag gesetzt, kein Modus hat die Geste beansprucht → Klick-Semantik unterdrücken
/// 5. Klick-Modus Polygon: schließen oder Vertex anhängen
/// 6. Transit: nur Stationen treffen, Kette fortschreiben
/// 7. Platzierung ohne Sizing bestätigen
/// 8. Fallback: Z-geordneter Hit-Test → selektieren oder Selektion aufheben
pub fn pointer_released(state: &mut AppState, world_pos: Vec2, was_drag: bool) {
    let mode = std::mem::take(&mut state.editor.mode);
    match mode {
        ExclusiveMode::DrawingPath {
            kind,
            vertices,
            input,
            freehand_active: true,
            preview,
        } => {
            if vertices.len() >= kind.min_vertices() {
                editing::complete_drawing(state, kind, vertices);
                exit_mode(state, kind.label());
            } else {
                // Vorbedingung nicht erfüllt: Strich behalten, Modus bleibt aktiv
                state.editor.mode = ExclusiveMode::DrawingPath {
                    kind,
                    vertices,
                    input,
                    freehand_active: false,
                    preview,
                };
            }
        }

        ExclusiveMode::DraggingEndpoint {
            road_id,
            end,
            position,
            snapped,
            snap_target: _,
        } => {
            // Genau ein Domänen-Callback mit der finalen Position
            editing::update_road_endpoint(state, road_id, end, position);
            if snapped {
                log::debug!("Endpunkt von Straße {road_id} gesnappt abgelegt");
            }
            exit_mode(state, "Endpunkt ziehen");
        }

        ExclusiveMode::Placing {
            kind,
            preview,
            drag_origin: Some(origin),
            drag_size,
        } => {
            let size = drag_size.unwrap_or(0.0);
            if size >= state.options.seed_size_min {
                editing::confirm_placement(state, kind, origin, Some(size));
            } else {
                // Zu klein zum Platzieren: stiller Abbruch des Versuchs
                log::debug!("Sizing-Drag unter Minimum ({size:.1}) verworfen");
            }
            // Werkzeug bleibt aktiv für die nächste Platzierung
            state.editor.mode = ExclusiveMode::Placing {
                kind,
                preview,
                drag_origin: None,
                drag_size: None,
            };
        }

        other if was_drag => {
            // Geste war ein Drag (Disambiguator-Flag) und kein Modus hat sie
            // oben beansprucht: keine Platzierung, keine Selektion.
            state.editor.mode = other;
        }

        ExclusiveMode::DrawingPath {
            kind,
            mut vertices,
            input,
            freehand_active: _,
            preview,
        } => {
            let closes = kind.closes_by_click()
                && vertices.len() >= kind.min_vertices()
                && vertices
                    .first()
                    .is_some_and(|first| {
                        first.distance(world_pos) <= state.options.polygon_close_radius_world
                    });
            if closes {
                // Der schließende Klick wird NICHT als Vertex angehängt
                editing::complete_drawing(state, kind, vertices);
                exit_mode(state, kind.label());
            } else {
                vertices.push(world_pos);
                state.editor.mode = ExclusiveMode::DrawingPath {
                    kind,
                    vertices,
                    input,
                    freehand_active: false,
                    preview,
                };
            }
        }

        ExclusiveMode::DrawingTransitLine {
            first_station,
            mut stations,
            properties,
            hovered_station,
            preview,
        } => {
            // Nur Stationen treffen, alle anderen Feature-Typen ignorieren
            let hit = state.city_map.as_deref().and_then(|map| {
                HitTestRegistry::new(state.pick_radius_world()).hit_test_station(map, world_pos)
            });
            let first_station = match hit {
                Some(station_id) if first_station != Some(station_id) => {
                    // Kette fortschreiben: neue Verbindung, Kopf wandert weiter
                    stations.push(station_id);
                    Some(station_id)
                }
                // Leerer Raum oder erneuter Klick auf den Ketten-Kopf: No-op
                _ => first_station,
            };
            state.editor.mode = ExclusiveMode::DrawingTransitLine {
                first_station,
                stations,
                properties,
                hovered_station,
                preview,
            };
        }

        ExclusiveMode::Placing { kind, preview, .. } => {
            editing::confirm_placement(state, kind, world_pos, None);
            state.editor.mode = ExclusiveMode::Placing {
                kind,
                preview,
                drag_origin: None,
                drag_size: None,
            };
        }

        ExclusiveMode::Idle => {
            selection::pick_feature(state, world_pos);
        }
    }
}

// ── Tastatur ────────────────────────────────────────────────────────

/// Escape: bricht den aktiven Modus ab und verwirft alle Gesten-Daten.
///
/// Das Gate wird bedingungslos fortgesetzt — der eine globale Invariant,
/// den jeder Abbruchpfad einhalten muss.
pub fn cancel_active(state: &mut AppState) {
    if !state.editor.mode.is_idle() {
        log::info!("Modus abgebrochen: {}", state.editor.mode.label());
        state.editor.mode = ExclusiveMode::Idle;
    }
    state.view.pan_gate.resume();
}

/// Enter: schließt den aktiven Modus ab, wenn seine Vorbedingung erfüllt ist.
/// Unerfüllte Vorbedingungen sind stille No-ops.
pub fn complete_active(state: &mut AppState) {
    let mode = std::mem::take(&mut state.editor.mode);
    match mode {
        ExclusiveMode::DrawingPath {
            kind,
            vertices,
            input,
            freehand_active,
            preview,
        } => {
            if vertices.len() >= kind.min_vertices() {
                editing::complete_drawing(state, kind, vertices);
                exit_mode(state, kind.label());
            } else {
                state.editor.mode = ExclusiveMode::DrawingPath {
                    kind,
                    vertices,
                    input,
                    freehand_active,
                    preview,
                };
            }
        }

        ExclusiveMode::DrawingTransitLine {
            first_station,
            stations,
            properties,
            hovered_station,
            preview,
        } => {
            // Mindestens eine Verbindung, d.h. ≥2 verkettete Stationen
            if stations.len() >= 2 {
                editing::commit_transit_line(state, stations, properties);
                exit_mode(state, "Transit-Linie");
            } else {
                state.editor.mode = ExclusiveMode::DrawingTransitLine {
                    first_station,
                    stations,
                    properties,
                    hovered_station,
                    preview,
                };
            }
        }

        other => state.editor.mode = other,
    }
}

/// Setzt den gehaltenen Freihand-Override (ändert die persistierte
/// Eingabeart nicht).
pub fn set_freehand_override(state: &mut AppState, active: bool) {
    state.editor.freehand_override = active;
}

/// Setzt die persistierte Pfad-Eingabeart (und die des aktiven Zeichenmodus).
pub fn set_path_input(state: &mut AppState, input: PathInput) {
    state.editor.path_input = input;
    if let ExclusiveMode::DrawingPath {
        input: mode_input, ..
    } = &mut state.editor.mode
    {
        *mode_input = input;
    }
}

/// Setzt die Default-Linien-Eigenschaften (und die des aktiven Transit-Modus).
pub fn set_line_properties(state: &mut AppState, properties: LineProperties) {
    if let ExclusiveMode::DrawingTransitLine {
        properties: mode_properties,
        ..
    } = &mut state.editor.mode
    {
        *mode_properties = properties.clone();
    }
    state.editor.line_properties = properties;
}
