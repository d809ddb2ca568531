//! Properties-Panel: Kontext-Informationen zum aktiven Modus bzw. zur
//! Selektion.

use crate::app::state::ExclusiveMode;
use crate::app::{AppIntent, AppState};
use crate::core::{FeatureRef, TransitKind};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            match &state.editor.mode {
                ExclusiveMode::DrawingTransitLine {
                    stations,
                    properties,
                    ..
                } => {
                    ui.label("Transit-Linie");
                    ui.separator();

                    let mut edited = properties.clone();
                    let mut changed = false;

                    ui.horizontal(|ui| {
                        ui.label("Name:");
                        changed |= ui.text_edit_singleline(&mut edited.name).changed();
                    });

                    ui.horizontal(|ui| {
                        ui.label("Art:");
                        for (kind, label) in
                            [(TransitKind::Rail, "Bahn"), (TransitKind::Subway, "U-Bahn")]
                        {
                            if ui
                                .selectable_label(edited.kind == kind, label)
                                .clicked()
                            {
                                edited.kind = kind;
                                changed = true;
                            }
                        }
                    });

                    let mut rgba = [
                        edited.color[0],
                        edited.color[1],
                        edited.color[2],
                        edited.color[3],
                    ];
                    ui.horizontal(|ui| {
                        ui.label("Farbe:");
                        if ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed() {
                            edited.color = rgba;
                            changed = true;
                        }
                    });

                    if changed {
                        events.push(AppIntent::LinePropertiesChanged { properties: edited });
                    }

                    ui.separator();
                    ui.label(format!("Verkettete Stationen: {}", stations.len()));
                    ui.label("Enter: Linie abschließen (≥2 Stationen)");
                    ui.label("Escape: abbrechen");
                }

                ExclusiveMode::DrawingPath { kind, vertices, .. } => {
                    ui.label(format!("Zeichnen: {}", kind.label()));
                    ui.separator();
                    ui.label(format!("Punkte: {}", vertices.len()));
                    if kind.closes_by_click() {
                        ui.label("Klick nahe dem ersten Punkt schließt die Fläche");
                    } else {
                        ui.label("Enter schließt die Linie ab");
                    }
                    ui.label("Shift halten: Freihand");
                    ui.label("Escape: abbrechen");
                }

                ExclusiveMode::Placing { kind, .. } => {
                    ui.label(format!("Platzieren: {}", kind.label()));
                    ui.separator();
                    if kind.supports_drag_size() {
                        ui.label("Ziehen bestimmt die Größe");
                    } else {
                        ui.label("Klick platziert");
                    }
                    ui.label("Escape: Werkzeug verlassen");
                }

                ExclusiveMode::DraggingEndpoint { snapped, .. } => {
                    ui.label("Endpunkt ziehen");
                    ui.separator();
                    ui.label(if *snapped {
                        "Gesnappt auf Geometrie"
                    } else {
                        "Frei"
                    });
                }

                ExclusiveMode::Idle => match state.selection.selected {
                    Some(feature) => {
                        ui.label(selected_label(feature));
                        ui.separator();
                        if ui.button("Löschen (Entf)").clicked() {
                            events.push(AppIntent::DeleteSelectedRequested);
                        }
                    }
                    None => {
                        ui.label("Nichts selektiert");
                    }
                },
            }
        });

    events
}

/// Anzeige-Text für ein selektiertes Feature.
fn selected_label(feature: FeatureRef) -> String {
    match feature {
        FeatureRef::Station(id) => format!("Station #{id}"),
        FeatureRef::RoadEndpoint { road_id, .. } => format!("Straßen-Endpunkt (Straße #{road_id})"),
        FeatureRef::Road(id) => format!("Straße #{id}"),
        FeatureRef::Seed(id) => format!("Seed #{id}"),
        FeatureRef::District(id) => format!("Distrikt #{id}"),
    }
}
