//! Painter-basiertes Rendering der RenderScene im Viewport.
//!
//! Zeichnet Karten-Layer und Gesten-Feedback mit egui-Shapes. Liest die
//! Szene ausschließlich — Mutationen laufen nie über den Painter.

use glam::Vec2;

use crate::core::{DistrictKind, FeatureRef, RoadClass, StationKind};
use crate::shared::{GestureFeedback, RenderScene};

/// Konvertiert eine RGBA-Farbe in egui-Farbe.
fn color32(c: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
        (c[3] * 255.0) as u8,
    )
}

/// Kontext für die Welt→Screen-Projektion eines Frames.
struct Projection {
    origin: egui::Pos2,
    viewport: Vec2,
    px_per_world: f32,
}

impl Projection {
    fn new(scene: &RenderScene, canvas_origin: egui::Pos2) -> Self {
        let viewport = Vec2::new(scene.viewport_size[0], scene.viewport_size[1]);
        let wpp = scene.camera.world_per_pixel(scene.viewport_size[1]);
        Self {
            origin: canvas_origin,
            viewport,
            px_per_world: 1.0 / wpp.max(f32::EPSILON),
        }
    }

    fn to_screen(&self, scene: &RenderScene, world: Vec2) -> egui::Pos2 {
        let s = scene.camera.world_to_screen(world, self.viewport);
        self.origin + egui::vec2(s.x, s.y)
    }

    fn px(&self, world_units: f32) -> f32 {
        (world_units * self.px_per_world).max(1.0)
    }
}

/// Zeichnet die komplette Szene in den Viewport.
pub fn draw_scene(painter: &egui::Painter, scene: &RenderScene, canvas_origin: egui::Pos2) {
    let proj = Projection::new(scene, canvas_origin);

    let Some(map) = scene.city_map.as_deref() else {
        return;
    };

    // ── Karten-Layer (unterste zuerst) ──────────────────────────────

    for district in map.districts.values() {
        let points: Vec<egui::Pos2> = district
            .polygon
            .iter()
            .map(|p| proj.to_screen(scene, *p))
            .collect();
        if points.len() < 3 {
            continue;
        }
        let fill = match district.kind {
            DistrictKind::Neighborhood => scene.options.district_color_neighborhood,
            DistrictKind::CityLimits => scene.options.district_color_city_limits,
        };
        let selected = scene.selected == Some(FeatureRef::District(district.id));
        let stroke_color = if selected {
            color32(scene.options.selection_color)
        } else {
            color32(fill).gamma_multiply(2.0)
        };
        painter.add(egui::Shape::convex_polygon(
            points.clone(),
            color32(fill),
            egui::Stroke::NONE,
        ));
        let mut outline = points;
        if let Some(first) = outline.first().copied() {
            outline.push(first);
        }
        painter.add(egui::Shape::line(
            outline,
            egui::Stroke::new(1.5, stroke_color),
        ));
    }

    for split in map.split_lines.values() {
        let points: Vec<egui::Pos2> = split
            .points
            .iter()
            .map(|p| proj.to_screen(scene, *p))
            .collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(1.0, egui::Color32::LIGHT_GRAY),
        ));
    }

    for seed in map.seeds.values() {
        let center = proj.to_screen(scene, seed.position);
        let radius = proj.px(seed.size);
        let selected = scene.selected == Some(FeatureRef::Seed(seed.id));
        painter.circle_filled(center, radius, color32(scene.options.seed_color));
        if selected {
            painter.circle_stroke(
                center,
                radius,
                egui::Stroke::new(2.0, color32(scene.options.selection_color)),
            );
        }
    }

    for road in map.roads.values() {
        let points: Vec<egui::Pos2> = road
            .points
            .iter()
            .map(|p| proj.to_screen(scene, *p))
            .collect();
        let (color, thickness) = match road.class {
            RoadClass::Street => (
                scene.options.road_color_street,
                scene.options.road_thickness_world,
            ),
            RoadClass::Highway => (
                scene.options.road_color_highway,
                scene.options.highway_thickness_world,
            ),
        };
        let selected = matches!(
            scene.selected,
            Some(FeatureRef::Road(id) | FeatureRef::RoadEndpoint { road_id: id, .. }) if id == road.id
        );
        let stroke_color = if selected {
            color32(scene.options.selection_color)
        } else {
            color32(color)
        };
        painter.add(egui::Shape::line(
            points.clone(),
            egui::Stroke::new(proj.px(thickness), stroke_color),
        ));

        // Endpunkte als kleine Griffe; Hover hervorheben
        for (end_pos, end) in [
            (road.points.first(), crate::core::RoadEnd::Start),
            (road.points.last(), crate::core::RoadEnd::End),
        ] {
            let Some(pos) = end_pos else { continue };
            let center = proj.to_screen(scene, *pos);
            let hovered = scene.hovered_endpoint == Some((road.id, end));
            let radius = if hovered { 6.0 } else { 4.0 };
            painter.circle_filled(center, radius, stroke_color);
            if hovered {
                painter.circle_stroke(
                    center,
                    radius + 2.0,
                    egui::Stroke::new(1.5, color32(scene.options.preview_color)),
                );
            }
        }
    }

    for line in map.transit_lines.values() {
        let points: Vec<egui::Pos2> = line
            .stations
            .iter()
            .filter_map(|id| map.stations.get(id))
            .map(|s| proj.to_screen(scene, s.position))
            .collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(3.0, color32(line.properties.color)),
        ));
    }

    for station in map.stations.values() {
        let center = proj.to_screen(scene, station.position);
        let radius = proj.px(scene.options.station_size_world);
        let selected = scene.selected == Some(FeatureRef::Station(station.id));
        let color = if selected {
            color32(scene.options.selection_color)
        } else {
            color32(scene.options.station_color)
        };
        match station.kind {
            StationKind::Rail => {
                painter.circle_filled(center, radius, color);
            }
            StationKind::Subway => {
                painter.circle_filled(center, radius, egui::Color32::WHITE);
                painter.circle_stroke(center, radius, egui::Stroke::new(2.0, color));
            }
        }
    }

    draw_gesture_feedback(painter, scene, &proj);
}

/// Zeichnet das Gesten-Feedback des aktiven Modus über die Karten-Layer.
fn draw_gesture_feedback(painter: &egui::Painter, scene: &RenderScene, proj: &Projection) {
    let preview_stroke = egui::Stroke::new(1.5, color32(scene.options.preview_color));

    match &scene.gesture {
        GestureFeedback::None => {}

        GestureFeedback::PlacementPreview {
            center,
            radius,
            sizing,
            ..
        } => {
            let c = proj.to_screen(scene, *center);
            let r = proj.px(*radius);
            painter.circle_stroke(c, r, preview_stroke);
            if *sizing {
                painter.circle_filled(c, 3.0, color32(scene.options.preview_color));
            }
        }

        GestureFeedback::PathPreview {
            vertices,
            preview,
            is_area,
        } => {
            let mut points: Vec<egui::Pos2> = vertices
                .iter()
                .map(|p| proj.to_screen(scene, *p))
                .collect();
            // Gummiband vom letzten Vertex zur Vorschau-Position
            if let Some(p) = preview {
                points.push(proj.to_screen(scene, *p));
            }
            if *is_area && points.len() >= 3 {
                if let Some(first) = points.first().copied() {
                    let mut closed = points.clone();
                    closed.push(first);
                    painter.add(egui::Shape::line(closed, preview_stroke));
                }
            } else {
                painter.add(egui::Shape::line(points.clone(), preview_stroke));
            }
            for p in vertices {
                painter.circle_filled(
                    proj.to_screen(scene, *p),
                    3.0,
                    color32(scene.options.preview_color),
                );
            }
        }

        GestureFeedback::EndpointDrag { position, snapped } => {
            let c = proj.to_screen(scene, *position);
            painter.circle_filled(c, 5.0, color32(scene.options.preview_color));
            if *snapped {
                // Snap-Marker: Ring in Snap-Farbe
                painter.circle_stroke(
                    c,
                    9.0,
                    egui::Stroke::new(2.0, color32(scene.options.snap_marker_color)),
                );
            }
        }

        GestureFeedback::TransitPreview {
            stations,
            preview,
            hovered,
            color,
        } => {
            let mut points: Vec<egui::Pos2> = stations
                .iter()
                .map(|p| proj.to_screen(scene, *p))
                .collect();
            if let Some(p) = preview {
                points.push(proj.to_screen(scene, *p));
            }
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(3.0, color32(*color)),
            ));
            if let Some(h) = hovered {
                painter.circle_stroke(
                    proj.to_screen(scene, *h),
                    proj.px(scene.options.station_size_world) + 4.0,
                    egui::Stroke::new(2.0, color32(*color)),
                );
            }
        }
    }
}
