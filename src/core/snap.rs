//! Snap-Engine: indexierte Segmentmenge mit Nächster-Punkt-Abfrage.
//!
//! Der Index hält abgeleitete Kopien der Kanten fremder Geometrie
//! (Distrikt-Umrisse, Straßen, Split-Linien) und wird bei jeder Änderung
//! der Quellgeometrie komplett neu aufgebaut. Das Snap-Ergebnis ist
//! beratend: der Aufrufer entscheidet, ob es angewendet wird.

use glam::Vec2;

use crate::core::geometry::closest_point_on_segment;

/// Typ der Geometrie, zu der ein Snap-Segment gehört.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapGeometry {
    /// Distrikt-Umriss (geschlossenes Polygon)
    District,
    /// Straßen-Polylinie
    Road,
    /// Split-Linie
    SplitLine,
}

/// Ein indexiertes Liniensegment mit Besitzer-Referenz.
#[derive(Debug, Clone, Copy)]
pub struct SnapSegment {
    pub p1: Vec2,
    pub p2: Vec2,
    /// ID der Besitzer-Geometrie
    pub geometry_id: u64,
    /// Typ der Besitzer-Geometrie
    pub geometry: SnapGeometry,
}

/// Ergebnis einer Snap-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapHit {
    /// Welt-Position des Snap-Punkts (Vertex oder Punkt auf dem Segment)
    pub point: Vec2,
    /// ID der Besitzer-Geometrie
    pub geometry_id: u64,
    /// Typ der Besitzer-Geometrie
    pub geometry: SnapGeometry,
    /// Distanz vom Abfragepunkt zum Snap-Punkt
    pub distance: f32,
}

/// Neu aufbaubarer Index über alle Snap-Segmente.
#[derive(Debug, Clone, Default)]
pub struct SnapIndex {
    segments: Vec<SnapSegment>,
}

impl SnapIndex {
    /// Erstellt einen leeren Snap-Index.
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Leert den Index (vor einem Bulk-Neuaufbau).
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Fügt die Kanten eines Linienzugs ein.
    ///
    /// Bei `closed = true` wird die Schlusskante (letzter → erster Punkt)
    /// mit eingefügt (Distrikt-Umrisse).
    pub fn insert_polyline(
        &mut self,
        geometry_id: u64,
        geometry: SnapGeometry,
        points: &[Vec2],
        closed: bool,
    ) {
        if points.len() < 2 {
            return;
        }
        for w in points.windows(2) {
            self.segments.push(SnapSegment {
                p1: w[0],
                p2: w[1],
                geometry_id,
                geometry,
            });
        }
        if closed && points.len() >= 3 {
            self.segments.push(SnapSegment {
                p1: points[points.len() - 1],
                p2: points[0],
                geometry_id,
                geometry,
            });
        }
    }

    /// Gibt die Anzahl indexierter Segmente zurück.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Gibt `true` zurück, wenn keine Segmente indexiert sind.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Findet den nächsten Snap-Punkt innerhalb des Schwellwerts.
    ///
    /// Für jedes Segment wird der auf das Segment geklemmte nächste Punkt
    /// sowie beide Endpunkte betrachtet. Liegen Vertex und Segment-Innenpunkt
    /// beide im Schwellwert, gewinnt der Vertex bei gleicher oder geringerer
    /// Distanz. Leerer Index → `None`, kein Fehler.
    pub fn find_snap_point(&self, query: Vec2, threshold: f32) -> Option<SnapHit> {
        let mut best_vertex: Option<SnapHit> = None;
        let mut best_interior: Option<SnapHit> = None;

        for seg in &self.segments {
            for vertex in [seg.p1, seg.p2] {
                let d = query.distance(vertex);
                if best_vertex.as_ref().is_none_or(|b| d < b.distance) {
                    best_vertex = Some(SnapHit {
                        point: vertex,
                        geometry_id: seg.geometry_id,
                        geometry: seg.geometry,
                        distance: d,
                    });
                }
            }

            let on_segment = closest_point_on_segment(query, seg.p1, seg.p2);
            let d = query.distance(on_segment);
            if best_interior.as_ref().is_none_or(|b| d < b.distance) {
                best_interior = Some(SnapHit {
                    point: on_segment,
                    geometry_id: seg.geometry_id,
                    geometry: seg.geometry,
                    distance: d,
                });
            }
        }

        // Vertex-Tie-Break: bei gleicher oder geringerer Distanz gewinnt der Vertex.
        match (best_vertex, best_interior) {
            (Some(v), Some(i)) if v.distance <= threshold && v.distance <= i.distance => Some(v),
            (_, Some(i)) if i.distance <= threshold => Some(i),
            (Some(v), _) if v.distance <= threshold => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const THRESHOLD: f32 = 20.0;

    fn single_segment_index() -> SnapIndex {
        let mut index = SnapIndex::empty();
        index.insert_polyline(
            7,
            SnapGeometry::District,
            &[Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)],
            false,
        );
        index
    }

    #[test]
    fn interior_point_within_threshold_snaps() {
        let index = single_segment_index();
        let hit = index
            .find_snap_point(Vec2::new(50.0, 5.0), THRESHOLD)
            .expect("Snap erwartet");

        assert_relative_eq!(hit.point.x, 50.0);
        assert_relative_eq!(hit.point.y, 0.0);
        assert_eq!(hit.geometry_id, 7);
        assert_eq!(hit.geometry, SnapGeometry::District);
        assert_relative_eq!(hit.distance, 5.0);
    }

    #[test]
    fn point_outside_threshold_returns_none() {
        let index = single_segment_index();
        assert!(index
            .find_snap_point(Vec2::new(50.0, 25.0), THRESHOLD)
            .is_none());
    }

    #[test]
    fn vertex_wins_tie_break_over_interior_point() {
        let index = single_segment_index();
        // (0,1): Vertex (0,0) und geklemmter Innenpunkt liegen gleich weit —
        // der Vertex gewinnt.
        let hit = index
            .find_snap_point(Vec2::new(0.0, 1.0), THRESHOLD)
            .expect("Snap erwartet");

        assert_relative_eq!(hit.point.x, 0.0);
        assert_relative_eq!(hit.point.y, 0.0);
    }

    #[test]
    fn closer_interior_point_beats_farther_vertex() {
        let index = single_segment_index();
        let hit = index
            .find_snap_point(Vec2::new(30.0, 2.0), THRESHOLD)
            .expect("Snap erwartet");

        // Innenpunkt (30,0) in Distanz 2 schlägt Vertex (0,0) in Distanz ~30
        assert_relative_eq!(hit.point.x, 30.0);
        assert_relative_eq!(hit.point.y, 0.0);
    }

    #[test]
    fn empty_index_always_returns_none() {
        let index = SnapIndex::empty();
        assert!(index.find_snap_point(Vec2::ZERO, THRESHOLD).is_none());
    }

    #[test]
    fn closed_polyline_indexes_closing_edge() {
        let mut index = SnapIndex::empty();
        index.insert_polyline(
            1,
            SnapGeometry::District,
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(100.0, 0.0),
                Vec2::new(100.0, 100.0),
                Vec2::new(0.0, 100.0),
            ],
            true,
        );
        assert_eq!(index.len(), 4);

        // Punkt nahe der Schlusskante (0,100)–(0,0)
        let hit = index
            .find_snap_point(Vec2::new(3.0, 50.0), THRESHOLD)
            .expect("Snap auf Schlusskante erwartet");
        assert_relative_eq!(hit.point.x, 0.0);
        assert_relative_eq!(hit.point.y, 50.0);
    }
}
