//! Geometrie-Hilfsfunktionen für Snap- und Hit-Test-Abfragen.
//!
//! Reine Distanz- und Enthaltenseins-Prüfungen. Generative Geometrie
//! (Flächenfüllung, Straßenraster) gehört nicht hierher.

use glam::Vec2;

/// Nächster Punkt auf dem Segment `a`–`b` zum Abfragepunkt `p`.
///
/// Auf das Segment geklemmt, nicht auf die unendliche Gerade.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        // Degeneriertes Segment (a == b)
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Distanz vom Punkt `p` zum Segment `a`–`b`.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    p.distance(closest_point_on_segment(p, a, b))
}

/// Minimale Distanz vom Punkt `p` zu einem Polylinienzug.
///
/// Gibt `None` zurück, wenn die Polylinie weniger als zwei Punkte hat.
pub fn distance_to_polyline(p: Vec2, points: &[Vec2]) -> Option<f32> {
    if points.len() < 2 {
        return None;
    }
    points
        .windows(2)
        .map(|w| distance_to_segment(p, w[0], w[1]))
        .min_by(|a, b| a.total_cmp(b))
}

/// Even-Odd-Test: liegt `p` innerhalb des Polygons?
///
/// Das Polygon wird implizit geschlossen (letzter → erster Punkt).
pub fn point_in_polygon(p: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        // Kante kreuzt den horizontalen Strahl von p nach rechts?
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn closest_point_clamps_to_segment_ends() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);

        let before = closest_point_on_segment(Vec2::new(-10.0, 5.0), a, b);
        assert_relative_eq!(before.x, 0.0);
        assert_relative_eq!(before.y, 0.0);

        let after = closest_point_on_segment(Vec2::new(150.0, -3.0), a, b);
        assert_relative_eq!(after.x, 100.0);
    }

    #[test]
    fn closest_point_projects_onto_interior() {
        let p = closest_point_on_segment(
            Vec2::new(50.0, 5.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
        );
        assert_relative_eq!(p.x, 50.0);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn degenerate_segment_returns_endpoint() {
        let a = Vec2::new(3.0, 4.0);
        let p = closest_point_on_segment(Vec2::new(10.0, 10.0), a, a);
        assert_eq!(p, a);
    }

    #[test]
    fn polyline_distance_takes_nearest_segment() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        let d = distance_to_polyline(Vec2::new(12.0, 5.0), &points).unwrap();
        assert_relative_eq!(d, 2.0);

        assert!(distance_to_polyline(Vec2::ZERO, &points[..1]).is_none());
    }

    #[test]
    fn point_in_polygon_even_odd() {
        let square = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(Vec2::new(5.0, 5.0), &square));
        assert!(!point_in_polygon(Vec2::new(15.0, 5.0), &square));
        assert!(!point_in_polygon(Vec2::new(5.0, -1.0), &square));
        // Zu wenige Punkte → nie innen
        assert!(!point_in_polygon(Vec2::new(5.0, 5.0), &square[..2]));
    }
}
