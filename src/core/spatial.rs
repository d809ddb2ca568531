//! Spatial-Index (KD-Tree) für schnelle Stations-Abfragen.

use glam::Vec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::Station;

/// Ergebnis einer Distanzabfrage gegen den Stations-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationMatch {
    /// ID der gefundenen Station
    pub station_id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Stationen einer CityMap.
#[derive(Debug, Clone)]
pub struct StationIndex {
    tree: KdTree<f64, 2>,
    station_ids: Vec<u64>,
}

impl StationIndex {
    /// Erstellt einen leeren Stations-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            station_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Stationen.
    pub fn from_stations(stations: &IndexMap<u64, Station>) -> Self {
        let station_ids: Vec<u64> = stations.keys().copied().collect();

        let entries: Vec<[f64; 2]> = station_ids
            .iter()
            .filter_map(|id| {
                stations
                    .get(id)
                    .map(|station| [station.position.x as f64, station.position.y as f64])
            })
            .collect();

        let tree: KdTree<f64, 2> = (&entries).into();

        Self { tree, station_ids }
    }

    /// Gibt die Anzahl indexierter Stationen zurück.
    pub fn len(&self) -> usize {
        self.station_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Stationen im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.station_ids.is_empty()
    }

    /// Findet die nächste Station zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec2) -> Option<StationMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let station_id = *self.station_ids.get(result.item as usize)?;

        Some(StationMatch {
            station_id,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet die nächste Station innerhalb eines Radius (oder `None`).
    pub fn nearest_within(&self, query: Vec2, radius: f32) -> Option<StationMatch> {
        self.nearest(query).filter(|m| m.distance <= radius)
    }

    /// Findet alle Stationen innerhalb eines Radius, nach Distanz sortiert.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<StationMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], (radius * radius) as f64)
            .into_iter()
            .filter_map(|entry| {
                let station_id = *self.station_ids.get(entry.item as usize)?;
                Some(StationMatch {
                    station_id,
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}

impl Default for StationIndex {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StationKind;

    fn sample_stations() -> IndexMap<u64, Station> {
        let mut stations = IndexMap::new();
        stations.insert(1, Station::new(1, StationKind::Rail, Vec2::new(0.0, 0.0)));
        stations.insert(2, Station::new(2, StationKind::Subway, Vec2::new(50.0, 0.0)));
        stations.insert(3, Station::new(3, StationKind::Rail, Vec2::new(20.0, 15.0)));
        stations
    }

    #[test]
    fn nearest_returns_expected_station() {
        let index = StationIndex::from_stations(&sample_stations());
        let nearest = index
            .nearest(Vec2::new(19.0, 14.0))
            .expect("Treffer erwartet");

        assert_eq!(nearest.station_id, 3);
        assert!(nearest.distance < 2.0);
    }

    #[test]
    fn nearest_within_respects_radius() {
        let index = StationIndex::from_stations(&sample_stations());

        assert!(index.nearest_within(Vec2::new(0.0, 25.0), 30.0).is_some());
        assert!(index.nearest_within(Vec2::new(0.0, 200.0), 30.0).is_none());
    }

    #[test]
    fn radius_query_returns_sorted_matches() {
        let index = StationIndex::from_stations(&sample_stations());
        let matches = index.within_radius(Vec2::new(0.0, 0.0), 30.0);

        let ids: Vec<u64> = matches.into_iter().map(|m| m.station_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = StationIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(Vec2::new(0.0, 0.0)).is_none());
    }
}
