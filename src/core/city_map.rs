//! Die zentrale CityMap-Datenstruktur mit Straßen, Distrikten, Stationen,
//! Seeds und Transit-Linien.
//!
//! Abgeleitete Indizes (Stations-KD-Tree, Snap-Segmente) werden nach jeder
//! Mutation neu aufgebaut und nicht mitserialisiert.

use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::snap::{SnapGeometry, SnapHit, SnapIndex};
use super::spatial::{StationIndex, StationMatch};

/// Klasse einer Straße
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoadClass {
    /// Normale Stadtstraße
    #[default]
    Street,
    /// Highway (breiter, keine Schließung per Klick beim Zeichnen)
    Highway,
}

/// Art eines Distrikts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistrictKind {
    /// Wohnviertel
    Neighborhood,
    /// Stadtgrenze
    CityLimits,
}

/// Art einer Station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationKind {
    /// Bahnhof (Regionalbahn)
    Rail,
    /// U-Bahn-Station
    Subway,
}

/// Art eines platzierbaren Seed-Objekts.
///
/// Seeds sind parametrische Platzierungsanfragen; die eigentliche
/// Geometrie-Erzeugung (Flächen, Straßenraster) übernimmt ein externer
/// Generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedKind {
    /// Park (Größe per Drag wählbar)
    Park,
    /// Wald (Größe per Drag wählbar)
    Forest,
    /// See (Größe per Drag wählbar)
    Lake,
    /// Bahnhof
    RailStation,
    /// U-Bahn-Station
    SubwayStation,
}

impl SeedKind {
    /// Gibt `true` zurück, wenn die Platzierung per Drag dimensioniert wird.
    pub fn supports_drag_size(&self) -> bool {
        matches!(self, SeedKind::Park | SeedKind::Forest | SeedKind::Lake)
    }

    /// Stations-Art, falls dieser Seed eine Station erzeugt.
    pub fn station_kind(&self) -> Option<StationKind> {
        match self {
            SeedKind::RailStation => Some(StationKind::Rail),
            SeedKind::SubwayStation => Some(StationKind::Subway),
            _ => None,
        }
    }

    /// Anzeige-Name für Toolbar und Statusleiste.
    pub fn label(&self) -> &'static str {
        match self {
            SeedKind::Park => "Park",
            SeedKind::Forest => "Wald",
            SeedKind::Lake => "See",
            SeedKind::RailStation => "Bahnhof",
            SeedKind::SubwayStation => "U-Bahn",
        }
    }
}

/// Welches Ende einer Straße gemeint ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadEnd {
    /// Erster Punkt der Polylinie
    Start,
    /// Letzter Punkt der Polylinie
    End,
}

/// Eine Straße als Polylinie in Weltkoordinaten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Road {
    /// Eindeutige Feature-ID
    pub id: u64,
    /// Straßenklasse
    pub class: RoadClass,
    /// Stützpunkte (mindestens 2)
    pub points: Vec<Vec2>,
}

impl Road {
    /// Erstellt eine neue Straße.
    pub fn new(id: u64, class: RoadClass, points: Vec<Vec2>) -> Self {
        Self { id, class, points }
    }

    /// Position des angefragten Endpunkts.
    pub fn endpoint(&self, end: RoadEnd) -> Option<Vec2> {
        match end {
            RoadEnd::Start => self.points.first().copied(),
            RoadEnd::End => self.points.last().copied(),
        }
    }
}

/// Ein Distrikt als geschlossenes Polygon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct District {
    /// Eindeutige Feature-ID
    pub id: u64,
    /// Distrikt-Art
    pub kind: DistrictKind,
    /// Umriss-Polygon (implizit geschlossen)
    pub polygon: Vec<Vec2>,
}

/// Eine committete Split-Linie.
///
/// Wird vom (externen) Distrikt-Generator konsumiert; hier nur als
/// Rohdaten gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitLine {
    /// Eindeutige Feature-ID
    pub id: u64,
    /// Linienzug in Weltkoordinaten
    pub points: Vec<Vec2>,
}

/// Eine Station (Bahnhof oder U-Bahn).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Eindeutige Feature-ID
    pub id: u64,
    /// Stations-Art
    pub kind: StationKind,
    /// Position in Weltkoordinaten
    pub position: Vec2,
}

impl Station {
    /// Erstellt eine neue Station.
    pub fn new(id: u64, kind: StationKind, position: Vec2) -> Self {
        Self { id, kind, position }
    }
}

/// Ein platziertes Seed-Objekt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Eindeutige Feature-ID
    pub id: u64,
    /// Seed-Art
    pub kind: SeedKind,
    /// Position in Weltkoordinaten
    pub position: Vec2,
    /// Radius in Welteinheiten
    pub size: f32,
}

/// Art einer Transit-Linie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransitKind {
    /// Regionalbahn
    #[default]
    Rail,
    /// U-Bahn
    Subway,
}

/// Eigenschaften einer Transit-Linie (Name, Farbe, Art).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineProperties {
    /// Anzeige-Name der Linie
    pub name: String,
    /// Linienfarbe (RGBA)
    pub color: [f32; 4],
    /// Linien-Art
    pub kind: TransitKind,
}

impl Default for LineProperties {
    fn default() -> Self {
        Self {
            name: String::from("Neue Linie"),
            color: [0.9, 0.2, 0.2, 1.0],
            kind: TransitKind::Rail,
        }
    }
}

/// Eine committete Transit-Linie über verkettete Stationen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitLine {
    /// Eindeutige Feature-ID
    pub id: u64,
    /// Stations-IDs in Verkettungsreihenfolge (mindestens 2)
    pub stations: Vec<u64>,
    /// Linien-Eigenschaften
    pub properties: LineProperties,
}

/// Vollständiges Stadtplan-Dokument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityMap {
    /// Alle Straßen, indexiert nach ID (Einfügereihenfolge = Zeichenreihenfolge)
    pub roads: IndexMap<u64, Road>,
    /// Alle Distrikte
    pub districts: IndexMap<u64, District>,
    /// Alle Split-Linien
    pub split_lines: IndexMap<u64, SplitLine>,
    /// Alle Stationen
    pub stations: IndexMap<u64, Station>,
    /// Alle platzierten Seeds
    pub seeds: IndexMap<u64, Seed>,
    /// Alle Transit-Linien
    pub transit_lines: IndexMap<u64, TransitLine>,
    /// Name des Plans (optional)
    pub map_name: Option<String>,
    /// Nächste zu vergebende Feature-ID
    next_id: u64,
    /// Persistenter Stations-Index für schnelle Abfragen
    #[serde(skip)]
    station_index: StationIndex,
    /// Snap-Segment-Index über Distrikt-Umrisse, Straßen und Split-Linien
    #[serde(skip)]
    snap_index: SnapIndex,
}

impl CityMap {
    /// Erstellt eine neue leere CityMap.
    pub fn new() -> Self {
        Self {
            roads: IndexMap::new(),
            districts: IndexMap::new(),
            split_lines: IndexMap::new(),
            stations: IndexMap::new(),
            seeds: IndexMap::new(),
            transit_lines: IndexMap::new(),
            map_name: None,
            next_id: 1,
            station_index: StationIndex::empty(),
            snap_index: SnapIndex::empty(),
        }
    }

    /// Vergibt die nächste Feature-ID.
    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fügt eine Straße hinzu und gibt ihre ID zurück.
    pub fn add_road(&mut self, class: RoadClass, points: Vec<Vec2>) -> u64 {
        let id = self.allocate_id();
        self.roads.insert(id, Road::new(id, class, points));
        self.rebuild_indices();
        id
    }

    /// Fügt einen Distrikt hinzu und gibt seine ID zurück.
    pub fn add_district(&mut self, kind: DistrictKind, polygon: Vec<Vec2>) -> u64 {
        let id = self.allocate_id();
        self.districts.insert(id, District { id, kind, polygon });
        self.rebuild_indices();
        id
    }

    /// Fügt eine Split-Linie hinzu und gibt ihre ID zurück.
    pub fn add_split_line(&mut self, points: Vec<Vec2>) -> u64 {
        let id = self.allocate_id();
        self.split_lines.insert(id, SplitLine { id, points });
        self.rebuild_indices();
        id
    }

    /// Fügt eine Station hinzu und gibt ihre ID zurück.
    pub fn add_station(&mut self, kind: StationKind, position: Vec2) -> u64 {
        let id = self.allocate_id();
        self.stations.insert(id, Station::new(id, kind, position));
        self.rebuild_indices();
        id
    }

    /// Fügt ein Seed-Objekt hinzu und gibt seine ID zurück.
    pub fn add_seed(&mut self, kind: SeedKind, position: Vec2, size: f32) -> u64 {
        let id = self.allocate_id();
        self.seeds.insert(
            id,
            Seed {
                id,
                kind,
                position,
                size,
            },
        );
        id
    }

    /// Fügt eine Transit-Linie hinzu und gibt ihre ID zurück.
    pub fn add_transit_line(&mut self, stations: Vec<u64>, properties: LineProperties) -> u64 {
        let id = self.allocate_id();
        self.transit_lines.insert(
            id,
            TransitLine {
                id,
                stations,
                properties,
            },
        );
        id
    }

    /// Verschiebt einen Straßen-Endpunkt auf eine neue Position.
    pub fn set_road_endpoint(&mut self, road_id: u64, end: RoadEnd, position: Vec2) -> bool {
        let Some(road) = self.roads.get_mut(&road_id) else {
            return false;
        };
        let updated = match end {
            RoadEnd::Start => {
                if let Some(p) = road.points.first_mut() {
                    *p = position;
                    true
                } else {
                    false
                }
            }
            RoadEnd::End => {
                if let Some(p) = road.points.last_mut() {
                    *p = position;
                    true
                } else {
                    false
                }
            }
        };
        if updated {
            self.rebuild_indices();
        }
        updated
    }

    /// Entfernt eine Straße inklusive abhängiger Snap-Segmente.
    pub fn remove_road(&mut self, road_id: u64) -> bool {
        let removed = self.roads.shift_remove(&road_id).is_some();
        if removed {
            self.rebuild_indices();
        }
        removed
    }

    /// Entfernt einen Distrikt.
    pub fn remove_district(&mut self, district_id: u64) -> bool {
        let removed = self.districts.shift_remove(&district_id).is_some();
        if removed {
            self.rebuild_indices();
        }
        removed
    }

    /// Entfernt eine Station inklusive aller Transit-Linien, die sie nutzen.
    pub fn remove_station(&mut self, station_id: u64) -> bool {
        let removed = self.stations.shift_remove(&station_id).is_some();
        if removed {
            self.transit_lines
                .retain(|_, line| !line.stations.contains(&station_id));
            self.rebuild_indices();
        }
        removed
    }

    /// Entfernt ein Seed-Objekt.
    pub fn remove_seed(&mut self, seed_id: u64) -> bool {
        self.seeds.shift_remove(&seed_id).is_some()
    }

    /// Findet die nächste Station zur Weltposition.
    pub fn nearest_station(&self, query: Vec2) -> Option<StationMatch> {
        self.station_index.nearest(query)
    }

    /// Findet die nächste Station innerhalb eines Radius.
    pub fn nearest_station_within(&self, query: Vec2, radius: f32) -> Option<StationMatch> {
        self.station_index.nearest_within(query, radius)
    }

    /// Snap-Abfrage gegen Distrikt-Umrisse, Straßen und Split-Linien.
    pub fn find_snap_point(&self, query: Vec2, threshold: f32) -> Option<SnapHit> {
        self.snap_index.find_snap_point(query, threshold)
    }

    /// Gibt die Anzahl indexierter Snap-Segmente zurück (für Statusanzeige).
    pub fn snap_segment_count(&self) -> usize {
        self.snap_index.len()
    }

    /// Baut Stations- und Snap-Index aus der aktuellen Geometrie neu auf.
    ///
    /// Muss nach Deserialisierung aufgerufen werden (`#[serde(skip)]`-Felder).
    pub fn rebuild_indices(&mut self) {
        self.station_index = StationIndex::from_stations(&self.stations);

        self.snap_index.clear();
        for district in self.districts.values() {
            self.snap_index.insert_polyline(
                district.id,
                SnapGeometry::District,
                &district.polygon,
                true,
            );
        }
        for road in self.roads.values() {
            self.snap_index
                .insert_polyline(road.id, SnapGeometry::Road, &road.points, false);
        }
        for split in self.split_lines.values() {
            self.snap_index.insert_polyline(
                split.id,
                SnapGeometry::SplitLine,
                &split.points,
                false,
            );
        }
    }

    /// Gibt die Gesamtzahl aller Features zurück (für die Statusleiste).
    pub fn feature_count(&self) -> usize {
        self.roads.len()
            + self.districts.len()
            + self.split_lines.len()
            + self.stations.len()
            + self.seeds.len()
            + self.transit_lines.len()
    }
}

impl Default for CityMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_road_assigns_unique_ids() {
        let mut map = CityMap::new();
        let a = map.add_road(
            RoadClass::Street,
            vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)],
        );
        let b = map.add_road(
            RoadClass::Highway,
            vec![Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0)],
        );

        assert_ne!(a, b);
        assert_eq!(map.roads.len(), 2);
    }

    #[test]
    fn set_road_endpoint_moves_correct_end() {
        let mut map = CityMap::new();
        let id = map.add_road(
            RoadClass::Street,
            vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0)],
        );

        assert!(map.set_road_endpoint(id, RoadEnd::End, Vec2::new(25.0, 5.0)));
        let road = &map.roads[&id];
        assert_eq!(road.points[0], Vec2::new(0.0, 0.0));
        assert_eq!(*road.points.last().unwrap(), Vec2::new(25.0, 5.0));

        assert!(!map.set_road_endpoint(999, RoadEnd::Start, Vec2::ZERO));
    }

    #[test]
    fn district_edges_are_snappable_after_insert() {
        let mut map = CityMap::new();
        map.add_district(
            DistrictKind::Neighborhood,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(100.0, 0.0),
                Vec2::new(100.0, 100.0),
            ],
        );

        // 3 Kanten inkl. Schlusskante
        assert_eq!(map.snap_segment_count(), 3);
        assert!(map.find_snap_point(Vec2::new(50.0, 5.0), 20.0).is_some());
    }

    #[test]
    fn remove_station_drops_dependent_transit_lines() {
        let mut map = CityMap::new();
        let a = map.add_station(StationKind::Rail, Vec2::new(0.0, 0.0));
        let b = map.add_station(StationKind::Rail, Vec2::new(50.0, 0.0));
        map.add_transit_line(vec![a, b], LineProperties::default());

        assert_eq!(map.transit_lines.len(), 1);
        assert!(map.remove_station(a));
        assert!(map.transit_lines.is_empty());
    }

    #[test]
    fn nearest_station_uses_index() {
        let mut map = CityMap::new();
        map.add_station(StationKind::Subway, Vec2::new(10.0, 10.0));
        map.add_station(StationKind::Rail, Vec2::new(200.0, 0.0));

        let hit = map.nearest_station(Vec2::new(12.0, 11.0)).unwrap();
        assert!(hit.distance < 3.0);

        assert!(map.nearest_station_within(Vec2::new(500.0, 0.0), 30.0).is_none());
    }
}
