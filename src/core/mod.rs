//! Core-Domänentypen: CityMap, Kamera, Snap-Engine, Hit-Test, Spatial-Index.

pub mod camera;
/// Core-Datenmodelle für den Stadtplan
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - CityMap: Container für Straßen, Distrikte, Stationen, Seeds, Linien
/// - SnapIndex: Segment-Index für Nächster-Punkt-Snapping
/// - HitTestRegistry: ebenenweise Feature-Abfragen
pub mod city_map;
pub mod geometry;
pub mod snap;
pub mod spatial;

pub use camera::{Camera2D, PanGate};
pub use city_map::{
    CityMap, District, DistrictKind, LineProperties, Road, RoadClass, RoadEnd, Seed, SeedKind,
    SplitLine, Station, StationKind, TransitKind, TransitLine,
};
pub use hit_test::{FeatureRef, HitTestRegistry};
pub use snap::{SnapGeometry, SnapHit, SnapIndex, SnapSegment};
pub use spatial::{StationIndex, StationMatch};
