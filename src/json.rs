//! JSON Import/Export für Stadtplan-Dokumente.
//!
//! Abgeleitete Indizes (`#[serde(skip)]`) werden nach dem Parsen neu
//! aufgebaut, damit Snap- und Stations-Abfragen sofort funktionieren.

use anyhow::Context;

use crate::core::CityMap;

/// Parst ein Stadtplan-Dokument aus JSON.
pub fn parse_city_map(content: &str) -> anyhow::Result<CityMap> {
    let mut map: CityMap =
        serde_json::from_str(content).context("Ungültiges CityPlan-JSON")?;
    map.rebuild_indices();
    Ok(map)
}

/// Serialisiert ein Stadtplan-Dokument als JSON (pretty-printed).
pub fn write_city_map(map: &CityMap) -> anyhow::Result<String> {
    serde_json::to_string_pretty(map).context("Dokument konnte nicht serialisiert werden")
}
