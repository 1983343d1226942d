//! Raster tile style documents
//!
//! Three selectable public tile sources rendered as MapLibre `version: 8`
//! style documents. Tiles are plain `{z}/{x}/{y}` HTTP GETs against public
//! providers; no authentication, no schema beyond raster bytes.

use serde_json::{Value, json};

/// Seconds the client waits for the map to load before surfacing an error
pub const MAP_LOAD_TIMEOUT_SECONDS: u64 = 30;

const GLYPHS_URL: &str = "https://demotiles.maplibre.org/font/{fontstack}/{range}.pbf";

/// Selectable base map styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStyle {
    /// Plain OpenStreetMap street tiles
    Street,
    /// Esri world imagery
    Satellite,
    /// Carto light basemap
    Light,
}

impl TileStyle {
    /// Parse a style slug from the API path. Unknown slugs fall back to
    /// the street style, matching the dashboard's default.
    #[must_use]
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "satellite" => TileStyle::Satellite,
            "light" => TileStyle::Light,
            _ => TileStyle::Street,
        }
    }

    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            TileStyle::Street => "street",
            TileStyle::Satellite => "satellite",
            TileStyle::Light => "light",
        }
    }
}

fn raster_style(source_id: &str, tiles: Vec<&str>, attribution: &str) -> Value {
    json!({
        "version": 8,
        "sources": {
            source_id: {
                "type": "raster",
                "tiles": tiles,
                "tileSize": 256,
                "attribution": attribution,
            }
        },
        "layers": [
            {
                "id": source_id,
                "type": "raster",
                "source": source_id,
                "minzoom": 0,
                "maxzoom": 19,
            }
        ],
        "glyphs": GLYPHS_URL,
    })
}

/// Build the style document for the given base map
#[must_use]
pub fn style_document(style: TileStyle) -> Value {
    match style {
        TileStyle::Street => raster_style(
            "osm-tiles",
            vec!["https://tile.openstreetmap.org/{z}/{x}/{y}.png"],
            "© OpenStreetMap contributors",
        ),
        TileStyle::Satellite => raster_style(
            "satellite",
            vec![
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
            ],
            "© Esri",
        ),
        TileStyle::Light => raster_style(
            "carto-light",
            vec![
                "https://a.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png",
                "https://b.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png",
                "https://c.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png",
            ],
            "© OpenStreetMap © CARTO",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip() {
        assert_eq!(TileStyle::from_slug("satellite"), TileStyle::Satellite);
        assert_eq!(TileStyle::from_slug("light"), TileStyle::Light);
        assert_eq!(TileStyle::from_slug("street"), TileStyle::Street);
        // Unknown slugs fall back to the street default
        assert_eq!(TileStyle::from_slug("cyberpunk"), TileStyle::Street);
    }

    #[test]
    fn test_street_style_document() {
        let doc = style_document(TileStyle::Street);
        assert_eq!(doc["version"], 8);
        assert_eq!(doc["sources"]["osm-tiles"]["tileSize"], 256);
        let tiles = doc["sources"]["osm-tiles"]["tiles"].as_array().unwrap();
        assert!(tiles[0].as_str().unwrap().contains("{z}/{x}/{y}"));
    }

    #[test]
    fn test_light_style_has_three_subdomains() {
        let doc = style_document(TileStyle::Light);
        let tiles = doc["sources"]["carto-light"]["tiles"].as_array().unwrap();
        assert_eq!(tiles.len(), 3);
    }
}
