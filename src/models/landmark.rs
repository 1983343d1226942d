//! Landmark model for district points of interest

use serde::{Deserialize, Serialize};

/// Broad classification of a landmark, used for marker styling
/// and filtering in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Tech,
    Retail,
    Lifestyle,
    Transport,
}

impl Category {
    /// Human readable label, matching the dashboard display text
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Retail => "Retail",
            Category::Lifestyle => "Lifestyle",
            Category::Transport => "Transport",
        }
    }
}

/// Camera parameters used for the fly-to animation onto a landmark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Camera pitch in degrees
    pub pitch: f64,
    /// Camera bearing in degrees
    pub bearing: f64,
    /// Map zoom level
    pub zoom: f64,
}

/// A named point of interest within the district
///
/// Landmarks are defined once as a static list and are never created
/// or destroyed at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Landmark {
    /// Stable slug identifier, e.g. `cyber-towers`
    pub id: String,
    /// Display name
    pub name: String,
    /// Longitude and latitude in decimal degrees
    pub coordinates: [f64; 2],
    /// Short textual description shown in popups and chat answers
    pub description: String,
    pub category: Category,
    /// Approximate building height in meters, where known
    pub height: Option<f64>,
    /// Camera used when flying to this landmark
    pub camera: CameraConfig,
}

impl Landmark {
    /// Longitude component of the coordinates
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    /// Latitude component of the coordinates
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    /// The id slug with separators replaced by spaces, for free-text matching
    #[must_use]
    pub fn id_as_words(&self) -> String {
        self.id.replace('-', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_as_words() {
        let landmark = Landmark {
            id: "cyber-towers".to_string(),
            name: "Cyber Towers".to_string(),
            coordinates: [78.3824, 17.4503],
            description: "test".to_string(),
            category: Category::Tech,
            height: Some(60.0),
            camera: CameraConfig {
                pitch: 65.0,
                bearing: -30.0,
                zoom: 16.5,
            },
        };
        assert_eq!(landmark.id_as_words(), "cyber towers");
        assert_eq!(landmark.longitude(), 78.3824);
        assert_eq!(landmark.latitude(), 17.4503);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Tech.label(), "Tech");
        assert_eq!(Category::Transport.label(), "Transport");
    }
}
