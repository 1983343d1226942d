//! Static landmark registry for the Hitech City district
//!
//! The landmark list is compiled in and built once at process start.
//! Everything downstream (the responder, the map adapter, the marker
//! layer) borrows from this single read-only table.

use std::sync::LazyLock;

use crate::models::{CameraConfig, Category, Landmark};

/// Map center coordinates for Hitech City, Hyderabad (longitude, latitude)
pub const DISTRICT_CENTER: [f64; 2] = [78.3915, 17.4483];

static LANDMARKS: LazyLock<Vec<Landmark>> = LazyLock::new(build_landmarks);

fn landmark(
    id: &str,
    name: &str,
    coordinates: [f64; 2],
    description: &str,
    category: Category,
    height: f64,
    camera: CameraConfig,
) -> Landmark {
    Landmark {
        id: id.to_string(),
        name: name.to_string(),
        coordinates,
        description: description.to_string(),
        category,
        height: Some(height),
        camera,
    }
}

fn build_landmarks() -> Vec<Landmark> {
    vec![
        landmark(
            "cyber-towers",
            "Cyber Towers",
            [78.3824, 17.4503],
            "The iconic symbol of IT Hyderabad, inaugurated in 1998.",
            Category::Tech,
            60.0,
            CameraConfig {
                pitch: 65.0,
                bearing: -30.0,
                zoom: 16.5,
            },
        ),
        landmark(
            "t-hub-2",
            "T-Hub 2.0",
            [78.3756, 17.4412],
            "Worlds largest innovation campus and startup incubator.",
            Category::Tech,
            45.0,
            CameraConfig {
                pitch: 50.0,
                bearing: 10.0,
                zoom: 17.0,
            },
        ),
        landmark(
            "mindspace",
            "Raheja Mindspace",
            [78.3865, 17.4435],
            "A massive IT SEZ housing global giants like Google and Amazon.",
            Category::Tech,
            80.0,
            CameraConfig {
                pitch: 70.0,
                bearing: 45.0,
                zoom: 15.8,
            },
        ),
        landmark(
            "gachibowli",
            "Gachibowli IT Corridor",
            [78.3486, 17.4227],
            "Major IT hub with numerous tech parks and corporate offices.",
            Category::Tech,
            70.0,
            CameraConfig {
                pitch: 60.0,
                bearing: 20.0,
                zoom: 15.5,
            },
        ),
        landmark(
            "financial-district",
            "Financial District",
            [78.3654, 17.4156],
            "Hyderabads emerging financial and business district.",
            Category::Tech,
            90.0,
            CameraConfig {
                pitch: 65.0,
                bearing: -15.0,
                zoom: 16.0,
            },
        ),
        landmark(
            "wipro-campus",
            "Wipro Campus",
            [78.3742, 17.4389],
            "Major Wipro development center in Hitech City.",
            Category::Tech,
            55.0,
            CameraConfig {
                pitch: 55.0,
                bearing: 30.0,
                zoom: 16.2,
            },
        ),
        landmark(
            "ikea-hyd",
            "IKEA Hyderabad",
            [78.3745, 17.4398],
            "Indias first IKEA store, a major retail landmark.",
            Category::Retail,
            30.0,
            CameraConfig {
                pitch: 45.0,
                bearing: 0.0,
                zoom: 16.5,
            },
        ),
        landmark(
            "inorbit-mall",
            "Inorbit Mall",
            [78.3912, 17.4344],
            "One of Hyderabads premier shopping and dining destinations.",
            Category::Retail,
            35.0,
            CameraConfig {
                pitch: 55.0,
                bearing: -20.0,
                zoom: 16.8,
            },
        ),
        landmark(
            "shilparamam",
            "Shilparamam",
            [78.3805, 17.4442],
            "Cultural village and crafts exhibition center.",
            Category::Lifestyle,
            25.0,
            CameraConfig {
                pitch: 50.0,
                bearing: -10.0,
                zoom: 16.5,
            },
        ),
        landmark(
            "hi-tech-metro",
            "Hitech City Metro",
            [78.3845, 17.4485],
            "Metro station connecting Hitech City to the rest of Hyderabad.",
            Category::Transport,
            20.0,
            CameraConfig {
                pitch: 50.0,
                bearing: 0.0,
                zoom: 17.0,
            },
        ),
    ]
}

/// All landmarks in declaration order
#[must_use]
pub fn all() -> &'static [Landmark] {
    &LANDMARKS
}

/// Look up a landmark by its id slug
#[must_use]
pub fn by_id(id: &str) -> Option<&'static Landmark> {
    LANDMARKS.iter().find(|l| l.id == id)
}

/// Find the first landmark whose name or spaced id is contained in the
/// lowercased query text
#[must_use]
pub fn find_in_text(text: &str) -> Option<&'static Landmark> {
    let lower = text.to_lowercase();
    LANDMARKS
        .iter()
        .find(|l| lower.contains(&l.name.to_lowercase()) || lower.contains(&l.id_as_words()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_complete() {
        assert_eq!(all().len(), 10);
        assert!(by_id("cyber-towers").is_some());
        assert!(by_id("no-such-place").is_none());
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let found = find_in_text("Show me CYBER TOWERS please").unwrap();
        assert_eq!(found.id, "cyber-towers");
    }

    #[test]
    fn test_find_by_spaced_id() {
        // "t hub 2" is the id "t-hub-2" with separators replaced
        let found = find_in_text("navigate to t hub 2").unwrap();
        assert_eq!(found.id, "t-hub-2");
    }

    #[test]
    fn test_all_ids_are_unique_slugs() {
        let mut ids: Vec<_> = all().iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all().len());
        for id in ids {
            assert!(!id.contains(' '));
            assert_eq!(id, id.to_lowercase());
        }
    }
}
