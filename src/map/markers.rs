//! Marker descriptors for the landmark layer
//!
//! One marker per landmark, carrying the category color scheme and popup
//! content. The client places and styles the actual DOM elements.

use serde::Serialize;

use crate::landmarks;
use crate::models::Category;

/// Color scheme for a marker, keyed off the landmark category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerColors {
    pub background: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
}

/// Everything the client needs to render one landmark marker
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub landmark_id: &'static str,
    pub coordinates: [f64; 2],
    pub colors: MarkerColors,
    pub popup_title: &'static str,
    pub popup_body: &'static str,
    pub popup_tag: &'static str,
}

/// Category color mapping from the dashboard theme
#[must_use]
pub fn colors_for(category: Category) -> MarkerColors {
    match category {
        Category::Tech => MarkerColors {
            background: "#06b6d4",
            border: "#0891b2",
            shadow: "rgba(6, 182, 212, 0.8)",
        },
        Category::Retail => MarkerColors {
            background: "#a855f7",
            border: "#9333ea",
            shadow: "rgba(168, 85, 247, 0.8)",
        },
        Category::Lifestyle => MarkerColors {
            background: "#10b981",
            border: "#059669",
            shadow: "rgba(16, 185, 129, 0.8)",
        },
        Category::Transport => MarkerColors {
            background: "#f59e0b",
            border: "#d97706",
            shadow: "rgba(245, 158, 11, 0.8)",
        },
    }
}

/// Build the full marker layer, one entry per landmark in declaration order
#[must_use]
pub fn all_markers() -> Vec<Marker> {
    landmarks::all()
        .iter()
        .map(|l| Marker {
            landmark_id: l.id.as_str(),
            coordinates: l.coordinates,
            colors: colors_for(l.category),
            popup_title: l.name.as_str(),
            popup_body: l.description.as_str(),
            popup_tag: l.category.label(),
        })
        .collect()
}
