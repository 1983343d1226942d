//! Camera commands for the map surface
//!
//! The server never animates anything itself; it hands the client a
//! fly-to command and the mapping widget owns the transition. A new
//! command supersedes an in-flight one.

use serde::{Deserialize, Serialize};

use crate::landmarks::{self, DISTRICT_CENTER};

/// Animation duration when flying to a landmark
pub const LANDMARK_FLY_DURATION_MS: u64 = 3000;
/// Animation duration when resetting to the default view
pub const RESET_FLY_DURATION_MS: u64 = 2000;

/// A fire-and-forget camera animation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyTo {
    /// Target center as (longitude, latitude)
    pub center: [f64; 2],
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    pub duration_ms: u64,
}

/// Build the fly-to command for a landmark id.
///
/// Returns `None` for unknown ids so the focus operation degrades to a
/// no-op instead of an error.
#[must_use]
pub fn focus_on(landmark_id: &str) -> Option<FlyTo> {
    let landmark = landmarks::by_id(landmark_id)?;
    Some(FlyTo {
        center: landmark.coordinates,
        zoom: landmark.camera.zoom,
        pitch: landmark.camera.pitch,
        bearing: landmark.camera.bearing,
        duration_ms: LANDMARK_FLY_DURATION_MS,
    })
}

/// The fixed default view over the district center
#[must_use]
pub fn reset_view() -> FlyTo {
    FlyTo {
        center: DISTRICT_CENTER,
        zoom: 14.5,
        pitch: 60.0,
        bearing: -20.0,
        duration_ms: RESET_FLY_DURATION_MS,
    }
}
