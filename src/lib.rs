//! `CityAtlas` - Geospatial intelligence dashboard for Hitech City
//!
//! This library provides the backend for the district dashboard: a
//! keyword-matching query responder over a static knowledge base, the
//! map-view adapter contract (fly-to commands, tile styles, markers),
//! pre-baked analytics datasets, and the session state that composes
//! the three views.

pub mod analytics;
pub mod api;
pub mod assistant;
pub mod config;
pub mod error;
pub mod landmarks;
pub mod map;
pub mod models;
pub mod session;
pub mod web;

// Re-export core types for public API
pub use assistant::{QueryResponse, respond};
pub use config::AtlasConfig;
pub use error::AtlasError;
pub use map::{FlyTo, TileStyle};
pub use models::{CameraConfig, Category, ChatMessage, Landmark, Role};
pub use session::{Session, View};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AtlasError>;
