//! Data models for the CityAtlas application
//!
//! This module contains the core domain models organized by concern:
//! - Landmark: district points of interest with camera configuration
//! - Chat: conversation log entries for the assistant view

pub mod chat;
pub mod landmark;

// Re-export all public types for convenient access
pub use chat::{ChatMessage, GroundingLink, Role};
pub use landmark::{CameraConfig, Category, Landmark};
