//! Map view adapter
//!
//! The server side of the external map widget boundary: camera commands,
//! tile style documents, and the marker layer. Tile fetching and the
//! actual animations belong to the mapping library on the client.

pub mod camera;
pub mod markers;
pub mod tiles;

pub use camera::{FlyTo, focus_on, reset_view};
pub use markers::{Marker, MarkerColors, all_markers, colors_for};
pub use tiles::{MAP_LOAD_TIMEOUT_SECONDS, TileStyle, style_document};
