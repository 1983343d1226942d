//! Assistant module
//!
//! The text-query surface of the dashboard: a static knowledge base and
//! the keyword-matching responder that answers from it.

pub mod knowledge;
pub mod responder;

pub use knowledge::{FAQ, REGIONS, Region, STATISTICS};
pub use responder::{MAP_INTENT_KEYWORDS, QueryResponse, respond};
