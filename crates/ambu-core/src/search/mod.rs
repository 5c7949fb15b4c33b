//! Clinic phone lookup: request, wire payload, classification.

pub mod classifier;
pub mod model;
pub mod service;

pub use classifier::{NOT_FOUND_SENTINEL, OFF_TOPIC_SENTINEL, SearchPayload, classify};
pub use model::{Consensus, Engine, SearchRequest, SearchResult, SourceDetail};
pub use service::LookupGateway;
