//! Core types and service wiring for the sortera disposal guidance engine.

/// Built-in guidance reference table and its order-preserving container.
pub mod catalog;
/// Domain models for guidance results, facilities, and search queries.
pub mod model;
/// Text canonicalization shared by the resolver and the ranker.
pub mod normalize;
/// Registry and helpers for plugging facility directories into the service.
pub mod plugin;
/// Traits describing the detector, classifier, and directory interfaces.
pub mod ports;
/// Relevance scoring and ordering for facility search.
pub mod ranker;
/// Label-to-guidance resolution with fuzzy fallback.
pub mod resolver;
/// High-level service facade used by clients.
pub mod service;

pub use catalog::*;
pub use model::*;
pub use plugin::*;
pub use ports::*;
pub use ranker::*;
pub use resolver::*;
pub use service::*;
