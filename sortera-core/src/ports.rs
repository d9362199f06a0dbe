//! Traits describing external collaborator capabilities and shared helper types.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;
use serde::{Deserialize, Serialize};

use crate::model::{DirectoryMeta, FacilityRecord};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to collaborator backends.
pub enum PortError {
    /// Network layer failed.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// No detection candidate met its confidence threshold.
    #[error("No candidate identified with sufficient confidence")]
    BelowThreshold,
    /// The requested directory has no registered plugin.
    #[error("Unsupported directory")]
    UnsupportedDirectory,
    /// Internal collaborator error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One labeled guess produced by a detector or classifier.
pub struct Candidate {
    /// Free-text label describing the object.
    pub label: String,
    /// Model confidence in `[0, 1]`.
    pub score: f64,
}

#[async_trait]
/// Trait for object-detection backends returning localized candidates.
pub trait DetectorPort: Send + Sync {
    /// Detect objects in the encoded image, best candidate first.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the backend request fails.
    async fn detect(&self, image: &[u8]) -> Result<Vec<Candidate>, PortError>;
}

#[async_trait]
/// Trait for whole-image classification backends.
pub trait ClassifierPort: Send + Sync {
    /// Classify the encoded image, best candidate first.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the backend request fails.
    async fn classify(&self, image: &[u8]) -> Result<Vec<Candidate>, PortError>;
}

#[async_trait]
/// Trait for facility directory backends.
pub trait DirectoryPort: Send + Sync {
    /// Metadata describing the directory served by this port.
    fn directory(&self) -> &DirectoryMeta;

    /// Fetch every facility record the directory holds.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the backend request fails.
    async fn facilities(&self) -> Result<Vec<FacilityRecord>, PortError>;
}
