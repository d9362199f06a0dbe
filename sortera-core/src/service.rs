//! High-level service facade combining resolver, ranker, and directories.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::model::{DirectoryId, FacilityRecord, GuidanceResult, ScanReport, SearchQuery};
use crate::plugin::DirectoryRegistry;
use crate::ports::{Candidate, ClassifierPort, DetectorPort, PortError};
use crate::ranker::rank;
use crate::resolver::GuidanceResolver;

/// Minimum score a primary detector candidate must exceed to be used.
pub const DETECTOR_MIN_SCORE: f64 = 0.6;
/// Minimum score a secondary classifier candidate must exceed to be used.
pub const CLASSIFIER_MIN_SCORE: f64 = 0.7;

/// Public entry point for resolving labels and searching facilities.
pub struct SorteraService {
    resolver: GuidanceResolver,
    registry: Arc<DirectoryRegistry>,
}

impl SorteraService {
    /// Create a new service over a resolver and directory registry.
    #[must_use]
    pub fn new(resolver: GuidanceResolver, registry: Arc<DirectoryRegistry>) -> Self {
        Self { resolver, registry }
    }

    /// List all available directories and their display names.
    #[must_use]
    pub fn directories(&self) -> Vec<(DirectoryId, String)> {
        self.registry
            .directories()
            .into_iter()
            .map(|meta| (meta.id, meta.name))
            .collect()
    }

    /// The resolver backing this service.
    #[must_use]
    pub fn resolver(&self) -> &GuidanceResolver {
        &self.resolver
    }

    /// Resolve a free-text label into disposal guidance.
    #[must_use]
    pub fn resolve(&self, label: &str) -> GuidanceResult {
        let guidance = self.resolver.resolve(label);
        debug!(
            label,
            category = %guidance.category,
            confidence = guidance.confidence,
            "resolved label"
        );
        guidance
    }

    /// Search a directory's facilities, filtered and relevance-ordered.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the directory is unsupported or the
    /// provider call fails.
    pub async fn search_facilities(
        &self,
        directory: &DirectoryId,
        query: &SearchQuery,
    ) -> Result<Vec<FacilityRecord>, PortError> {
        let plugin = self.registry.plugin(directory)?;
        let facilities = plugin.port.facilities().await?;
        let ranked = rank(&facilities, query);
        debug!(
            directory = %directory.0,
            fetched = facilities.len(),
            ranked = ranked.len(),
            "searched facilities"
        );
        Ok(ranked)
    }

    /// Identify the object in an image and resolve its disposal guidance.
    ///
    /// The top detector candidate wins when its score exceeds
    /// [`DETECTOR_MIN_SCORE`]; otherwise the classifier is consulted and
    /// its top candidate wins above [`CLASSIFIER_MIN_SCORE`]. The
    /// classifier is never called when the detector is confident.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::BelowThreshold`] when neither backend produces
    /// a confident candidate, or a [`PortError`] when a backend call fails.
    pub async fn scan(
        &self,
        detector: &dyn DetectorPort,
        classifier: &dyn ClassifierPort,
        image: &[u8],
    ) -> Result<ScanReport, PortError> {
        let detections = detector.detect(image).await?;

        let chosen: Candidate = match detections
            .into_iter()
            .next()
            .filter(|candidate| candidate.score > DETECTOR_MIN_SCORE)
        {
            Some(candidate) => candidate,
            None => {
                debug!("detector below threshold, falling back to classifier");
                classifier
                    .classify(image)
                    .await?
                    .into_iter()
                    .next()
                    .filter(|candidate| candidate.score > CLASSIFIER_MIN_SCORE)
                    .ok_or(PortError::BelowThreshold)?
            }
        };

        let guidance = self.resolver.resolve(&chosen.label);
        debug!(
            label = %chosen.label,
            score = chosen.score,
            category = %guidance.category,
            "scan identified item"
        );

        Ok(ScanReport {
            label: chosen.label,
            detection_score: chosen.score,
            guidance,
            timestamp: Utc::now(),
        })
    }
}
