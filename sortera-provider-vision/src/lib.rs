//! HTTP ports for the external object detector and image classifier.
//!
//! Both backends accept raw image bytes and answer with labeled
//! candidates. The models themselves are opaque; only the label/score
//! contract is modeled here. Responses are re-sorted best-first on
//! receipt so callers can rely on `first()` being the top candidate.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use sortera_core::ports::{Candidate, ClassifierPort, DetectorPort, PortError};

/// Response wrapper from `/detect` and `/classify`.
#[derive(Debug, Deserialize)]
struct CandidatesResponse {
    data: Vec<CandidateDoc>,
}

/// Single candidate as returned by the inference backends.
#[derive(Debug, Deserialize)]
struct CandidateDoc {
    label: String,
    score: f64,
}

/// Object-detection port posting images to `{base}/detect`.
pub struct VisionDetectorPort {
    client: Client,
    base_url: String,
}

impl VisionDetectorPort {
    /// Create a detector port bound to the given HTTP client and base URL.
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl DetectorPort for VisionDetectorPort {
    async fn detect(&self, image: &[u8]) -> Result<Vec<Candidate>, PortError> {
        let candidates =
            post_image(&self.client, &format!("{}/detect", self.base_url), image).await?;
        debug!(count = candidates.len(), "detector returned candidates");
        Ok(candidates)
    }
}

/// Whole-image classification port posting images to `{base}/classify`.
pub struct VisionClassifierPort {
    client: Client,
    base_url: String,
}

impl VisionClassifierPort {
    /// Create a classifier port bound to the given HTTP client and base URL.
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ClassifierPort for VisionClassifierPort {
    async fn classify(&self, image: &[u8]) -> Result<Vec<Candidate>, PortError> {
        let candidates =
            post_image(&self.client, &format!("{}/classify", self.base_url), image).await?;
        debug!(count = candidates.len(), "classifier returned candidates");
        Ok(candidates)
    }
}

async fn post_image(client: &Client, url: &str, image: &[u8]) -> Result<Vec<Candidate>, PortError> {
    let resp: CandidatesResponse = client
        .post(url)
        .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
        .body(image.to_vec())
        .send()
        .await
        .map_err(PortError::from)?
        .error_for_status()
        .map_err(PortError::from)?
        .json()
        .await
        .map_err(PortError::from)?;

    Ok(best_first(resp.data))
}

/// Order candidates by descending score, dropping ones outside `[0, 1]`.
fn best_first(docs: Vec<CandidateDoc>) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = docs
        .into_iter()
        .filter(|doc| (0.0..=1.0).contains(&doc.score))
        .map(|doc| Candidate {
            label: doc.label,
            score: doc.score,
        })
        .collect();

    candidates.sort_by(|left, right| right.score.total_cmp(&left.score));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_are_reordered_best_first() {
        let parsed: CandidatesResponse = serde_json::from_str(
            r#"{"data": [
                {"label": "cup", "score": 0.41},
                {"label": "bottle", "score": 0.87},
                {"label": "can", "score": 0.55}
            ]}"#,
        )
        .expect("valid response");

        let ordered = best_first(parsed.data);
        let labels: Vec<&str> = ordered
            .iter()
            .map(|candidate| candidate.label.as_str())
            .collect();
        assert_eq!(labels, vec!["bottle", "can", "cup"]);
    }

    #[test]
    fn out_of_range_scores_are_dropped() {
        let docs = vec![
            CandidateDoc {
                label: "bottle".to_owned(),
                score: 1.3,
            },
            CandidateDoc {
                label: "can".to_owned(),
                score: -0.1,
            },
            CandidateDoc {
                label: "jar".to_owned(),
                score: 0.9,
            },
        ];

        let ordered = best_first(docs);
        assert_eq!(ordered.len(), 1);
        assert_eq!(
            ordered.first().map(|candidate| candidate.label.as_str()),
            Some("jar")
        );
    }
}
