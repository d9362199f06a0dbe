//! Facility directory provider for California disposal locations.
//!
//! Two ports are available: an HTTP port that pulls facility documents
//! from a remote directory endpoint, and an offline port serving the
//! bundled seed records for use without network access.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use sortera_core::{
    model::{DirectoryId, DirectoryMeta, FacilityId, FacilityRecord},
    plugin::DirectoryPlugin,
    ports::{DirectoryPort, PortError},
};

mod seed;

pub use seed::seed_facilities;

/// Response wrapper from `GET /facilities`.
#[derive(Debug, Deserialize)]
struct FacilitiesResponse {
    data: Vec<FacilityDoc>,
}

/// Single facility document as stored in the remote directory.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FacilityDoc {
    id: String,
    name: String,
    address: String,
    city: String,
    state: String,
    zip_code: String,

    #[serde(rename = "type")]
    kind: String,
    region: String,

    #[serde(default)]
    accepted_materials: Vec<String>,

    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    hours: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

/// HTTP-backed directory port for the California facility endpoint.
pub struct CaliforniaDirectoryPort {
    client: Client,
    base_url: String,
    meta: DirectoryMeta,
}

impl CaliforniaDirectoryPort {
    /// Create a new directory port bound to the given HTTP client and
    /// directory base URL.
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            meta: directory_meta(),
        }
    }
}

#[async_trait]
impl DirectoryPort for CaliforniaDirectoryPort {
    fn directory(&self) -> &DirectoryMeta {
        &self.meta
    }

    async fn facilities(&self) -> Result<Vec<FacilityRecord>, PortError> {
        let req = self
            .client
            .get(format!("{}/facilities", self.base_url))
            .query(&[("state", "CA")]);

        let resp = fetch_json::<FacilitiesResponse>(req).await?;

        let records = resp
            .data
            .into_iter()
            .filter_map(|doc| map_doc(&self.meta.id, doc))
            .collect();

        Ok(records)
    }
}

/// Offline directory port serving the bundled seed records.
pub struct SeedDirectoryPort {
    meta: DirectoryMeta,
    records: Vec<FacilityRecord>,
}

impl SeedDirectoryPort {
    /// Create a port over the bundled California seed data.
    #[must_use]
    pub fn new() -> Self {
        Self {
            meta: directory_meta(),
            records: seed_facilities(),
        }
    }
}

impl Default for SeedDirectoryPort {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryPort for SeedDirectoryPort {
    fn directory(&self) -> &DirectoryMeta {
        &self.meta
    }

    async fn facilities(&self) -> Result<Vec<FacilityRecord>, PortError> {
        Ok(self.records.clone())
    }
}

/// Build the plugin bundle for the HTTP-backed California directory.
#[must_use]
pub fn plugin(client: Client, base_url: impl Into<String>) -> DirectoryPlugin {
    DirectoryPlugin {
        meta: directory_meta(),
        port: Arc::new(CaliforniaDirectoryPort::new(client, base_url)),
    }
}

/// Build the plugin bundle for the offline seed directory.
#[must_use]
pub fn offline_plugin() -> DirectoryPlugin {
    DirectoryPlugin {
        meta: directory_meta(),
        port: Arc::new(SeedDirectoryPort::new()),
    }
}

fn directory_meta() -> DirectoryMeta {
    DirectoryMeta {
        id: DirectoryId(String::from("california")),
        name: String::from("California"),
    }
}

/// Map a remote document into a facility record.
///
/// Documents with an unrecognized type or region are skipped rather than
/// failing the whole fetch. Malformed zip codes are kept as supplied;
/// zip-exact matching excludes them downstream.
fn map_doc(directory: &DirectoryId, doc: FacilityDoc) -> Option<FacilityRecord> {
    let facility_type = match doc.kind.parse() {
        Ok(kind) => kind,
        Err(_) => {
            warn!(directory = %directory.0, id = %doc.id, kind = %doc.kind, "skipping facility with unknown type");
            return None;
        }
    };
    let region = match doc.region.parse() {
        Ok(region) => region,
        Err(_) => {
            warn!(directory = %directory.0, id = %doc.id, region = %doc.region, "skipping facility with unknown region");
            return None;
        }
    };

    Some(FacilityRecord {
        id: FacilityId(doc.id),
        name: doc.name,
        address: doc.address,
        city: doc.city,
        state: doc.state,
        zip_code: doc.zip_code,
        facility_type,
        region,
        accepted_materials: doc.accepted_materials,
        phone: doc.phone,
        hours: doc.hours,
        notes: doc.notes,
    })
}

// Small helper to fetch and decode JSON with status handling.
async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, PortError> {
    req.send()
        .await
        .map_err(PortError::from)?
        .error_for_status()
        .map_err(PortError::from)?
        .json()
        .await
        .map_err(PortError::from)
}

#[cfg(test)]
mod tests {
    use sortera_core::model::{FacilityType, Region, SearchFilters, SearchQuery};
    use sortera_core::ranker::rank;

    use super::*;

    fn doc(raw: &str) -> FacilityDoc {
        serde_json::from_str(raw).expect("valid document")
    }

    #[test]
    fn documents_map_to_records() {
        let parsed = doc(
            r#"{
                "id": "sf-recology",
                "name": "Recology San Francisco Transfer Station",
                "address": "501 Tunnel Ave",
                "city": "San Francisco",
                "state": "CA",
                "zipCode": "94134",
                "type": "recycling",
                "region": "northern",
                "acceptedMaterials": ["Paper", "Glass"],
                "phone": "(415) 330-1400",
                "notes": "Proof of residency required for certain services."
            }"#,
        );

        let record = map_doc(&directory_meta().id, parsed).expect("mapped record");
        assert_eq!(record.facility_type, FacilityType::Recycling);
        assert_eq!(record.region, Region::Northern);
        assert_eq!(record.zip_exact(), Some("94134"));
        assert_eq!(record.hours, None);
        assert_eq!(record.accepted_materials, vec!["Paper", "Glass"]);
    }

    #[test]
    fn unknown_type_or_region_is_skipped() {
        let bad_type = doc(
            r#"{
                "id": "x", "name": "X", "address": "1 St", "city": "Fresno",
                "state": "CA", "zipCode": "93701",
                "type": "landfill", "region": "northern"
            }"#,
        );
        assert!(map_doc(&directory_meta().id, bad_type).is_none());

        let bad_region = doc(
            r#"{
                "id": "y", "name": "Y", "address": "2 St", "city": "Fresno",
                "state": "CA", "zipCode": "93701",
                "type": "recycling", "region": "central"
            }"#,
        );
        assert!(map_doc(&directory_meta().id, bad_region).is_none());
    }

    #[test]
    fn malformed_zip_is_kept_but_not_zip_matchable() {
        let parsed = doc(
            r#"{
                "id": "z", "name": "Z", "address": "3 St", "city": "Fresno",
                "state": "CA", "zipCode": "9370",
                "type": "recycling", "region": "northern"
            }"#,
        );

        let record = map_doc(&directory_meta().id, parsed).expect("mapped record");
        assert_eq!(record.zip_code, "9370");
        assert_eq!(record.zip_exact(), None);
    }

    #[test]
    fn seed_records_are_well_formed() {
        let records = seed_facilities();
        assert!(records.len() >= 6);
        for record in &records {
            assert!(record.zip_exact().is_some(), "{}", record.name);
            assert!(!record.accepted_materials.is_empty(), "{}", record.name);
            assert_eq!(record.state, "CA");
        }
    }

    #[test]
    fn seed_records_rank_sensibly() {
        let records = seed_facilities();
        let query = SearchQuery {
            term: "electronics".to_owned(),
            zip_code: None,
            filters: SearchFilters::default(),
        };

        let ranked = rank(&records, &query);
        assert!(!ranked.is_empty());
        let top = ranked.first().expect("non-empty ranking");
        assert!(
            top.accepted_materials
                .iter()
                .any(|material| material.to_lowercase().contains("electronics"))
        );
    }

    #[tokio::test]
    async fn seed_port_serves_the_bundled_records() {
        let port = SeedDirectoryPort::new();
        assert_eq!(port.directory().id, directory_meta().id);

        let records = port.facilities().await.expect("seed fetch");
        assert_eq!(records.len(), seed_facilities().len());
    }
}
