//! Domain data structures for disposal guidance, facilities, and searches.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Material class an item is made of.
pub enum MaterialCategory {
    /// Plastics, including bottles, bags, and containers.
    Plastic,
    /// Paper and cardboard.
    Paper,
    /// Aluminum, tin, and steel.
    Metal,
    /// Bottles, jars, and other glass.
    Glass,
    /// Devices requiring an e-waste program.
    Electronics,
    /// Batteries, bulbs, and other special handling items.
    Hazardous,
    /// Material could not be determined.
    Unknown,
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            MaterialCategory::Plastic => "plastic",
            MaterialCategory::Paper => "paper",
            MaterialCategory::Metal => "metal",
            MaterialCategory::Glass => "glass",
            MaterialCategory::Electronics => "electronics",
            MaterialCategory::Hazardous => "hazardous",
            MaterialCategory::Unknown => "unknown",
        };
        write!(formatter, "{slug}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Disposal guidance produced for a single label.
pub struct GuidanceResult {
    /// Whether the item can go into a recycling stream.
    pub recyclable: bool,
    /// Material class the item was matched to.
    pub category: MaterialCategory,
    /// Human-readable disposal instructions.
    pub instructions: String,
    /// Match certainty in `[0, 1]`. `1.0` is an exact catalog hit,
    /// `0.0` means no usable match was found.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a facility within its directory.
pub struct FacilityId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Kind of disposal service a facility offers.
pub enum FacilityType {
    /// General curbside-stream recycling.
    Recycling,
    /// Household hazardous waste.
    Hazardous,
    /// Electronics and e-waste.
    Electronic,
    /// Organic and yard waste.
    Composting,
}

impl fmt::Display for FacilityType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            FacilityType::Recycling => "recycling",
            FacilityType::Hazardous => "hazardous",
            FacilityType::Electronic => "electronic",
            FacilityType::Composting => "composting",
        };
        write!(formatter, "{slug}")
    }
}

impl FromStr for FacilityType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "recycling" => Ok(FacilityType::Recycling),
            "hazardous" => Ok(FacilityType::Hazardous),
            "electronic" => Ok(FacilityType::Electronic),
            "composting" => Ok(FacilityType::Composting),
            other => Err(format!("unknown facility type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Coarse service region of a facility.
pub enum Region {
    /// Northern part of the covered state.
    Northern,
    /// Southern part of the covered state.
    Southern,
}

impl fmt::Display for Region {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            Region::Northern => "northern",
            Region::Southern => "southern",
        };
        write!(formatter, "{slug}")
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "northern" => Ok(Region::Northern),
            "southern" => Ok(Region::Southern),
            other => Err(format!("unknown region: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A disposal or recycling location supplied by a directory.
pub struct FacilityRecord {
    /// Unique identifier within the directory.
    pub id: FacilityId,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City name.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Postal code as supplied. Only well-formed 5-digit codes
    /// participate in zip-exact matching.
    pub zip_code: String,
    /// Kind of service offered.
    pub facility_type: FacilityType,
    /// Service region.
    pub region: Region,
    /// Materials the facility accepts, as free text.
    pub accepted_materials: Vec<String>,
    /// Contact phone number, if listed.
    pub phone: Option<String>,
    /// Opening hours, if listed.
    pub hours: Option<String>,
    /// Free-form notes such as residency requirements.
    pub notes: Option<String>,
}

impl FacilityRecord {
    /// Postal code usable for exact matching, or `None` when the stored
    /// code is not exactly five ASCII digits.
    #[must_use]
    pub fn zip_exact(&self) -> Option<&str> {
        let well_formed = self.zip_code.len() == 5
            && self.zip_code.chars().all(|digit| digit.is_ascii_digit());
        well_formed.then_some(self.zip_code.as_str())
    }
}

#[derive(Debug, Clone, Default)]
/// Hard constraints applied before any relevance scoring.
pub struct SearchFilters {
    /// Restrict to one facility type. `None` keeps every type.
    pub facility_type: Option<FacilityType>,
    /// Restrict to one region. `None` keeps every region.
    pub region: Option<Region>,
    /// Materials the facility must accept, all of them.
    pub required_materials: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// One facility search as entered by the user.
pub struct SearchQuery {
    /// Free-text search term, possibly empty.
    pub term: String,
    /// Exact postal code constraint.
    pub zip_code: Option<String>,
    /// Structural filters.
    pub filters: SearchFilters,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a facility directory known to sortera.
pub struct DirectoryId(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Metadata describing a facility directory and its display name.
pub struct DirectoryMeta {
    /// Unique identifier.
    pub id: DirectoryId,
    /// Human-friendly name of the covered area.
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Outcome of one image scan after label selection and resolution.
pub struct ScanReport {
    /// Label chosen from the detector or classifier candidates.
    pub label: String,
    /// Score the winning candidate was detected with.
    pub detection_score: f64,
    /// Disposal guidance resolved for the label.
    pub guidance: GuidanceResult,
    /// When the scan completed.
    pub timestamp: DateTime<Utc>,
}
