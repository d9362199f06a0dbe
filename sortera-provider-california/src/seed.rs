//! Bundled California facility records for offline use.

use sortera_core::model::{FacilityId, FacilityRecord, FacilityType, Region};

struct SeedRow {
    id: &'static str,
    name: &'static str,
    address: &'static str,
    city: &'static str,
    zip_code: &'static str,
    facility_type: FacilityType,
    region: Region,
    accepted_materials: &'static [&'static str],
    phone: Option<&'static str>,
    hours: Option<&'static str>,
    notes: Option<&'static str>,
}

const SEED: &[SeedRow] = &[
    SeedRow {
        id: "sf-recology",
        name: "Recology San Francisco Transfer Station",
        address: "501 Tunnel Ave",
        city: "San Francisco",
        zip_code: "94134",
        facility_type: FacilityType::Recycling,
        region: Region::Northern,
        accepted_materials: &[
            "Paper",
            "Cardboard",
            "Glass",
            "Metal",
            "Plastic",
            "Electronics",
            "Yard Waste",
        ],
        phone: Some("(415) 330-1400"),
        hours: Some("Mon-Fri: 6AM-6PM, Sat-Sun: 8AM-4PM"),
        notes: Some(
            "Residential and commercial recycling services. Proof of \
             residency required for certain services.",
        ),
    },
    SeedRow {
        id: "oak-davis-street",
        name: "Davis Street Resource Recovery Complex",
        address: "2615 Davis St",
        city: "San Leandro",
        zip_code: "94577",
        facility_type: FacilityType::Recycling,
        region: Region::Northern,
        accepted_materials: &["Paper", "Cardboard", "Glass", "Metal", "Plastic"],
        phone: Some("(510) 638-2303"),
        hours: Some("Mon-Sat: 7AM-5PM"),
        notes: None,
    },
    SeedRow {
        id: "sj-ewaste-collective",
        name: "San Jose E-Waste Collective",
        address: "1675 Rogers Ave",
        city: "San Jose",
        zip_code: "95112",
        facility_type: FacilityType::Electronic,
        region: Region::Northern,
        accepted_materials: &["Electronics", "Batteries", "Cell Phones", "Computers"],
        phone: Some("(408) 555-0164"),
        hours: Some("Tue-Sat: 9AM-5PM"),
        notes: Some("Free drop-off for households; fees apply for CRT monitors."),
    },
    SeedRow {
        id: "sac-hazmat-center",
        name: "Sacramento Household Hazardous Waste Center",
        address: "8491 Fruitridge Rd",
        city: "Sacramento",
        zip_code: "95826",
        facility_type: FacilityType::Hazardous,
        region: Region::Northern,
        accepted_materials: &["Paint", "Batteries", "Motor Oil", "Light Bulbs", "Pesticides"],
        phone: Some("(916) 555-0172"),
        hours: Some("Fri-Sun: 8:30AM-3:30PM"),
        notes: Some("Sacramento County residents only. Limit 15 gallons per visit."),
    },
    SeedRow {
        id: "la-griffith-recycling",
        name: "Griffith Park Recycling Center",
        address: "4730 Crystal Springs Dr",
        city: "Los Angeles",
        zip_code: "90027",
        facility_type: FacilityType::Recycling,
        region: Region::Southern,
        accepted_materials: &["Glass", "Metal", "Plastic", "Paper"],
        phone: Some("(323) 555-0147"),
        hours: Some("Daily: 8AM-4:30PM"),
        notes: None,
    },
    SeedRow {
        id: "sd-miramar-greenery",
        name: "Miramar Greenery Composting Facility",
        address: "5180 Convoy St",
        city: "San Diego",
        zip_code: "92111",
        facility_type: FacilityType::Composting,
        region: Region::Southern,
        accepted_materials: &["Yard Waste", "Food Scraps", "Clean Wood"],
        phone: Some("(858) 555-0119"),
        hours: Some("Mon-Sat: 7AM-4:30PM"),
        notes: Some("Compost and mulch available for self-loading."),
    },
    SeedRow {
        id: "lb-ewaste-depot",
        name: "Long Beach Electronics Recycling Depot",
        address: "2755 Orange Ave",
        city: "Long Beach",
        zip_code: "90806",
        facility_type: FacilityType::Electronic,
        region: Region::Southern,
        accepted_materials: &["Electronics", "Computers", "Televisions", "Batteries"],
        phone: Some("(562) 555-0183"),
        hours: Some("Wed-Sun: 10AM-6PM"),
        notes: None,
    },
];

/// The bundled California facility records.
#[must_use]
pub fn seed_facilities() -> Vec<FacilityRecord> {
    SEED.iter()
        .map(|row| FacilityRecord {
            id: FacilityId(row.id.to_owned()),
            name: row.name.to_owned(),
            address: row.address.to_owned(),
            city: row.city.to_owned(),
            state: "CA".to_owned(),
            zip_code: row.zip_code.to_owned(),
            facility_type: row.facility_type,
            region: row.region,
            accepted_materials: row
                .accepted_materials
                .iter()
                .map(|&material| material.to_owned())
                .collect(),
            phone: row.phone.map(str::to_owned),
            hours: row.hours.map(str::to_owned),
            notes: row.notes.map(str::to_owned),
        })
        .collect()
}
