//! Typed document models for the crime database collections.
//!
//! The collections themselves are schemaless; these structs are the
//! shape writers and tests use. Field names match the stored wire
//! format (`DR_NO` in particular keeps its upper-case spelling).

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Administrative area a crime was reported in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaDoc {
    pub id: i32,
    pub name: String,
    pub reporting_district: i32,
}

/// Investigation status of a crime report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusDoc {
    pub code: String,
    pub description: String,
}

/// Where a crime occurred.
///
/// `coordinates` is a `[longitude, latitude]` pair, the layout the
/// `2dsphere` index expects. It is absent for reports without a usable
/// geocode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDoc {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<f64>>,
}

/// A reported incident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrimeDocument {
    /// Document id, assigned by the engine on insert
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Unique report number (indexed, unique)
    #[serde(rename = "DR_NO")]
    pub dr_no: i64,

    /// Date the crime was reported, MM/DD/YYYY as stored
    pub date_reported: String,

    /// Date the crime occurred (indexed descending)
    pub date_occurred: bson::DateTime,

    /// Time of day the crime occurred, 24h HHMM
    pub time_occurred: i32,

    pub area: AreaDoc,

    /// Crime classification code (indexed)
    pub crime_code: i32,

    pub crime_description: String,

    pub status: StatusDoc,

    /// Location, geo-indexed through `location.coordinates`
    pub location: LocationDoc,
}

/// A person associated with a crime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VictimDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Back-reference to the parent crime (indexed, not enforced)
    pub crime_id: ObjectId,

    pub age: Option<i32>,
    pub sex: Option<String>,
    pub descent: Option<String>,
}

/// A weapon associated with a crime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Back-reference to the parent crime (indexed, not enforced)
    pub crime_id: ObjectId,

    pub weapon_code: i32,
    pub weapon_description: Option<String>,
}

/// The officer behind an upvote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerDoc {
    /// Badge number (indexed)
    pub badge_number: String,
    pub name: String,
    /// Email address (indexed)
    pub email: String,
}

/// An officer's endorsement of a crime report.
///
/// Stored with a real BSON date in `upvote_date` so the TTL index can
/// expire it; a string date would never match the expiry sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpvoteDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Back-reference to the upvoted crime (indexed, not enforced)
    pub crime_id: ObjectId,

    pub officer: OfficerDoc,

    /// When the upvote was cast; drives TTL expiry (indexed)
    pub upvote_date: bson::DateTime,
}

impl UpvoteDocument {
    pub fn new(crime_id: ObjectId, officer: OfficerDoc, upvote_date: DateTime<Utc>) -> Self {
        Self { id: None, crime_id, officer, upvote_date: bson::DateTime::from_chrono(upvote_date) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::Bson;

    fn sample_crime() -> CrimeDocument {
        CrimeDocument {
            id: None,
            dr_no: 201_204_321,
            date_reported: "01/15/2020".to_string(),
            date_occurred: bson::DateTime::now(),
            time_occurred: 2130,
            area: AreaDoc { id: 12, name: "77th Street".to_string(), reporting_district: 1259 },
            crime_code: 510,
            crime_description: "VEHICLE - STOLEN".to_string(),
            status: StatusDoc { code: "IC".to_string(), description: "Invest Cont".to_string() },
            location: LocationDoc {
                address: "800 N ALAMEDA ST".to_string(),
                coordinates: Some(vec![-118.2387, 34.0505]),
            },
        }
    }

    #[test]
    fn crime_serializes_with_wire_field_names() {
        let doc = bson::to_document(&sample_crime()).unwrap();
        assert_eq!(doc.get_i64("DR_NO").unwrap(), 201_204_321);
        assert!(!doc.contains_key("_id"));
        assert!(matches!(doc.get("date_occurred"), Some(Bson::DateTime(_))));

        let coords = doc.get_document("location").unwrap().get_array("coordinates").unwrap();
        assert_eq!(coords, &[Bson::Double(-118.2387), Bson::Double(34.0505)]);
    }

    #[test]
    fn crime_without_geocode_omits_coordinates() {
        let mut crime = sample_crime();
        crime.location.coordinates = None;
        let doc = bson::to_document(&crime).unwrap();
        assert!(!doc.get_document("location").unwrap().contains_key("coordinates"));
    }

    #[test]
    fn upvote_date_is_a_bson_date() {
        let upvote = UpvoteDocument::new(
            ObjectId::new(),
            OfficerDoc {
                badge_number: "38471".to_string(),
                name: "J. Reyes".to_string(),
                email: "j.reyes@lapd.example".to_string(),
            },
            Utc::now(),
        );
        let doc = bson::to_document(&upvote).unwrap();
        assert!(matches!(doc.get("upvote_date"), Some(Bson::DateTime(_))));
        assert_eq!(doc.get_document("officer").unwrap().get_str("badge_number").unwrap(), "38471");
    }
}
