use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Backpacking,
    Leisure,
    Business,
}

/// A stored trip. Journey dates are kept as plain strings, matching what
/// clients submit; `created_at`/`updated_at` are real BSON datetimes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    #[serde(rename = "_id")]
    pub id: String,
    pub trip_name: String,
    pub start_date: String,
    pub end_date: String,
    pub places_visited: Vec<String>,
    pub total_cost: i64,
    pub trip_type: TripType,
    pub experience: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    pub fn new(
        trip_name: String,
        start_date: String,
        end_date: String,
        places_visited: Vec<String>,
        total_cost: i64,
        trip_type: TripType,
        experience: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            trip_name,
            start_date,
            end_date,
            places_visited,
            total_cost,
            trip_type,
            experience,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trip {
        Trip::new(
            "Andes crossing".to_string(),
            "2026-01-10".to_string(),
            "2026-01-24".to_string(),
            vec!["Mendoza".to_string(), "Santiago".to_string()],
            1800,
            TripType::Backpacking,
            None,
        )
    }

    #[test]
    fn new_trip_gets_a_uuid_id() {
        let trip = sample();
        assert!(Uuid::parse_str(&trip.id).is_ok());
    }

    #[test]
    fn new_trip_timestamps_match() {
        let trip = sample();
        assert_eq!(trip.created_at, trip.updated_at);
    }

    #[test]
    fn trip_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TripType::Leisure).unwrap(),
            "\"leisure\""
        );
    }
}
