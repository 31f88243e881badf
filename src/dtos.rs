//! Request and response shapes for the trip routes.

use crate::models::{Trip, TripType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateTripRequest {
    pub trip_name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub places_visited: Vec<String>,
    #[serde(default)]
    pub total_cost: i64,
    pub trip_type: TripType,
    pub experience: Option<String>,
}

/// Partial update; only set fields are written. Serializes straight into
/// the `$set` document, so absent fields must not appear at all.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UpdateTripRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub places_visited: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_type: Option<TripType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TripListParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub id: String,
    pub trip_name: String,
    pub start_date: String,
    pub end_date: String,
    pub places_visited: Vec<String>,
    pub total_cost: i64,
    pub trip_type: TripType,
    pub experience: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            trip_name: trip.trip_name,
            start_date: trip.start_date,
            end_date: trip.end_date,
            places_visited: trip.places_visited,
            total_cost: trip.total_cost,
            trip_type: trip.trip_type,
            experience: trip.experience,
            created_at: trip.created_at,
            updated_at: trip.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TripListResponse {
    pub trips: Vec<TripResponse>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_serializes_to_empty_document() {
        let update = UpdateTripRequest::default();
        let doc = mongodb::bson::to_document(&update).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn update_only_carries_set_fields() {
        let update = UpdateTripRequest {
            trip_name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let doc = mongodb::bson::to_document(&update).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get_str("trip_name").unwrap(), "Renamed");
    }
}
