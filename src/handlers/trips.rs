//! CRUD handlers for the trip resource. Thin passthrough to the trips
//! collection; every handler resolves the live store first and answers 503
//! while the database is not connected.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{self, doc};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};

use crate::dtos::{
    CreateTripRequest, TripListParams, TripListResponse, TripResponse, UpdateTripRequest,
};
use crate::error::AppError;
use crate::models::Trip;
use crate::services::MongoStore;
use crate::startup::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips).post(create_trip))
        .route("/:id", get(get_trip).put(update_trip).delete(delete_trip))
}

fn store(state: &AppState) -> Result<MongoStore, AppError> {
    state.storage.store().ok_or(AppError::ServiceUnavailable)
}

/// Page numbers come straight off the query string; saturate so a huge
/// page yields an empty tail instead of overflowing the skip.
fn pagination(params: &TripListParams) -> (u64, u64, u64) {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params.page_size.unwrap_or(20).clamp(1, 100);
    let skip = page.saturating_sub(1).saturating_mul(page_size);
    (page, page_size, skip)
}

pub async fn list_trips(
    State(state): State<AppState>,
    Query(params): Query<TripListParams>,
) -> Result<impl IntoResponse, AppError> {
    let store = store(&state)?;

    let (page, page_size, skip) = pagination(&params);

    let total = store.trips().count_documents(doc! {}, None).await?;

    let find_options = FindOptions::builder()
        .sort(doc! { "created_at": -1 })
        .skip(skip)
        .limit(page_size as i64)
        .build();

    let mut cursor = store.trips().find(doc! {}, find_options).await?;
    let mut trips = Vec::new();
    while let Some(trip) = cursor.try_next().await? {
        trips.push(TripResponse::from(trip));
    }

    let total_pages = (total as f64 / page_size as f64).ceil() as u64;

    Ok(Json(TripListResponse {
        trips,
        total,
        page,
        page_size,
        total_pages,
    }))
}

pub async fn create_trip(
    State(state): State<AppState>,
    Json(req): Json<CreateTripRequest>,
) -> Result<impl IntoResponse, AppError> {
    let store = store(&state)?;

    let trip = Trip::new(
        req.trip_name,
        req.start_date,
        req.end_date,
        req.places_visited,
        req.total_cost,
        req.trip_type,
        req.experience,
    );

    store.trips().insert_one(&trip, None).await?;

    Ok((StatusCode::CREATED, Json(TripResponse::from(trip))))
}

pub async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let store = store(&state)?;

    let trip = store
        .trips()
        .find_one(doc! { "_id": &id }, None)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("trip {} not found", id)))?;

    Ok(Json(TripResponse::from(trip)))
}

pub async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTripRequest>,
) -> Result<impl IntoResponse, AppError> {
    let store = store(&state)?;

    let mut update = bson::to_document(&req)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("invalid trip update: {}", e)))?;
    if update.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "no updatable fields in request body"
        )));
    }
    update.insert("updated_at", bson::DateTime::now());

    let options = FindOneAndUpdateOptions::builder()
        .return_document(ReturnDocument::After)
        .build();

    let trip = store
        .trips()
        .find_one_and_update(doc! { "_id": &id }, doc! { "$set": update }, options)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("trip {} not found", id)))?;

    Ok(Json(TripResponse::from(trip)))
}

pub async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let store = store(&state)?;

    let result = store.trips().delete_one(doc! { "_id": &id }, None).await?;
    if result.deleted_count == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!("trip {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u64>, page_size: Option<u64>) -> TripListParams {
        TripListParams { page, page_size }
    }

    #[test]
    fn pagination_defaults_to_first_page_of_twenty() {
        assert_eq!(pagination(&params(None, None)), (1, 20, 0));
    }

    #[test]
    fn pagination_clamps_page_size_and_floors_page() {
        let (page, page_size, skip) = pagination(&params(Some(0), Some(10_000)));
        assert_eq!(page, 1);
        assert_eq!(page_size, 100);
        assert_eq!(skip, 0);
    }

    #[test]
    fn huge_page_number_saturates_instead_of_overflowing() {
        let (page, page_size, skip) = pagination(&params(Some(u64::MAX), Some(20)));
        assert_eq!(page, u64::MAX);
        assert_eq!(page_size, 20);
        assert_eq!(skip, u64::MAX);
    }
}
