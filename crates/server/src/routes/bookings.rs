use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use models::booking;
use service::{
    booking_view::{self, BookingView},
    crud::CrudService,
    repository::seaorm::BookingRepository,
};

use crate::errors::{map_write_error, JsonApiError};
use crate::routes::ServerState;

/// Reference to a related entity, as nested JSON: `{"bus": {"id": 1}}`.
/// Extra fields of a fully embedded object are ignored.
#[derive(Debug, Deserialize, Serialize)]
pub struct EntityRef {
    pub id: i64,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub booking_date: Option<NaiveDate>,
    #[serde(default)]
    pub bus: Option<EntityRef>,
    #[serde(default)]
    pub tour_package: Option<EntityRef>,
    #[serde(default)]
    pub seats_booked: i32,
    #[serde(default)]
    pub seat_no: Option<String>,
}

fn service(state: &ServerState) -> CrudService<BookingRepository> {
    CrudService::new(BookingRepository { db: state.db.clone() })
}

/// Validate the payload and flatten the nested references into a row.
fn validate_and_build(input: BookingInput) -> Result<booking::Model, JsonApiError> {
    if let Err(v) = booking::validate(
        &input.customer_name,
        input.booking_date,
        input.bus.as_ref().map(|r| r.id),
        input.seats_booked,
        input.seat_no.as_deref(),
    ) {
        return Err(JsonApiError::validation(v));
    }
    // Both are present once validation passed.
    let (Some(booking_date), Some(bus)) = (input.booking_date, input.bus) else {
        return Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", None));
    };
    Ok(booking::Model {
        id: input.id,
        customer_name: input.customer_name,
        booking_date,
        bus_id: bus.id,
        tour_package_id: input.tour_package.map(|r| r.id),
        seats_booked: input.seats_booked,
        seat_no: input.seat_no,
    })
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<BookingView>>, JsonApiError> {
    let rows = match service(&state).find_all().await {
        Ok(rows) => rows,
        Err(e) => {
            return Err(JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "List Failed",
                Some(e.to_string()),
            ))
        }
    };
    match booking_view::load_all(&state.db, rows).await {
        Ok(views) => {
            info!(count = views.len(), "list bookings");
            Ok(Json(views))
        }
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "List Failed",
            Some(e.to_string()),
        )),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<BookingInput>,
) -> Result<Json<BookingView>, JsonApiError> {
    let row = validate_and_build(input)?;
    info!(bus_id = row.bus_id, seats_booked = row.seats_booked, "booking_create_request");
    let saved = match service(&state).save(row).await {
        Ok(m) => m,
        Err(e) => return Err(map_write_error(e, "Create Failed")),
    };
    match booking_view::load_one(&state.db, saved).await {
        Ok(view) => {
            info!(id = view.id, "created booking");
            Ok(Json(view))
        }
        Err(e) => Err(map_write_error(e, "Create Failed")),
    }
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<BookingView>, StatusCode> {
    match service(&state).find_by_id(id).await {
        Ok(Some(m)) => match booking_view::load_one(&state.db, m).await {
            Ok(view) => Ok(Json(view)),
            Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
        },
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<BookingInput>,
) -> Result<Json<BookingView>, JsonApiError> {
    let row = validate_and_build(input)?;
    let updated = match service(&state).update(id, row).await {
        Ok(Some(m)) => m,
        Ok(None) => return Err(JsonApiError::not_found()),
        Err(e) => return Err(map_write_error(e, "Update Failed")),
    };
    match booking_view::load_one(&state.db, updated).await {
        Ok(view) => {
            info!(id = view.id, "updated booking");
            Ok(Json(view))
        }
        Err(e) => Err(map_write_error(e, "Update Failed")),
    }
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> StatusCode {
    match service(&state).delete(id).await {
        Ok(()) => {
            info!(id, "deleted booking");
            StatusCode::NO_CONTENT
        }
        Err(e) => {
            error!(err = %e, "delete booking failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
