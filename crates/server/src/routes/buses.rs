use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};

use models::bus;
use service::{crud::CrudService, repository::seaorm::BusRepository};

use crate::errors::{map_write_error, JsonApiError};
use crate::routes::ServerState;

fn service(state: &ServerState) -> CrudService<BusRepository> {
    CrudService::new(BusRepository { db: state.db.clone() })
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<bus::Model>>, JsonApiError> {
    match service(&state).find_all().await {
        Ok(list) => {
            info!(count = list.len(), "list buses");
            Ok(Json(list))
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
    Json(input): Json<bus::Model>,
) -> Result<Json<bus::Model>, JsonApiError> {
    if let Err(v) = bus::validate(&input) {
        return Err(JsonApiError::validation(v));
    }
    info!(bus_number = %input.bus_number, "bus_create_request");
    match service(&state).save(input).await {
        Ok(m) => {
            info!(id = m.id, bus_number = %m.bus_number, "created bus");
            Ok(Json(m))
        }
        Err(e) => Err(map_write_error(e, "Create Failed")),
    }
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<bus::Model>, StatusCode> {
    match service(&state).find_by_id(id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<bus::Model>,
) -> Result<Json<bus::Model>, JsonApiError> {
    if let Err(v) = bus::validate(&input) {
        return Err(JsonApiError::validation(v));
    }
    match service(&state).update(id, input).await {
        Ok(Some(m)) => {
            info!(id = m.id, "updated bus");
            Ok(Json(m))
        }
        Ok(None) => Err(JsonApiError::not_found()),
        Err(e) => Err(map_write_error(e, "Update Failed")),
    }
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> StatusCode {
    match service(&state).delete(id).await {
        Ok(()) => {
            info!(id, "deleted bus");
            StatusCode::NO_CONTENT
        }
        Err(e) => {
            error!(err = %e, "delete bus failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
