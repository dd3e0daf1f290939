use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};

use models::tour_package;
use service::{crud::CrudService, repository::seaorm::TourPackageRepository};

use crate::errors::{map_write_error, JsonApiError};
use crate::routes::ServerState;

fn service(state: &ServerState) -> CrudService<TourPackageRepository> {
    CrudService::new(TourPackageRepository { db: state.db.clone() })
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<tour_package::Model>>, JsonApiError> {
    match service(&state).find_all().await {
        Ok(list) => {
            info!(count = list.len(), "list tour packages");
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
    Json(input): Json<tour_package::Model>,
) -> Result<Json<tour_package::Model>, JsonApiError> {
    if let Err(v) = tour_package::validate(&input) {
        return Err(JsonApiError::validation(v));
    }
    // A client-supplied identity is never honored on create.
    let mut input = input;
    input.id = 0;
    match service(&state).save(input).await {
        Ok(m) => {
            info!(id = m.id, package_name = %m.package_name, "created tour package");
            Ok(Json(m))
        }
        Err(e) => Err(map_write_error(e, "Create Failed")),
    }
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<tour_package::Model>, StatusCode> {
    match service(&state).find_by_id(id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<tour_package::Model>,
) -> Result<Json<tour_package::Model>, JsonApiError> {
    if let Err(v) = tour_package::validate(&input) {
        return Err(JsonApiError::validation(v));
    }
    match service(&state).update(id, input).await {
        Ok(Some(m)) => {
            info!(id = m.id, "updated tour package");
            Ok(Json(m))
        }
        Ok(None) => Err(JsonApiError::not_found()),
        Err(e) => Err(map_write_error(e, "Update Failed")),
    }
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> StatusCode {
    match service(&state).delete(id).await {
        Ok(()) => {
            info!(id, "deleted tour package");
            StatusCode::NO_CONTENT
        }
        Err(e) => {
            error!(err = %e, "delete tour package failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
