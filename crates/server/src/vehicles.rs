//! Vehicle API endpoints

use api_types::vehicle::{VehicleNew, VehicleView};
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    ServerError,
    extract::{ApiJson, ApiPath},
    server::ServerState,
};

fn map_vehicle(vehicle: engine::Vehicle) -> VehicleView {
    VehicleView {
        id: vehicle.id,
        name: vehicle.name,
        model: vehicle.model,
        manufacturer: vehicle.manufacturer,
        vehicle_class: vehicle.vehicle_class,
        cost_in_credits: vehicle.cost_in_credits,
        crew: vehicle.crew,
        passengers: vehicle.passengers,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<VehicleNew>,
) -> Result<(StatusCode, Json<VehicleView>), ServerError> {
    let vehicle = state
        .engine
        .create_vehicle(engine::VehicleCmd {
            name: payload.name,
            model: payload.model,
            manufacturer: payload.manufacturer,
            vehicle_class: payload.vehicle_class,
            cost_in_credits: payload.cost_in_credits,
            crew: payload.crew,
            passengers: payload.passengers,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_vehicle(vehicle))))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<VehicleView>>, ServerError> {
    let vehicles = state
        .engine
        .vehicles()
        .await?
        .into_iter()
        .map(map_vehicle)
        .collect();
    Ok(Json(vehicles))
}

pub async fn get(
    State(state): State<ServerState>,
    ApiPath(name): ApiPath<String>,
) -> Result<Json<VehicleView>, ServerError> {
    let vehicle = state.engine.vehicle_by_name(&name).await?;
    Ok(Json(map_vehicle(vehicle)))
}
