//! Planet API endpoints

use api_types::planet::{PlanetNew, PlanetView};
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    ServerError,
    extract::{ApiJson, ApiPath},
    server::ServerState,
};

fn map_planet(planet: engine::Planet) -> PlanetView {
    PlanetView {
        id: planet.id,
        name: planet.name,
        climate: planet.climate,
        terrain: planet.terrain,
        population: planet.population,
        diameter: planet.diameter,
        gravity: planet.gravity,
        rotation_period: planet.rotation_period,
        orbital_period: planet.orbital_period,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<PlanetNew>,
) -> Result<(StatusCode, Json<PlanetView>), ServerError> {
    let planet = state
        .engine
        .create_planet(engine::PlanetCmd {
            name: payload.name,
            climate: payload.climate,
            terrain: payload.terrain,
            population: payload.population,
            diameter: payload.diameter,
            gravity: payload.gravity,
            rotation_period: payload.rotation_period,
            orbital_period: payload.orbital_period,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_planet(planet))))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PlanetView>>, ServerError> {
    let planets = state
        .engine
        .planets()
        .await?
        .into_iter()
        .map(map_planet)
        .collect();
    Ok(Json(planets))
}

pub async fn get(
    State(state): State<ServerState>,
    ApiPath(name): ApiPath<String>,
) -> Result<Json<PlanetView>, ServerError> {
    let planet = state.engine.planet_by_name(&name).await?;
    Ok(Json(map_planet(planet)))
}
