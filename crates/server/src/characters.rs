//! Character API endpoints

use api_types::character::{CharacterNew, CharacterView};
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    ServerError,
    extract::{ApiJson, ApiPath},
    server::ServerState,
};

fn map_character(character: engine::Character) -> CharacterView {
    CharacterView {
        id: character.id,
        name: character.name,
        url: character.url,
        species: character.species,
        gender: character.gender,
        birth_year: character.birth_year,
        height: character.height,
        mass: character.mass,
        hair_color: character.hair_color,
        eye_color: character.eye_color,
        skin_color: character.skin_color,
        films: character.films,
        created: character.created,
        edited: character.edited,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<CharacterNew>,
) -> Result<(StatusCode, Json<CharacterView>), ServerError> {
    let character = state
        .engine
        .create_character(engine::CharacterCmd {
            name: payload.name,
            url: payload.url,
            species: payload.species,
            gender: payload.gender,
            birth_year: payload.birth_year,
            height: payload.height,
            mass: payload.mass,
            hair_color: payload.hair_color,
            eye_color: payload.eye_color,
            skin_color: payload.skin_color,
            films: payload.films,
            created: payload.created,
            edited: payload.edited,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_character(character))))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<CharacterView>>, ServerError> {
    let characters = state
        .engine
        .characters()
        .await?
        .into_iter()
        .map(map_character)
        .collect();
    Ok(Json(characters))
}

pub async fn get(
    State(state): State<ServerState>,
    ApiPath(name): ApiPath<String>,
) -> Result<Json<CharacterView>, ServerError> {
    let character = state.engine.character_by_name(&name).await?;
    Ok(Json(map_character(character)))
}
