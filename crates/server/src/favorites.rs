//! Favorites API endpoints

use api_types::favorite::{FavoriteKind, FavoriteNew, FavoriteView};
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    ServerError,
    extract::{ApiJson, ApiPath},
    server::ServerState,
};

fn map_kind(kind: engine::FavoriteKind) -> FavoriteKind {
    match kind {
        engine::FavoriteKind::Character => FavoriteKind::Character,
        engine::FavoriteKind::Planet => FavoriteKind::Planet,
        engine::FavoriteKind::Vehicle => FavoriteKind::Vehicle,
    }
}

pub(crate) fn map_favorite(favorite: engine::Favorite) -> FavoriteView {
    FavoriteView {
        id: favorite.id,
        user_id: favorite.user_id,
        kind: map_kind(favorite.kind),
        item_id: favorite.item_id,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<FavoriteNew>,
) -> Result<(StatusCode, Json<FavoriteView>), ServerError> {
    let favorite = state
        .engine
        .create_favorite(engine::FavoriteCmd {
            user_id: payload.user_id,
            kind: match payload.kind {
                FavoriteKind::Character => engine::FavoriteKind::Character,
                FavoriteKind::Planet => engine::FavoriteKind::Planet,
                FavoriteKind::Vehicle => engine::FavoriteKind::Vehicle,
            },
            item_id: payload.item_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_favorite(favorite))))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<FavoriteView>>, ServerError> {
    let favorites = state
        .engine
        .favorites()
        .await?
        .into_iter()
        .map(map_favorite)
        .collect();
    Ok(Json(favorites))
}

pub async fn get(
    State(state): State<ServerState>,
    ApiPath(favorite_id): ApiPath<i32>,
) -> Result<Json<FavoriteView>, ServerError> {
    let favorite = state.engine.favorite(favorite_id).await?;
    Ok(Json(map_favorite(favorite)))
}

pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(favorite_id): ApiPath<i32>,
) -> Result<Json<&'static str>, ServerError> {
    state.engine.delete_favorite(favorite_id).await?;
    Ok(Json("favorite deleted"))
}
