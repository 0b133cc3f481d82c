//! User API endpoints

use api_types::{
    favorite::FavoriteView,
    user::{UserNew, UserUpdate, UserView},
};
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    ServerError,
    extract::{ApiJson, ApiPath},
    favorites::map_favorite,
    server::ServerState,
};

fn map_user(user: engine::User) -> UserView {
    UserView {
        id: user.id,
        username: user.username,
        email: user.email,
    }
}

/// Handle requests for registering a new user
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<UserNew>,
) -> Result<(StatusCode, Json<UserView>), ServerError> {
    let user = state
        .engine
        .create_user(engine::UserCmd {
            username: payload.username,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_user(user))))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<UserView>>, ServerError> {
    let users = state
        .engine
        .users()
        .await?
        .into_iter()
        .map(map_user)
        .collect();
    Ok(Json(users))
}

pub async fn get(
    State(state): State<ServerState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<Json<UserView>, ServerError> {
    let user = state.engine.user(user_id).await?;
    Ok(Json(map_user(user)))
}

/// Handle partial updates: only the fields in the body are overwritten
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(user_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UserUpdate>,
) -> Result<Json<UserView>, ServerError> {
    if payload.is_empty() {
        return Err(ServerError::Generic(
            "provide at least one of username, email or password".to_string(),
        ));
    }

    let user = state
        .engine
        .update_user(
            user_id,
            engine::UserUpdateCmd {
                username: payload.username,
                email: payload.email,
                password: payload.password,
            },
        )
        .await?;
    Ok(Json(map_user(user)))
}

pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<Json<&'static str>, ServerError> {
    state.engine.delete_user(user_id).await?;
    tracing::info!(user_id, "user deleted");
    Ok(Json("user deleted"))
}

/// Handle requests for listing the favorites of one user
pub async fn favorites(
    State(state): State<ServerState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<Json<Vec<FavoriteView>>, ServerError> {
    let favorites = state
        .engine
        .user_favorites(user_id)
        .await?
        .into_iter()
        .map(map_favorite)
        .collect();
    Ok(Json(favorites))
}
