use axum::{
    Router, ServiceExt,
    extract::Request,
    routing::{get, post},
};
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use std::sync::Arc;

use crate::{characters, favorites, planets, sitemap, user, vehicles};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// The served application: the route table behind trailing-slash trimming,
/// so `/user/` answers like `/user`.
pub type App = NormalizePath<Router>;

/// Build the full route table on top of `engine`.
pub fn router(engine: Engine) -> App {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    let routes = Router::new()
        .route("/", get(sitemap::sitemap))
        .route("/user", post(user::create).get(user::list))
        .route(
            "/user/{id}",
            get(user::get).put(user::update).delete(user::delete),
        )
        .route("/user/{id}/favorites", get(user::favorites))
        .route("/characters", post(characters::create).get(characters::list))
        .route("/characters/{name}", get(characters::get))
        .route("/planets", post(planets::create).get(planets::list))
        .route("/planets/{name}", get(planets::get))
        .route("/vehicles", post(vehicles::create).get(vehicles::list))
        .route("/vehicles/{name}", get(vehicles::get))
        .route("/favorites", post(favorites::create).get(favorites::list))
        .route(
            "/favorites/{id}",
            get(favorites::get).delete(favorites::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Path rewriting has to happen before routing, so it wraps the router.
    NormalizePathLayer::trim_trailing_slash().layer(routes)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let app = router(engine);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
