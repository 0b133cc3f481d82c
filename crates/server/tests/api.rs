use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use migration::MigratorTrait;
use sea_orm::Database;
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tower::ServiceExt;

async fn engine() -> engine::Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    engine::Engine::builder()
        .database(db)
        .build()
        .await
        .unwrap()
}

async fn app() -> server::App {
    server::router(engine().await)
}

async fn send(app: &server::App, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn luke() -> Value {
    json!({ "username": "luke", "email": "luke@x.com", "password": "p" })
}

fn luke_character() -> Value {
    json!({
        "name": "Luke Skywalker",
        "url": "https://swapi.dev/api/people/1/",
        "species": "human",
        "gender": "male",
        "birthYear": "19BBY",
        "height": "172",
        "mass": "77",
        "hairColor": "blond",
        "eyeColor": "blue",
        "skinColor": "fair",
        "films": "1,2,3,6",
        "created": "2014-12-09T13:50:51.644Z",
        "edited": "2014-12-20T21:17:56.891Z",
    })
}

fn assert_error(body: &Value, status: StatusCode) {
    assert_eq!(body["status_code"], status.as_u16());
    assert!(body["message"].is_string(), "missing message in {body}");
}

#[tokio::test]
async fn user_lifecycle() {
    let app = app().await;

    let (status, body) = send(&app, Method::POST, "/user", Some(luke())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 1, "username": "luke", "email": "luke@x.com" }));

    let (status, body) = send(&app, Method::GET, "/user/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "luke");
    assert_eq!(body["email"], "luke@x.com");

    let (status, body) = send(&app, Method::DELETE, "/user/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("user deleted"));

    let (status, body) = send(&app, Method::GET, "/user/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "user 1 not found");
}

#[tokio::test]
async fn password_never_leaves_the_server() {
    let app = app().await;
    send(&app, Method::POST, "/user", Some(luke())).await;

    let (_, listed) = send(&app, Method::GET, "/user", None).await;
    let (_, single) = send(&app, Method::GET, "/user/1", None).await;
    let (_, updated) = send(
        &app,
        Method::PUT,
        "/user/1",
        Some(json!({ "password": "new" })),
    )
    .await;

    assert!(listed[0].get("password").is_none());
    assert!(single.get("password").is_none());
    assert!(updated.get("password").is_none());
}

#[tokio::test]
async fn update_user_applies_present_fields() {
    let app = app().await;
    send(&app, Method::POST, "/user", Some(luke())).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/user/1",
        Some(json!({ "username": "red5", "email": "red5@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "username": "red5", "email": "red5@x.com" }));

    let (_, body) = send(&app, Method::GET, "/user/1", None).await;
    assert_eq!(body["username"], "red5");
}

#[tokio::test]
async fn update_missing_user_is_404() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/user/9",
        Some(json!({ "email": "ghost@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_update_is_400() {
    let app = app().await;
    send(&app, Method::POST, "/user", Some(luke())).await;

    let (status, body) = send(&app, Method::PUT, "/user/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_missing_user_is_404() {
    let app = app().await;

    let (status, body) = send(&app, Method::DELETE, "/user/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_field_is_a_structured_error() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/user",
        Some(json!({ "username": "luke", "email": "luke@x.com" })),
    )
    .await;
    assert!(status.is_client_error());
    assert_error(&body, status);
    assert!(body["message"].as_str().unwrap().contains("password"));

    let (_, users) = send(&app, Method::GET, "/user", None).await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn blank_field_is_400() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/user",
        Some(json!({ "username": " ", "email": "luke@x.com", "password": "p" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid field: username must not be empty");
}

#[tokio::test]
async fn malformed_json_is_a_structured_error() {
    let app = app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/planets")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_error(&body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/user/luke", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/favorites/first", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn lists_are_empty_arrays() {
    let app = app().await;

    for uri in ["/user", "/characters", "/planets", "/vehicles", "/favorites"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn character_round_trips_every_field() {
    let app = app().await;

    let (status, created) = send(&app, Method::POST, "/characters", Some(luke_character())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, fetched) = send(&app, Method::GET, "/characters/Luke%20Skywalker", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let input = luke_character();
    for field in [
        "name", "url", "species", "gender", "birthYear", "height", "mass", "hairColor",
        "eyeColor", "skinColor", "films",
    ] {
        assert_eq!(fetched[field], input[field], "{field}");
    }
    for field in ["created", "edited"] {
        let expected = chrono_instant(&input[field]);
        assert_eq!(chrono_instant(&fetched[field]), expected, "{field}");
    }

    let (_, listed) = send(&app, Method::GET, "/characters", None).await;
    assert_eq!(listed, json!([created]));
}

fn chrono_instant(value: &Value) -> i64 {
    let raw = value.as_str().unwrap();
    chrono::DateTime::parse_from_rfc3339(raw)
        .unwrap()
        .timestamp_millis()
}

#[tokio::test]
async fn unknown_names_are_404() {
    let app = app().await;

    for uri in ["/characters/Yoda", "/planets/Kamino", "/vehicles/AT-AT"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_error(&body, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn planet_and_vehicle_round_trip() {
    let app = app().await;

    let planet = json!({
        "name": "Tatooine",
        "climate": "arid",
        "terrain": "desert",
        "population": "200000",
        "diameter": "10465",
        "gravity": "1 standard",
        "rotationPeriod": "23",
        "orbitalPeriod": "304",
    });
    let (status, created) = send(&app, Method::POST, "/planets", Some(planet.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, fetched) = send(&app, Method::GET, "/planets/Tatooine", None).await;
    assert_eq!(fetched, created);
    for (key, value) in planet.as_object().unwrap() {
        assert_eq!(&fetched[key], value, "{key}");
    }

    let vehicle = json!({
        "name": "Sand Crawler",
        "model": "Digger Crawler",
        "manufacturer": "Corellia Mining Corporation",
        "vehicleClass": "wheeled",
        "costInCredits": "150000",
        "crew": "46",
        "passengers": "30",
    });
    let (status, created) = send(&app, Method::POST, "/vehicles", Some(vehicle.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, fetched) = send(&app, Method::GET, "/vehicles/Sand%20Crawler", None).await;
    assert_eq!(fetched, created);
    for (key, value) in vehicle.as_object().unwrap() {
        assert_eq!(&fetched[key], value, "{key}");
    }
}

#[tokio::test]
async fn blank_character_attribute_is_400() {
    let app = app().await;

    let mut character = luke_character();
    character["url"] = json!("   ");
    let (status, body) = send(&app, Method::POST, "/characters", Some(character)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid field: url must not be empty");

    let mut character = luke_character();
    character["species"] = json!("");
    let (status, body) = send(&app, Method::POST, "/characters", Some(character)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid field: species must not be empty");

    let (_, listed) = send(&app, Method::GET, "/characters", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn name_lookup_does_not_trim() {
    let app = app().await;
    send(&app, Method::POST, "/planets", Some(json!({ "name": "Hoth" }))).await;

    let (status, _) = send(&app, Method::GET, "/planets/Hoth", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/planets/%20Hoth%20", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn trailing_slash_is_ignored() {
    let app = app().await;

    let (status, created) = send(&app, Method::POST, "/user/", Some(luke())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, listed) = send(&app, Method::GET, "/user/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));

    let (status, fetched) = send(&app, Method::GET, "/user/1/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, _) = send(&app, Method::GET, "/favorites/", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_favorite_is_409() {
    let app = app().await;
    send(&app, Method::POST, "/user", Some(luke())).await;
    send(&app, Method::POST, "/planets", Some(json!({ "name": "Hoth" }))).await;
    let favorite = json!({ "userId": 1, "kind": "planet", "itemId": 1 });

    let (status, _) = send(&app, Method::POST, "/favorites", Some(favorite.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send(&app, Method::POST, "/favorites", Some(favorite)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "favorite planet 1 for user 1 already present");
}

#[tokio::test]
async fn planet_with_only_a_name() {
    let app = app().await;

    let (status, body) = send(&app, Method::POST, "/planets", Some(json!({ "name": "Hoth" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Hoth");
    assert_eq!(body["climate"], Value::Null);
}

#[tokio::test]
async fn favorites_flow() {
    let app = app().await;
    send(&app, Method::POST, "/user", Some(luke())).await;
    send(&app, Method::POST, "/characters", Some(luke_character())).await;

    let favorite = json!({ "userId": 1, "kind": "character", "itemId": 1 });
    let (status, created) = send(&app, Method::POST, "/favorites", Some(favorite.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created,
        json!({ "id": 1, "userId": 1, "kind": "character", "itemId": 1 })
    );

    let (status, body) = send(&app, Method::POST, "/favorites", Some(favorite)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_error(&body, StatusCode::CONFLICT);

    let (status, body) = send(&app, Method::GET, "/favorites/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (_, body) = send(&app, Method::GET, "/user/1/favorites", None).await;
    assert_eq!(body, json!([created.clone()]));

    let (status, body) = send(&app, Method::DELETE, "/favorites/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("favorite deleted"));

    let (status, _) = send(&app, Method::GET, "/favorites/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn favorite_for_unknown_records_is_404() {
    let app = app().await;
    send(&app, Method::POST, "/user", Some(luke())).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/favorites",
        Some(json!({ "userId": 1, "kind": "planet", "itemId": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "planet 5 not found");

    let (status, _) = send(
        &app,
        Method::POST,
        "/favorites",
        Some(json!({ "userId": 8, "kind": "planet", "itemId": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/user/8/favorites", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_favorite_kind_is_rejected() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/favorites",
        Some(json!({ "userId": 1, "kind": "droid", "itemId": 1 })),
    )
    .await;
    assert!(status.is_client_error());
    assert_error(&body, status);
}

#[tokio::test]
async fn sitemap_lists_routes() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<a href=\"/planets\">/planets</a>"));
    assert!(html.contains("DELETE /user/{id}"));
}

#[tokio::test]
async fn sitemap_links_resolve() {
    let app = app().await;

    for uri in ["/user", "/characters", "/planets", "/vehicles", "/favorites"] {
        let (status, _) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn served_over_tcp() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = server::spawn_with_listener(engine().await, listener).unwrap();

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /planets HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.ends_with("[]"), "{response}");
}
