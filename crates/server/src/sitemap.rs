//! `GET /` lists every route the API answers to.

use axum::response::Html;

/// Method and path of every route mounted by [`crate::router`].
pub(crate) const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/user"),
    ("POST", "/user"),
    ("GET", "/user/{id}"),
    ("PUT", "/user/{id}"),
    ("DELETE", "/user/{id}"),
    ("GET", "/user/{id}/favorites"),
    ("GET", "/characters"),
    ("POST", "/characters"),
    ("GET", "/characters/{name}"),
    ("GET", "/planets"),
    ("POST", "/planets"),
    ("GET", "/planets/{name}"),
    ("GET", "/vehicles"),
    ("POST", "/vehicles"),
    ("GET", "/vehicles/{name}"),
    ("GET", "/favorites"),
    ("POST", "/favorites"),
    ("GET", "/favorites/{id}"),
    ("DELETE", "/favorites/{id}"),
];

/// Parameterless `GET` routes become links, the rest are listed as text.
fn render(routes: &[(&str, &str)]) -> String {
    let items: String = routes
        .iter()
        .map(|(method, path)| {
            if *method == "GET" && !path.contains('{') {
                format!("<li>{method} <a href=\"{path}\">{path}</a></li>")
            } else {
                format!("<li>{method} {path}</li>")
            }
        })
        .collect();

    format!(
        "<!DOCTYPE html><html><head><title>Holonet</title></head>\
         <body><h1>Holonet API</h1><p>Endpoints:</p><ul>{items}</ul></body></html>"
    )
}

pub async fn sitemap() -> Html<String> {
    Html(render(ROUTES))
}
