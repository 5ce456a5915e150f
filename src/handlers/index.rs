//! Root endpoint listing the available routes.

use axum::response::Html;

/// Routes served by the API, in the order they are listed
pub const ROUTES: [&str; 5] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/&lt;start&gt;",
    "/api/v1.0/&lt;start&gt;/&lt;end&gt;",
];

/// Handle GET / requests
pub async fn index_handler() -> Html<String> {
    let mut body = String::from("Available Routes:<br/>");
    body.push_str(&ROUTES.join("<br/>"));
    Html(body)
}
