use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

/// Browser frontend compiled into the binary.
#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

/// `GET /`: the single-page frontend.
pub async fn index() -> Response {
    serve("index.html")
}

/// `GET /static/{*path}`: assets referenced by the page.
pub async fn asset(Path(path): Path<String>) -> Response {
    serve(&path)
}

fn serve(path: &str) -> Response {
    match StaticAssets::get(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref())],
                file.data.into_owned(),
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
