use crate::application::error::ApplicationError;
use axum::{
    body::Body,
    extract::{Multipart, Json, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::coloring_service::{ColoringService, ARTWORK_CONTENT_TYPE, ARTWORK_FILE_NAME};
use crate::application::speech_service::SpeechService;
use crate::domain::palette;

#[derive(Clone)]
pub struct AppState {
    pub coloring_service: Arc<ColoringService>,
    pub speech_service: Arc<SpeechService>,
}

#[derive(Deserialize, Debug)]
pub struct FillParams {
    /// http(s) URL or data URI of the colouring page
    pub image: String,
    pub x: i64,
    pub y: i64,
    pub color: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct SpeechParams {
    pub text: String,
    pub voice: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct SpeechResponse {
    pub audio: String,
}

fn default_color_hex() -> String {
    palette::default_color().to_hex()
}

fn artwork_response(data: Vec<u8>, attachment: bool) -> Result<Response, ApplicationError> {
    let mut builder = Response::builder().header(header::CONTENT_TYPE, ARTWORK_CONTENT_TYPE);
    if attachment {
        builder = builder.header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", ARTWORK_FILE_NAME),
        );
    }
    builder
        .body(Body::from(data))
        .map(IntoResponse::into_response)
        .map_err(|e| ApplicationError::from(anyhow::Error::new(e).context("Failed to build artwork response")))
}

fn parse_coordinate(name: &str, raw: Option<String>) -> Result<i64, ApplicationError> {
    let raw = raw.ok_or_else(|| ApplicationError::BadRequest(format!("missing field `{}`", name)))?;
    raw.trim()
        .parse::<i64>()
        .map_err(|e| ApplicationError::BadRequest(format!("field `{}` must be an integer: {}", name, e)))
}

pub async fn palette_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.coloring_service.palette())
}

pub async fn fill_handler(
    State(state): State<Arc<AppState>>,
    Json(params): Json<FillParams>,
) -> Result<Response, ApplicationError> {
    let color = params.color.unwrap_or_else(default_color_hex);
    let png = state
        .coloring_service
        .fill_artwork_from_url(&params.image, params.x, params.y, &color)
        .await?;
    artwork_response(png, false)
}

// multipart: image(ファイル), x, y, color
pub async fn upload_fill_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, ApplicationError> {
    let mut image = None;
    let mut x = None;
    let mut y = None;
    let mut color = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApplicationError::BadRequest(format!("Multipart error: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApplicationError::BadRequest(format!("Failed to read image field: {}", e)))?;
                image = Some(data.to_vec());
            }
            "x" | "y" | "color" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApplicationError::BadRequest(format!("Failed to read field `{}`: {}", name, e)))?;
                match name.as_str() {
                    "x" => x = Some(text),
                    "y" => y = Some(text),
                    _ => color = Some(text),
                }
            }
            other => tracing::debug!(field = %other, "ignoring unknown multipart field"),
        }
    }

    let image = image.ok_or_else(|| ApplicationError::BadRequest("missing field `image`".to_string()))?;
    let x = parse_coordinate("x", x)?;
    let y = parse_coordinate("y", y)?;
    let color = color.unwrap_or_else(default_color_hex);

    let png = state.coloring_service.fill_artwork(image, x, y, &color).await?;
    artwork_response(png, false)
}

pub async fn preview_artwork_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApplicationError> {
    let data = state.coloring_service.current_artwork().await?;
    artwork_response(data, false)
}

pub async fn download_artwork_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApplicationError> {
    let data = state.coloring_service.current_artwork().await?;
    artwork_response(data, true)
}

pub async fn speech_handler(
    State(state): State<Arc<AppState>>,
    Json(params): Json<SpeechParams>,
) -> Result<Json<SpeechResponse>, ApplicationError> {
    let audio = state
        .speech_service
        .text_to_speech(&params.text, params.voice.as_deref())
        .await?;
    Ok(Json(SpeechResponse { audio }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("x", Some(" 42 ".to_string())).unwrap(), 42);
        assert_eq!(parse_coordinate("y", Some("-1".to_string())).unwrap(), -1);
        assert!(matches!(parse_coordinate("x", None), Err(ApplicationError::BadRequest(_))));
        assert!(matches!(
            parse_coordinate("x", Some("12.5".to_string())),
            Err(ApplicationError::BadRequest(_))
        ));
    }

    #[test]
    fn test_artwork_download_headers() {
        let response = artwork_response(vec![1, 2, 3], true).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"my-pharaoh-artwork.png\""
        );

        let preview = artwork_response(vec![1], false).unwrap();
        assert!(preview.headers().get(header::CONTENT_DISPOSITION).is_none());
    }

    #[test]
    fn test_default_fill_colour_is_gold() {
        assert_eq!(default_color_hex(), "#FFD700");
    }

    #[test]
    fn test_fill_params_color_is_optional() {
        let params: FillParams =
            serde_json::from_str(r#"{ "image": "data:image/png;base64,AQID", "x": 3, "y": -1 }"#).unwrap();
        assert_eq!((params.x, params.y), (3, -1));
        assert!(params.color.is_none());
    }
}
