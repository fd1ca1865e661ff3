//! Request handlers: the prediction endpoint and the landing page.
//!
//! The prediction pipeline is strictly linear: receive -> validate ->
//! decode -> normalize -> infer -> argmax -> lookup -> respond. Each stage
//! returns a typed error that the `ApiError` boundary translates into the
//! JSON error object, so no failure escapes as a crash.

use actix_multipart::Multipart;
use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpResponse};
use futures_util::TryStreamExt;
use tracing::info;

use super::protocol::{ErrorResponse, PredictionResponse};
use super::{ApiError, AppState};
use crate::{classes, preprocess, torch};

type Result<T> = std::result::Result<T, ApiError>;

const INVALID_IMAGE: &str = "Invalid or missing image file";

/// HTTP request for a disease prediction on one uploaded image
pub async fn predict(payload: Multipart, state: web::Data<AppState>) -> Result<HttpResponse> {
    let bytes = read_image_field(payload).await?;
    let input = preprocess::image_to_tensor(&bytes)?;
    let probs = state.model.predict(&input)?;

    let index = torch::argmax(&probs).ok_or(ApiError::InvalidPrediction)?;
    let class = classes::lookup(index).ok_or(ApiError::InvalidPrediction)?;

    info!(
        "served prediction: class {} ({})",
        index, class.disease_name
    );
    Ok(HttpResponse::Ok().json(PredictionResponse::from(class)))
}

/// Any non-POST method on the prediction endpoint
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid request method".to_owned(),
    })
}

/// Static landing page
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(include_str!("../../static/index.html"))
}

/// Pull the uploaded bytes out of the multipart `image` field.
///
/// The field must be a file part; a bare form value (no filename in its
/// content disposition) is rejected the same way a missing field is.
async fn read_image_field(mut payload: Multipart) -> Result<Vec<u8>> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != "image" {
            continue;
        }
        if field.content_disposition().get_filename().is_none() {
            return Err(ApiError::BadRequest(INVALID_IMAGE.to_owned()));
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?
        {
            bytes.extend_from_slice(&chunk);
        }
        return Ok(bytes);
    }

    Err(ApiError::BadRequest(INVALID_IMAGE.to_owned()))
}
