//! Style analysis routes — image upload, multi-image profile, visual combo.

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tracing::error;

use styleloop_catalog::match_by_style_tags;
use styleloop_genai::{extract_json_object, prompts, ImagePart, VisualComboRequest};

use super::{bad_request, server_error};
use crate::state::AppState;

type ApiResult = (StatusCode, Json<serde_json::Value>);

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze-style", post(analyze_style))
        .route("/create-style-profile", post(create_style_profile))
        .route("/generate-visual-combo", post(generate_visual_combo))
}

/// POST /api/analyze-style — analyze one item photo, recommend matches,
/// and compose outfit advice for them.
async fn analyze_style(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let client = match state.model_client() {
        Ok(c) => c,
        Err(e) => return server_error(format!("Server configuration error: {}", e)),
    };

    let image = match read_image_field(&mut multipart).await {
        Ok(image) => image,
        Err(resp) => return resp,
    };

    let analysis = match client
        .generate_with_image(prompts::ANALYZE_IMAGE, image)
        .await
        .and_then(|text| extract_json_object(&text))
    {
        Ok(value) => value,
        Err(e) => {
            error!("Style analysis failed: {}", e);
            return server_error("A server error occurred during analysis. Please try again.");
        }
    };

    let inferred: HashSet<String> = analysis
        .pointer("/inferred_style/style_tags")
        .and_then(|v| v.as_array())
        .map(|tags| {
            tags.iter()
                .filter_map(|t| t.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let matched = match_by_style_tags(&state.catalog, &inferred);

    let description = analysis
        .get("item_description")
        .and_then(|v| v.as_str())
        .unwrap_or("the uploaded piece");
    let matched_names: Vec<String> = matched.iter().map(|p| p.name.clone()).collect();

    let advice = match client
        .generate_text(&prompts::style_advice(description, &matched_names))
        .await
        .and_then(|text| extract_json_object(&text))
    {
        Ok(value) => value,
        Err(e) => {
            error!("Style advice failed: {}", e);
            return server_error("A server error occurred during analysis. Please try again.");
        }
    };

    (
        StatusCode::OK,
        Json(json!({
            "image_analysis": analysis,
            "style_advice": advice,
            "matched_products": matched,
        })),
    )
}

/// POST /api/create-style-profile — distill a style identity from 2+ photos.
async fn create_style_profile(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let client = match state.model_client() {
        Ok(c) => c,
        Err(e) => return server_error(format!("Server configuration error: {}", e)),
    };

    let mut images = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.file_name().is_none() {
            continue;
        }
        let mime = match field.content_type() {
            Some(ct) if ct.starts_with("image/") => ct.to_string(),
            _ => return bad_request("Please upload image files only."),
        };
        match field.bytes().await {
            Ok(bytes) => images.push(ImagePart {
                mime_type: mime,
                data: bytes.to_vec(),
            }),
            Err(e) => return bad_request(format!("Upload read failed: {}", e)),
        }
    }

    if images.len() < 2 {
        return bad_request("Please upload at least 2 images.");
    }

    match client
        .generate_with_images(prompts::CREATE_STYLE_PROFILE, images)
        .await
        .and_then(|text| extract_json_object(&text))
    {
        Ok(profile) => (StatusCode::OK, Json(profile)),
        Err(e) => {
            error!("Style profile failed: {}", e);
            server_error("A server error occurred while building the style profile.")
        }
    }
}

/// POST /api/generate-visual-combo — describe the combined outfit as a
/// studio-shot caption.
async fn generate_visual_combo(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VisualComboRequest>,
) -> impl IntoResponse {
    let client = match state.model_client() {
        Ok(c) => c,
        Err(e) => return server_error(format!("Server configuration error: {}", e)),
    };

    match client
        .generate_text(&prompts::visual_combo(&req.main_item, &req.matched_items))
        .await
        .and_then(|text| extract_json_object(&text))
    {
        Ok(combo) => (StatusCode::OK, Json(combo)),
        Err(e) => {
            error!("Visual combo failed: {}", e);
            server_error("A server error occurred while rendering the combo.")
        }
    }
}

/// Pull the first uploaded file out of the multipart body, enforcing an
/// `image/*` content type.
async fn read_image_field(multipart: &mut Multipart) -> Result<ImagePart, ApiResult> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.file_name().is_none() {
            continue;
        }
        let mime = match field.content_type() {
            Some(ct) if ct.starts_with("image/") => ct.to_string(),
            _ => return Err(bad_request("Please upload an image file.")),
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| bad_request(format!("Upload read failed: {}", e)))?;
        return Ok(ImagePart {
            mime_type: mime,
            data: bytes.to_vec(),
        });
    }
    Err(bad_request("No image file found in the upload."))
}
