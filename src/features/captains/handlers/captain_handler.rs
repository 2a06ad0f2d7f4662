use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppPayload;
use crate::features::captains::dtos::{CaptainResponseDto, CreateCaptainDto};
use crate::features::captains::services::CaptainService;
use crate::shared::types::ApiResponse;

/// Register a new captain
///
/// Accepts JSON or urlencoded form bodies with flat fields; the stored
/// record nests them under `fullname` and `vehicle`.
#[utoipa::path(
    post,
    path = "/captains/register",
    request_body = CreateCaptainDto,
    responses(
        (status = 201, description = "Captain registered successfully", body = ApiResponse<CaptainResponseDto>),
        (status = 400, description = "Missing or invalid fields")
    ),
    tag = "captains"
)]
pub async fn register_captain(
    State(service): State<Arc<CaptainService>>,
    AppPayload(dto): AppPayload<CreateCaptainDto>,
) -> Result<(StatusCode, Json<ApiResponse<CaptainResponseDto>>)> {
    let captain = service.create_captain(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(captain.into()),
            Some("Captain registered".to_string()),
        )),
    ))
}

/// Get a captain by id
#[utoipa::path(
    get,
    path = "/captains/{id}",
    params(("id" = Uuid, Path, description = "Captain id")),
    responses(
        (status = 200, description = "Captain found", body = ApiResponse<CaptainResponseDto>),
        (status = 404, description = "Captain not found")
    ),
    tag = "captains"
)]
pub async fn get_captain(
    State(service): State<Arc<CaptainService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CaptainResponseDto>>> {
    let captain = service.get_captain(id).await?;
    Ok(Json(ApiResponse::success(Some(captain.into()), None)))
}
