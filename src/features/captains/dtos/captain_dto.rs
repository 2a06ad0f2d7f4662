use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::captains::models::Vehicle;
use crate::shared::types::FullName;
use crate::shared::validation::{deserialize_lenient_i32, EMAIL_REGEX};

/// Request DTO for captain registration
///
/// Fields arrive flat (as posted by the sign-up form) and are reshaped into
/// `fullname` and `vehicle` before storage. Every field except `lastname` is
/// required; empty strings and a zero capacity count as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaptainDto {
    #[validate(
        required(message = "firstname is required"),
        length(min = 1, message = "firstname is required")
    )]
    pub firstname: Option<String>,

    /// Optional, stored as `""` when absent
    pub lastname: Option<String>,

    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email is required"),
        regex(path = *EMAIL_REGEX, message = "email must be a valid email address")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password is required")
    )]
    pub password: Option<String>,

    #[validate(
        required(message = "color is required"),
        length(min = 1, message = "color is required")
    )]
    pub color: Option<String>,

    #[validate(
        required(message = "plate is required"),
        length(min = 1, message = "plate is required")
    )]
    pub plate: Option<String>,

    #[validate(
        required(message = "capacity is required"),
        range(min = 1, message = "capacity must be at least 1")
    )]
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    pub capacity: Option<i32>,

    #[validate(
        required(message = "vehicleType is required"),
        length(min = 1, message = "vehicleType is required")
    )]
    pub vehicle_type: Option<String>,
}

/// Response DTO for a stored captain. The password is never echoed back.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaptainResponseDto {
    pub id: Uuid,
    pub fullname: FullName,
    pub email: String,
    pub vehicle: Vehicle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
