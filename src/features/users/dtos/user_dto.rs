use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::types::FullName;
use crate::shared::validation::EMAIL_REGEX;

/// Request DTO for user registration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(
        required(message = "firstname is required"),
        length(min = 1, message = "firstname is required")
    )]
    pub firstname: Option<String>,

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
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: Uuid,
    pub fullname: FullName,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
