use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            success: true,
            data,
            message,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            errors,
        }
    }
}

// =============================================================================
// ACCOUNT SHAPES
// =============================================================================

/// Person name shared by users and captains.
///
/// `lastname` is always present once stored; a missing last name is kept as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FullName {
    pub firstname: String,
    pub lastname: String,
}

impl FullName {
    pub fn new(firstname: String, lastname: Option<String>) -> Self {
        Self {
            firstname,
            lastname: lastname.unwrap_or_default(),
        }
    }
}
