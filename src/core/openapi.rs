use utoipa::{Modify, OpenApi};

use crate::features::captains::{
    dtos as captains_dtos, handlers as captains_handlers, models as captains_models,
};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, FullName};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Captains
        captains_handlers::register_captain,
        captains_handlers::get_captain,
        // Users
        users_handlers::register_user,
    ),
    components(
        schemas(
            // Shared
            FullName,
            // Captains
            captains_models::Vehicle,
            captains_dtos::CreateCaptainDto,
            captains_dtos::CaptainResponseDto,
            ApiResponse<captains_dtos::CaptainResponseDto>,
            // Users
            users_dtos::CreateUserDto,
            users_dtos::UserResponseDto,
            ApiResponse<users_dtos::UserResponseDto>,
        )
    ),
    tags(
        (name = "captains", description = "Captain (driver) registration and lookup"),
        (name = "users", description = "Rider registration"),
    ),
    info(
        title = "Ridehail API",
        version = "0.1.0",
        description = "API documentation for the ride-hailing backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
