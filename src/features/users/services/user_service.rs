use std::sync::Arc;

use crate::core::error::Result;
use crate::features::users::dtos::CreateUserDto;
use crate::features::users::models::{NewUser, User};
use crate::features::users::repositories::UserRepository;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Register a new user; nothing is stored when validation fails
    pub async fn create_user(&self, dto: CreateUserDto) -> Result<User> {
        let new_user = NewUser::try_from(dto)?;
        let user = self.repository.create(new_user).await?;

        tracing::info!("User registered: id={}", user.id);

        Ok(user)
    }
}
