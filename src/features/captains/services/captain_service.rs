//! Captain Service - registration and lookup

use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::captains::dtos::CreateCaptainDto;
use crate::features::captains::models::{Captain, NewCaptain};
use crate::features::captains::repositories::CaptainRepository;

/// Service for captain accounts
pub struct CaptainService {
    repository: Arc<dyn CaptainRepository>,
}

impl CaptainService {
    pub fn new(repository: Arc<dyn CaptainRepository>) -> Self {
        Self { repository }
    }

    /// Validate the registration fields and store one new captain.
    ///
    /// Nothing is written when validation fails. Repeated calls with the same
    /// email create separate records.
    pub async fn create_captain(&self, dto: CreateCaptainDto) -> Result<Captain> {
        let new_captain = NewCaptain::try_from(dto)?;

        let captain = self.repository.create(new_captain).await?;

        tracing::info!(
            "Captain registered: id={}, vehicle_type={}",
            captain.id,
            captain.vehicle.vehicle_type
        );

        Ok(captain)
    }

    pub async fn get_captain(&self, id: Uuid) -> Result<Captain> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Captain {} not found", id)))
    }
}
