use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::captains::models::{Captain, CaptainRow, NewCaptain};

/// Persistence for captain records
#[async_trait]
pub trait CaptainRepository: Send + Sync {
    /// Store a new captain and return it with the id and timestamps assigned by the store
    async fn create(&self, captain: NewCaptain) -> Result<Captain>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Captain>>;
}

/// PostgreSQL-backed captain storage
pub struct PgCaptainRepository {
    pool: PgPool,
}

impl PgCaptainRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CaptainRepository for PgCaptainRepository {
    async fn create(&self, captain: NewCaptain) -> Result<Captain> {
        let row = sqlx::query_as::<_, CaptainRow>(
            r#"
            INSERT INTO captains (
                firstname, lastname, email, password,
                vehicle_color, vehicle_plate, vehicle_capacity, vehicle_type
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&captain.fullname.firstname)
        .bind(&captain.fullname.lastname)
        .bind(&captain.email)
        .bind(&captain.password)
        .bind(&captain.vehicle.color)
        .bind(&captain.vehicle.plate)
        .bind(captain.vehicle.capacity)
        .bind(&captain.vehicle.vehicle_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert captain: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Captain>> {
        let row = sqlx::query_as::<_, CaptainRow>("SELECT * FROM captains WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Captain::from))
    }
}
