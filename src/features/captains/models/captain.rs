use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::captains::dtos::{CaptainResponseDto, CreateCaptainDto};
use crate::shared::types::FullName;

/// Vehicle driven by a captain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub color: String,
    pub plate: String,
    pub capacity: i32,
    pub vehicle_type: String,
}

/// Database row for `captains`; vehicle and name columns are flat
#[derive(Debug, Clone, FromRow)]
pub struct CaptainRow {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub vehicle_color: String,
    pub vehicle_plate: String,
    pub vehicle_capacity: i32,
    pub vehicle_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated captain ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCaptain {
    pub fullname: FullName,
    pub email: String,
    pub password: String,
    pub vehicle: Vehicle,
}

/// Stored captain with store-assigned id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captain {
    pub id: Uuid,
    pub fullname: FullName,
    pub email: String,
    pub password: String,
    pub vehicle: Vehicle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<CreateCaptainDto> for NewCaptain {
    type Error = AppError;

    fn try_from(dto: CreateCaptainDto) -> Result<Self> {
        dto.validate()?;

        let CreateCaptainDto {
            firstname: Some(firstname),
            lastname,
            email: Some(email),
            password: Some(password),
            color: Some(color),
            plate: Some(plate),
            capacity: Some(capacity),
            vehicle_type: Some(vehicle_type),
        } = dto
        else {
            return Err(AppError::Internal(
                "validated captain payload is missing a required field".to_string(),
            ));
        };

        Ok(Self {
            fullname: FullName::new(firstname, lastname),
            email,
            password,
            vehicle: Vehicle {
                color,
                plate,
                capacity,
                vehicle_type,
            },
        })
    }
}

impl From<CaptainRow> for Captain {
    fn from(row: CaptainRow) -> Self {
        Self {
            id: row.id,
            fullname: FullName {
                firstname: row.firstname,
                lastname: row.lastname,
            },
            email: row.email,
            password: row.password,
            vehicle: Vehicle {
                color: row.vehicle_color,
                plate: row.vehicle_plate,
                capacity: row.vehicle_capacity,
                vehicle_type: row.vehicle_type,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<Captain> for CaptainResponseDto {
    fn from(c: Captain) -> Self {
        Self {
            id: c.id,
            fullname: c.fullname,
            email: c.email,
            vehicle: c.vehicle,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
