use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{CreateUserDto, UserResponseDto};
use crate::shared::types::FullName;

/// Database model for user
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub fullname: FullName,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub fullname: FullName,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<CreateUserDto> for NewUser {
    type Error = AppError;

    fn try_from(dto: CreateUserDto) -> Result<Self> {
        dto.validate()?;

        let CreateUserDto {
            firstname: Some(firstname),
            lastname,
            email: Some(email),
            password: Some(password),
        } = dto
        else {
            return Err(AppError::Internal(
                "validated user payload is missing a required field".to_string(),
            ));
        };

        Ok(Self {
            fullname: FullName::new(firstname, lastname),
            email,
            password,
        })
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            fullname: FullName {
                firstname: row.firstname,
                lastname: row.lastname,
            },
            email: row.email,
            password: row.password,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            fullname: u.fullname,
            email: u.email,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
