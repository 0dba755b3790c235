//! User profile domain model and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::{
        auth::SignupDto,
        user::{UpdateUserDto, UserDto, UserRole},
    },
    server::{error::AppError, util::validate},
};

/// Profile stored under `user:<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// First and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            role: self.role,
            first_name: self.first_name,
            last_name: self.last_name,
            nickname: self.nickname,
            phone: self.phone,
            photo_url: self.photo_url,
            created_at: self.created_at,
        }
    }
}

/// Validated signup input.
#[derive(Debug, Clone)]
pub struct SignupParams {
    /// Lowercased email address.
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub nickname: String,
}

impl SignupParams {
    /// Validates a signup DTO.
    ///
    /// # Returns
    /// - `Ok(SignupParams)` - Email normalized, names trimmed
    /// - `Err(AppError::BadRequest)` - Malformed email, short password or empty name
    pub fn from_dto(dto: SignupDto) -> Result<Self, AppError> {
        validate::password(&dto.password)?;

        Ok(Self {
            email: validate::email(&dto.email)?,
            password: dto.password,
            role: dto.role,
            first_name: validate::required("firstName", &dto.first_name)?,
            last_name: validate::required("lastName", &dto.last_name)?,
            phone: dto.phone.unwrap_or_default().trim().to_string(),
            nickname: dto.nickname.unwrap_or_default().trim().to_string(),
        })
    }
}

/// Profile fields a user may change on their own profile.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            first_name: dto
                .first_name
                .map(|v| validate::required("firstName", &v))
                .transpose()?,
            last_name: dto
                .last_name
                .map(|v| validate::required("lastName", &v))
                .transpose()?,
            nickname: dto.nickname.map(|v| v.trim().to_string()),
            phone: dto.phone.map(|v| v.trim().to_string()),
            photo_url: dto
                .photo_url
                .map(|v| validate::optional_url("photoUrl", &v))
                .transpose()?,
        })
    }

    /// Overwrites the fields that were supplied.
    pub fn apply(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(nickname) = self.nickname {
            user.nickname = nickname;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        if let Some(photo_url) = self.photo_url {
            user.photo_url = photo_url;
        }
    }
}
