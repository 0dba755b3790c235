//! Team domain model and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::team::{CreateTeamDto, TeamDto, UpdateTeamDto},
    server::{error::AppError, util::validate},
};

/// Team stored under `team:<id>`. The code is also indexed under `team:code:<code>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub logo_url: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    /// User id of the coach who created the team.
    pub created_by: String,
}

impl Team {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            code: self.code,
            logo_url: self.logo_url,
            color: self.color,
            created_at: self.created_at,
            created_by: self.created_by,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub logo_url: String,
    pub color: String,
}

impl CreateTeamParams {
    /// Validates a create-team DTO, filling in the default color.
    pub fn from_dto(dto: CreateTeamDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::required("name", &dto.name)?,
            logo_url: validate::optional_url("logoUrl", dto.logo_url.as_deref().unwrap_or(""))?,
            color: match dto.color.as_deref().map(str::trim) {
                Some(color) if !color.is_empty() => validate::color(color)?,
                _ => validate::DEFAULT_TEAM_COLOR.to_string(),
            },
        })
    }
}

/// Editable team fields. The id, code and creator never change.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamParams {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub color: Option<String>,
}

impl UpdateTeamParams {
    pub fn from_dto(dto: UpdateTeamDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto
                .name
                .map(|v| validate::required("name", &v))
                .transpose()?,
            logo_url: dto
                .logo_url
                .map(|v| validate::optional_url("logoUrl", &v))
                .transpose()?,
            color: dto.color.map(|v| validate::color(&v)).transpose()?,
        })
    }

    pub fn apply(self, team: &mut Team) {
        if let Some(name) = self.name {
            team.name = name;
        }
        if let Some(logo_url) = self.logo_url {
            team.logo_url = logo_url;
        }
        if let Some(color) = self.color {
            team.color = color;
        }
    }
}
