//! Input validation shared by the parameter constructors.
//!
//! Every helper returns `AppError::BadRequest` with a client-facing message.

use chrono::{NaiveDate, NaiveTime};
use url::Url;

use crate::server::error::AppError;

/// Default team color when none is given.
pub const DEFAULT_TEAM_COLOR: &str = "#3b82f6";

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Trims `value` and rejects it when empty.
pub fn required(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Normalizes an email address to lowercase and checks its basic shape.
pub fn email(value: &str) -> Result<String, AppError> {
    let email = value.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AppError::BadRequest("A valid email address is required".to_string())),
    }
}

pub fn password(value: &str) -> Result<(), AppError> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password should be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Accepts an empty string or an absolute URL.
pub fn optional_url(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    Url::parse(trimmed)
        .map(|url| url.to_string())
        .map_err(|_| AppError::BadRequest(format!("{} must be a valid URL", field)))
}

/// Accepts a `#rrggbb` hex color.
pub fn color(value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    let valid = trimmed.len() == 7
        && trimmed.starts_with('#')
        && trimmed[1..].bytes().all(|b| b.is_ascii_hexdigit());
    if !valid {
        return Err(AppError::BadRequest(
            "Color must be a hex value like #3b82f6".to_string(),
        ));
    }
    Ok(trimmed.to_lowercase())
}

/// Parses a `YYYY-MM-DD` date.
pub fn date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Date must be formatted as YYYY-MM-DD".to_string()))
}

/// Parses an `HH:MM` time and returns it in canonical zero-padded form.
pub fn time(value: &str) -> Result<String, AppError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| AppError::BadRequest("Time must be formatted as HH:MM".to_string()))
}
