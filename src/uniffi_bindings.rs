//! UniFFI bindings for recipe-tags
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! The normalizer is synchronous, so the exported functions call straight into it.

use std::fmt;

use crate::{CategoryNormalizer, NormalizeError, NormalizedRecord};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible normalized record
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiNormalizedRecord {
    /// Cleaned labels joined with ", "
    pub categories: String,
    /// Cleaned labels, one entry per tag
    pub tags: Vec<String>,
    /// Meal type, or "None"
    pub meal: String,
    /// Course type, or "None"
    pub course: String,
    /// Dietary tag, or "None"
    pub diet: String,
    /// Total time in minutes
    pub total_minutes: u32,
}

impl From<NormalizedRecord> for FfiNormalizedRecord {
    fn from(record: NormalizedRecord) -> Self {
        FfiNormalizedRecord {
            categories: record.categories.to_string(),
            meal: record.meal.to_string(),
            course: record.course.to_string(),
            diet: record.diet.to_string(),
            tags: record.categories.into_vec(),
            total_minutes: record.total_minutes,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiNormalizeError {
    /// Configuration could not be loaded
    ConfigError { message: String },
    /// Configuration values are unusable
    InvalidConfig { message: String },
}

impl fmt::Display for FfiNormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiNormalizeError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiNormalizeError::InvalidConfig { message } => {
                write!(f, "Invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for FfiNormalizeError {}

impl From<NormalizeError> for FfiNormalizeError {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::ConfigError(e) => FfiNormalizeError::ConfigError {
                message: e.to_string(),
            },
            NormalizeError::InvalidConfig(msg) => FfiNormalizeError::InvalidConfig { message: msg },
        }
    }
}

/// Mobile callers have no config file, so bindings use the built-in defaults
fn default_normalizer() -> Result<CategoryNormalizer, FfiNormalizeError> {
    Ok(CategoryNormalizer::builder().build()?)
}

/// Normalize a raw category string
///
/// # Arguments
/// * `raw` - Comma-separated category labels as scraped
///
/// # Returns
/// The cleaned labels joined with ", "
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize_categories(raw: String) -> Result<String, FfiNormalizeError> {
    Ok(default_normalizer()?.normalize(&raw).to_string())
}

/// Normalize the category labels and duration of one recipe
///
/// # Arguments
/// * `categories` - Comma-separated category labels as scraped
/// * `duration` - Optional duration text such as "1 hr 30 mins"
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize_record(
    categories: String,
    duration: Option<String>,
) -> Result<FfiNormalizedRecord, FfiNormalizeError> {
    let normalizer = default_normalizer()?;
    Ok(normalizer
        .process(&categories, duration.as_deref())
        .into())
}

/// Convert a duration string to minutes
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_duration(raw: String) -> u32 {
    crate::parse_duration_minutes(&raw)
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
