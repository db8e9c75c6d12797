use std::time::Duration;

use crate::server::{error::config::ConfigError, model::image::ScoredImage};

/// Default cron expression for the periodic scoreboard rebuild: every five minutes
pub const DEFAULT_REBUILD_CRON: &str = "0 */5 * * * *";

/// Color given to scored images configured without one
pub const DEFAULT_IMAGE_COLOR: &str = "gray";

pub struct Config {
    pub database_url: String,
    pub images: Vec<ScoredImage>,
    pub probe_interval: Duration,
    pub rebuild_cron: String,
}

impl Config {
    /// Loads the configuration from environment variables
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            images: parse_images("SCORED_IMAGES", &required("SCORED_IMAGES")?)?,
            probe_interval: match optional("STORE_PROBE_INTERVAL_SECS") {
                Some(value) => parse_probe_interval("STORE_PROBE_INTERVAL_SECS", &value)?,
                None => Duration::ZERO,
            },
            rebuild_cron: optional("SCOREBOARD_REBUILD_CRON")
                .unwrap_or_else(|| DEFAULT_REBUILD_CRON.to_string()),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parses a comma-separated `name[:color]` list; list position becomes the image index.
fn parse_images(var: &str, value: &str) -> Result<Vec<ScoredImage>, ConfigError> {
    let mut images: Vec<ScoredImage> = Vec::new();

    for item in value.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        let (name, color) = match item.split_once(':') {
            Some((name, color)) => (name.trim(), color.trim()),
            None => (item, DEFAULT_IMAGE_COLOR),
        };

        if name.is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("image entry {:?} has no name", item),
            });
        }
        if images.iter().any(|image| image.name == name) {
            return Err(ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("image {:?} is configured twice", name),
            });
        }

        images.push(ScoredImage {
            name: name.to_string(),
            color: if color.is_empty() {
                DEFAULT_IMAGE_COLOR.to_string()
            } else {
                color.to_string()
            },
            index: images.len() as u32,
        });
    }

    if images.is_empty() {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "no scored images configured".to_string(),
        });
    }

    Ok(images)
}

fn parse_probe_interval(var: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}
