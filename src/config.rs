use std::net::SocketAddr;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
    pub zoom: f64,
}

/// Server settings. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub samples_per_location: i64,
    pub max_samples_per_location: i64,
    pub globe_texture_url: String,
    pub japan_center: MapCenter,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            samples_per_location: 5,
            max_samples_per_location: 1000,
            globe_texture_url: "/static/images/earth-texture.jpg".to_string(),
            japan_center: MapCenter {
                lat: 36.2048,
                lng: 138.2529,
                zoom: 5.5,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup` on the defaults. Empty values are ignored.
    /// Sample counts must be non-negative and the default may not exceed the cap.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = AppConfig::default();

        if let Some(value) = get("SAR_GLOBE_ADDR") {
            config.bind_addr = value.trim().parse().map_err(|_| ConfigError::Addr {
                var: "SAR_GLOBE_ADDR",
                value,
            })?;
        }
        if let Some(value) = get("SAR_GLOBE_SAMPLES") {
            config.samples_per_location = parse_count("SAR_GLOBE_SAMPLES", value)?;
        }
        if let Some(value) = get("SAR_GLOBE_MAX_SAMPLES") {
            config.max_samples_per_location = parse_count("SAR_GLOBE_MAX_SAMPLES", value)?;
        }
        if let Some(value) = get("SAR_GLOBE_TEXTURE_URL") {
            config.globe_texture_url = value;
        }
        if config.samples_per_location > config.max_samples_per_location {
            return Err(ConfigError::SampleLimit {
                samples: config.samples_per_location,
                max: config.max_samples_per_location,
            });
        }

        Ok(config)
    }
}

fn parse_count(var: &'static str, value: String) -> Result<i64, ConfigError> {
    let count: i64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Number { var, value })?;
    if count < 0 {
        return Err(ConfigError::Range { var, value: count });
    }
    Ok(count)
}
