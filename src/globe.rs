use serde::Serialize;

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointColors {
    pub high_intensity: &'static str,
    pub medium_intensity: &'static str,
    pub low_intensity: &'static str,
}

/// Durations are in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationSettings {
    pub pulse_duration: u32,
    pub fade_in_duration: u32,
    pub rotation_enabled: bool,
    pub auto_rotate_speed: f32,
}

/// Rendering hints for the globe client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobeSettings {
    pub rotation_speed: f32,
    pub japan_highlight_color: &'static str,
    pub earth_texture: String,
    pub atmosphere_color: &'static str,
    pub atmosphere_opacity: f32,
    pub point_colors: PointColors,
    pub animation_settings: AnimationSettings,
}

impl GlobeSettings {
    pub fn new(config: &AppConfig) -> Self {
        GlobeSettings {
            rotation_speed: 0.002,
            japan_highlight_color: "#ff0000",
            earth_texture: config.globe_texture_url.clone(),
            atmosphere_color: "#ffffff",
            atmosphere_opacity: 0.1,
            point_colors: PointColors {
                high_intensity: "#ff4444",
                medium_intensity: "#ffaa44",
                low_intensity: "#44ff44",
            },
            animation_settings: AnimationSettings {
                pulse_duration: 2000,
                fade_in_duration: 1500,
                rotation_enabled: true,
                auto_rotate_speed: 0.5,
            },
        }
    }
}
