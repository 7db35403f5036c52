//! Chart configuration.
//!
//! Every size, color and text knob the chart uses lives in [`ChartConfig`].
//! The config is stored as JSON with `#RRGGBB` / `#RRGGBBAA` color strings so
//! it can be hand-edited. All structs carry `#[serde(default)]`, so a partial
//! file is valid and missing keys fall back to the built-in defaults.

use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ConfigError;

// ─── Hex-colour serde helpers ───────────────────────────────────────────────

pub mod hex_color {
    use egui::Color32;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use crate::error::ConfigError;

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }

    pub fn to_hex(color: Color32) -> String {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    pub fn parse_hex_color(s: &str) -> Result<Color32, ConfigError> {
        let digits = s.trim().trim_start_matches('#');
        let invalid = || ConfigError::InvalidColor(s.to_string());
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color32::from_rgba_unmultiplied(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => Err(invalid()),
        }
    }
}

mod hex_color_vec {
    use egui::Color32;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(colors: &[Color32], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(colors.len()))?;
        for c in colors {
            seq.serialize_element(&super::hex_color::to_hex(*c))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Color32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let strings: Vec<String> = Vec::deserialize(deserializer)?;
        strings
            .iter()
            .map(|s| super::hex_color::parse_hex_color(s).map_err(serde::de::Error::custom))
            .collect()
    }
}

// ─── Top-level definition ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub sizing: ChartSizing,
    pub labels: ChartLabels,
    pub colors: ChartColors,
    /// Longest window, in days, that is rendered. Wider windows are cut.
    pub max_day_span: u32,
    /// Factor applied to a bar's color while the pointer is over it.
    pub hover_brightness: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            sizing: ChartSizing::default(),
            labels: ChartLabels::default(),
            colors: ChartColors::default(),
            max_day_span: 366,
            hover_brightness: 1.15,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let s = &self.sizing;
        for (field, value) in [
            ("bar_height", s.bar_height),
            ("day_width", s.day_width),
            ("label_px_per_char", self.labels.px_per_char),
            ("hover_brightness", self.hover_brightness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        for (field, value) in [
            ("lane_gap", s.lane_gap),
            ("row_padding", s.row_padding),
            ("left_margin", s.left_margin),
            ("header_height", s.header_height),
            ("scene_margin", s.scene_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    /// Height of one lane slot: a bar plus the gap below it.
    pub fn lane_pitch(&self) -> f32 {
        self.sizing.bar_height + self.sizing.lane_gap
    }
}

// ─── Sizing ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSizing {
    pub bar_height: f32,
    pub lane_gap: f32,
    /// Space above the first lane of every row; also added once to the row height.
    pub row_padding: f32,
    /// Default horizontal scale in pixels per day.
    pub day_width: f32,
    /// Width of the resource-label column left of the day grid.
    pub left_margin: f32,
    pub header_height: f32,
    /// Blank space kept right of and below the scene.
    pub scene_margin: f32,
}

impl Default for ChartSizing {
    fn default() -> Self {
        Self {
            bar_height: 20.0,
            lane_gap: 5.0,
            row_padding: 15.0,
            day_width: 20.0,
            left_margin: 200.0,
            header_height: 30.0,
            scene_margin: 50.0,
        }
    }
}

// ─── Labels ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLabels {
    /// In-bar text is only drawn on bars wider than this.
    pub min_bar_width: f32,
    /// Pixels budgeted per character when truncating in-bar text.
    pub px_per_char: f32,
    /// Windows spanning at least this many days label every other day.
    pub dense_header_days: i64,
    pub resource_name_max_chars: usize,
    /// Event fields joined, in this order, into the bar's info string.
    pub info_fields: Vec<String>,
    pub info_separator: String,
    pub no_data_text: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            min_bar_width: 20.0,
            px_per_char: 5.0,
            dense_header_days: 15,
            resource_name_max_chars: 25,
            info_fields: [
                "factory",
                "project",
                "phase",
                "category",
                "qty",
                "request_no",
                "requester",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            info_separator: "_".into(),
            no_data_text: "No data in the selected time range.".into(),
        }
    }
}

// ─── Colors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartColors {
    /// Category colors, handed out in order and reused once exhausted.
    #[serde(with = "hex_color_vec")]
    pub palette: Vec<Color32>,
    #[serde(with = "hex_color")]
    pub header_text: Color32,
    #[serde(with = "hex_color")]
    pub today_text: Color32,
    #[serde(with = "hex_color")]
    pub resource_name: Color32,
    #[serde(with = "hex_color")]
    pub resource_code: Color32,
    #[serde(with = "hex_color")]
    pub bar_text: Color32,
    #[serde(with = "hex_color")]
    pub row_top_line: Color32,
    #[serde(with = "hex_color")]
    pub row_bottom_line: Color32,
    #[serde(with = "hex_color")]
    pub today_marker: Color32,
    #[serde(with = "hex_color")]
    pub placeholder_text: Color32,
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            palette: vec![
                Color32::from_rgb(0xFF, 0xB7, 0xB2),
                Color32::from_rgb(0xFF, 0xDA, 0xC1),
                Color32::from_rgb(0xE2, 0xF0, 0xCB),
                Color32::from_rgb(0xB5, 0xEA, 0xD7),
                Color32::from_rgb(0xC7, 0xCE, 0xEA),
                Color32::from_rgb(0xF8, 0xBB, 0xD0),
                Color32::from_rgb(0xE1, 0xBE, 0xE7),
                Color32::from_rgb(0xD1, 0xC4, 0xE9),
                Color32::from_rgb(0xC5, 0xCA, 0xE9),
                Color32::from_rgb(0xBB, 0xDE, 0xFB),
                Color32::from_rgb(0xB3, 0xE5, 0xFC),
                Color32::from_rgb(0xB2, 0xEB, 0xF2),
                Color32::from_rgb(0xB2, 0xDF, 0xDB),
                Color32::from_rgb(0xC8, 0xE6, 0xC9),
                Color32::from_rgb(0xDC, 0xED, 0xC8),
                Color32::from_rgb(0xF0, 0xF4, 0xC3),
                Color32::from_rgb(0xFF, 0xF9, 0xC4),
                Color32::from_rgb(0xFF, 0xEC, 0xB3),
                Color32::from_rgb(0xFF, 0xE0, 0xB2),
                Color32::from_rgb(0xFF, 0xCC, 0xBC),
            ],
            header_text: Color32::from_rgb(128, 128, 128),
            today_text: Color32::from_rgb(255, 0, 0),
            resource_name: Color32::from_rgb(0x15, 0x65, 0xC0),
            resource_code: Color32::from_rgb(0x77, 0x77, 0x77),
            bar_text: Color32::from_rgb(0x21, 0x21, 0x21),
            row_top_line: Color32::from_rgb(0xF5, 0xF5, 0xF5),
            row_bottom_line: Color32::from_rgb(0xE0, 0xE0, 0xE0),
            today_marker: Color32::from_rgb(0xFF, 0x52, 0x52),
            placeholder_text: Color32::from_rgb(0x61, 0x61, 0x61),
        }
    }
}

// ─── Persistence ────────────────────────────────────────────────────────────

/// Settings remembered between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub last_data_file: Option<PathBuf>,
}

/// Locates and reads the chart config and app settings in the OS config
/// directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub const CHART_FILE: &'static str = "chart.json";
    pub const SETTINGS_FILE: &'static str = "settings.json";
    pub const REFERENCE_FILE: &'static str = "_reference_chart.json";

    /// Store rooted at the platform config directory, or the working
    /// directory when none can be determined.
    pub fn discover() -> Self {
        let dir = directories::ProjectDirs::from("", "", "EquipGantt")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::at(dir)
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn chart_path(&self) -> PathBuf {
        self.dir.join(Self::CHART_FILE)
    }

    /// Read and validate a config file.
    pub fn read_chart(path: &Path) -> Result<ChartConfig, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ChartConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// The user's chart config, or the defaults when the file is absent or
    /// unusable. Writes a reference copy of the defaults on first run.
    pub fn load_chart(&self) -> ChartConfig {
        self.write_reference();
        let path = self.chart_path();
        if !path.exists() {
            return ChartConfig::default();
        }
        match Self::read_chart(&path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded chart config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring chart config, using defaults");
                ChartConfig::default()
            }
        }
    }

    pub fn load_settings(&self) -> AppSettings {
        std::fs::read_to_string(self.dir.join(Self::SETTINGS_FILE))
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn save_settings(&self, settings: &AppSettings) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(settings)?;
        let path = self.dir.join(Self::SETTINGS_FILE);
        std::fs::create_dir_all(&self.dir)
            .and_then(|_| std::fs::write(&path, json))
            .map_err(|source| ConfigError::Io { path, source })
    }

    fn write_reference(&self) {
        let path = self.dir.join(Self::REFERENCE_FILE);
        if path.exists() {
            return;
        }
        let written = serde_json::to_string_pretty(&ChartConfig::default())
            .map_err(ConfigError::from)
            .and_then(|json| {
                std::fs::create_dir_all(&self.dir)
                    .and_then(|_| std::fs::write(&path, json))
                    .map_err(|source| ConfigError::Io {
                        path: path.clone(),
                        source,
                    })
            });
        if let Err(e) = written {
            warn!(error = %e, "could not write reference chart config");
        }
    }
}
