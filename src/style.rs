use std::{fs, path::Path};

use egui::Color32;
use fully_pub::fully_pub;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Cosmetic flavour of the bar. `Flag` ends in a decoration circle holding an icon, `Plain` is just the capsule.
#[derive(EnumIter, Display, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarVariant {
    #[default]
    Flag,
    Plain,
}

/// Styling attributes for the bar. All lengths are in points.
#[fully_pub]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    variant: BarVariant,

    flag_icon: Option<String>, // A glyph, usually one of the material icons.
    flag_icon_padding: f32,
    #[serde(with = "hex_color")]
    flag_icon_color: Color32,

    segment_bar_height: f32,
    segment_bar_spacing: f32,
    bg_bar_height: f32,
    bg_circle_radius: f32,

    #[serde(with = "hex_color")]
    bg_color: Color32,
    #[serde(with = "hex_color")]
    segment_bar_bg_color: Color32,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            variant: BarVariant::Flag,
            flag_icon: Some(egui_material_icons::icons::ICON_FLAG.to_owned()),
            flag_icon_padding: 6.0,
            flag_icon_color: Color32::from_rgb(0xf9, 0x67, 0x12),
            segment_bar_height: 8.0,
            segment_bar_spacing: 3.0,
            bg_bar_height: 14.0,
            bg_circle_radius: 16.0,
            bg_color: Color32::from_rgb(0xee, 0xee, 0xee),
            segment_bar_bg_color: Color32::WHITE,
        }
    }
}

impl BarStyle {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| format!("Unable to read style file {}: {}", path.display(), e))?;
        Self::from_json(&json).map_err(|e| format!("Invalid style file {}: {}", path.display(), e))
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }

    /// Space reserved at the right end of the track for the decoration circle.
    pub fn cap_radius(&self) -> f32 {
        match self.variant {
            BarVariant::Flag => self.bg_circle_radius.max(0.0),
            BarVariant::Plain => 0.0,
        }
    }

    pub fn min_height(&self) -> f32 {
        (self.cap_radius() * 2.0).max(self.segment_bar_height).max(self.bg_bar_height)
    }
}

mod hex_color {
    use egui::Color32;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color32::from_hex(&text).map_err(|e| D::Error::custom(format!("invalid color '{}': {:?}", text, e)))
    }
}
