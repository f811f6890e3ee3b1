//! Control configuration
//!
//! [`SlideUnlockConfig`] is fixed at construction. It can be built in code
//! with the builder-style setters or loaded from TOML:
//!
//! ```toml
//! track_color = "#FFFFFF"
//! thumb_color = 0xE53935
//! thumb_shape = "square"
//! thumb_width = 72.0
//! thumb_content = "text"
//! thumb_text = ">>"
//! hint_text = "Slide to unlock"
//! shine_effect = true
//! padding = { left = 4.0, top = 4.0, right = 4.0, bottom = 4.0 }
//! ```
//!
//! Colors are `0xRRGGBB` / `0xAARRGGBB` integers or `"#RRGGBB"` / `"#AARRGGBB"`
//! strings. `icon` is a path to an image file, resolved relative to the
//! config file when loaded with [`SlideUnlockConfig::from_toml_file`].

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::Deserialize;
use slidelock_animation::Easing;
use slidelock_core::{Color, FontWeight};

use crate::error::{Result, SlideUnlockError};

/// Thumb outline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbShape {
    /// Diameter equals the padded control height; `thumb_width` is ignored
    #[default]
    Circle,
    /// Rounded rectangle of `thumb_width`
    Square,
}

/// What is drawn inside the thumb
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbContent {
    #[default]
    Icon,
    Text,
}

/// Label weight for the hint and thumb text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    #[default]
    Default,
    Bold,
}

impl LabelStyle {
    pub fn font_weight(self) -> FontWeight {
        match self {
            LabelStyle::Default => FontWeight::Regular,
            LabelStyle::Bold => FontWeight::Bold,
        }
    }
}

/// Control padding in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Where the thumb icon comes from
#[derive(Clone, Debug, PartialEq)]
pub enum IconSource {
    /// Image file on disk (PNG)
    File(PathBuf),
    /// Encoded image bytes
    Bytes(Vec<u8>),
    /// Already decoded RGBA pixels
    Bitmap(RgbaImage),
}

/// Slide control configuration
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SlideUnlockConfig {
    /// Track background color
    #[serde(with = "color")]
    pub track_color: Color,
    /// Track corner radius (None = control height, a full pill)
    pub track_corner_radius: Option<f32>,

    /// Thumb background color
    #[serde(with = "color")]
    pub thumb_color: Color,
    /// Thumb width for square thumbs
    pub thumb_width: f32,
    /// Inset of the thumb content from the thumb edges
    pub thumb_padding: f32,
    /// Thumb outline
    pub thumb_shape: ThumbShape,
    /// Square thumb corner radius (None = control height)
    pub thumb_corner_radius: Option<f32>,
    /// Tint for the icon, and color of the thumb text
    #[serde(with = "color::option")]
    pub thumb_tint: Option<Color>,
    /// Thumb content type
    pub thumb_content: ThumbContent,
    /// Icon source, required when `thumb_content` is `icon`
    #[serde(deserialize_with = "deserialize_icon_path")]
    pub icon: Option<IconSource>,
    /// Thumb label, used when `thumb_content` is `text`
    pub thumb_text: String,
    /// Thumb label weight
    pub thumb_text_style: LabelStyle,

    /// Control padding
    pub padding: Padding,

    /// Spring-back duration in milliseconds
    pub resilience_duration_ms: u32,
    /// Spring-back easing curve
    #[serde(skip)]
    pub spring_easing: Easing,

    /// Sweep a highlight across the hint text
    pub shine_effect: bool,
    /// Duration of one shine sweep in milliseconds
    pub shine_duration_ms: u32,

    /// Hint text drawn on the track
    pub hint_text: String,
    /// Hint font size
    pub hint_text_size: f32,
    /// Hint color
    #[serde(with = "color")]
    pub hint_text_color: Color,
    /// Highlight color of the shine sweep
    #[serde(with = "color")]
    pub hint_shine_color: Color,
    /// Hint weight
    pub hint_text_style: LabelStyle,

    /// Track's left edge follows the thumb
    pub track_follows_thumb: bool,
    /// Thumb stretches to the right instead of moving
    pub flexible_thumb: bool,
    /// Hand vertical gestures back to a scrolling ancestor
    pub direction_lock: bool,
    /// Travel before a gesture direction is decided
    pub touch_slop: f32,
}

impl Default for SlideUnlockConfig {
    fn default() -> Self {
        Self {
            track_color: Color::WHITE,
            track_corner_radius: None,
            thumb_color: Color::RED,
            thumb_width: 60.0,
            thumb_padding: 0.0,
            thumb_shape: ThumbShape::Circle,
            thumb_corner_radius: None,
            thumb_tint: None,
            thumb_content: ThumbContent::Icon,
            icon: None,
            thumb_text: String::new(),
            thumb_text_style: LabelStyle::Default,
            padding: Padding::default(),
            resilience_duration_ms: 500,
            spring_easing: Easing::Linear,
            shine_effect: false,
            shine_duration_ms: 3000,
            hint_text: String::new(),
            hint_text_size: 12.0,
            hint_text_color: Color::WHITE,
            hint_shine_color: Color::WHITE,
            hint_text_style: LabelStyle::Default,
            track_follows_thumb: false,
            flexible_thumb: false,
            direction_lock: false,
            touch_slop: 8.0,
        }
    }
}

impl SlideUnlockConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SlideUnlockError::Config(e.to_string()))
    }

    /// Load a config from a TOML file
    ///
    /// A relative `icon` path is resolved against the file's directory.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| SlideUnlockError::Config(format!("{}: {}", path.display(), e)))?;
        let mut config = Self::from_toml_str(&text)?;

        if let Some(IconSource::File(icon)) = &mut config.icon {
            if icon.is_relative() {
                if let Some(dir) = path.parent() {
                    *icon = dir.join(&*icon);
                }
            }
        }

        Ok(config)
    }

    /// Check the config is complete enough to render
    pub fn validate(&self) -> Result<()> {
        if self.thumb_content == ThumbContent::Icon && self.icon.is_none() {
            return Err(SlideUnlockError::MissingIcon);
        }
        Ok(())
    }

    /// Set the track color
    pub fn track_color(mut self, color: impl Into<Color>) -> Self {
        self.track_color = color.into();
        self
    }

    /// Set the track corner radius
    pub fn track_corner_radius(mut self, radius: f32) -> Self {
        self.track_corner_radius = Some(radius);
        self
    }

    /// Set the thumb color
    pub fn thumb_color(mut self, color: impl Into<Color>) -> Self {
        self.thumb_color = color.into();
        self
    }

    /// Set the square thumb width
    pub fn thumb_width(mut self, width: f32) -> Self {
        self.thumb_width = width;
        self
    }

    /// Set the thumb content padding
    pub fn thumb_padding(mut self, padding: f32) -> Self {
        self.thumb_padding = padding;
        self
    }

    /// Set the thumb shape
    pub fn thumb_shape(mut self, shape: ThumbShape) -> Self {
        self.thumb_shape = shape;
        self
    }

    /// Set the square thumb corner radius
    pub fn thumb_corner_radius(mut self, radius: f32) -> Self {
        self.thumb_corner_radius = Some(radius);
        self
    }

    /// Set the icon tint / thumb text color
    pub fn thumb_tint(mut self, color: impl Into<Color>) -> Self {
        self.thumb_tint = Some(color.into());
        self
    }

    /// Use an icon as thumb content
    pub fn icon(mut self, source: IconSource) -> Self {
        self.thumb_content = ThumbContent::Icon;
        self.icon = Some(source);
        self
    }

    /// Use a text label as thumb content
    pub fn thumb_text(mut self, text: impl Into<String>) -> Self {
        self.thumb_content = ThumbContent::Text;
        self.thumb_text = text.into();
        self
    }

    /// Set the thumb label weight
    pub fn thumb_text_style(mut self, style: LabelStyle) -> Self {
        self.thumb_text_style = style;
        self
    }

    /// Set the control padding
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the spring-back duration
    pub fn resilience_duration_ms(mut self, duration_ms: u32) -> Self {
        self.resilience_duration_ms = duration_ms;
        self
    }

    /// Set the spring-back easing curve
    pub fn spring_easing(mut self, easing: Easing) -> Self {
        self.spring_easing = easing;
        self
    }

    /// Enable or disable the shine sweep
    pub fn shine_effect(mut self, enabled: bool) -> Self {
        self.shine_effect = enabled;
        self
    }

    /// Set the shine sweep duration
    pub fn shine_duration_ms(mut self, duration_ms: u32) -> Self {
        self.shine_duration_ms = duration_ms;
        self
    }

    /// Set the hint text
    pub fn hint_text(mut self, text: impl Into<String>) -> Self {
        self.hint_text = text.into();
        self
    }

    /// Set the hint font size
    pub fn hint_text_size(mut self, size: f32) -> Self {
        self.hint_text_size = size;
        self
    }

    /// Set the hint color
    pub fn hint_text_color(mut self, color: impl Into<Color>) -> Self {
        self.hint_text_color = color.into();
        self
    }

    /// Set the shine highlight color
    pub fn hint_shine_color(mut self, color: impl Into<Color>) -> Self {
        self.hint_shine_color = color.into();
        self
    }

    /// Set the hint weight
    pub fn hint_text_style(mut self, style: LabelStyle) -> Self {
        self.hint_text_style = style;
        self
    }

    /// Let the track's left edge follow the thumb
    pub fn track_follows_thumb(mut self, enabled: bool) -> Self {
        self.track_follows_thumb = enabled;
        self
    }

    /// Stretch the thumb instead of moving it
    pub fn flexible_thumb(mut self, enabled: bool) -> Self {
        self.flexible_thumb = enabled;
        self
    }

    /// Release vertical gestures to a scrolling ancestor
    pub fn direction_lock(mut self, enabled: bool) -> Self {
        self.direction_lock = enabled;
        self
    }

    /// Set the touch slop
    pub fn touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }
}

fn deserialize_icon_path<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<IconSource>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let path: Option<PathBuf> = Option::deserialize(deserializer)?;
    Ok(path.map(IconSource::File))
}

/// Color (de)serialization from hex integers or `#`-prefixed strings
mod color {
    use serde::{de, Deserialize, Deserializer};
    use slidelock_core::Color;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(u32),
        Text(String),
    }

    fn from_repr<E: de::Error>(repr: Repr) -> Result<Color, E> {
        match repr {
            Repr::Int(value) => Ok(from_int(value)),
            Repr::Text(text) => parse_str(&text).ok_or_else(|| {
                E::custom(format!(
                    "invalid color `{text}`, expected #RRGGBB or #AARRGGBB"
                ))
            }),
        }
    }

    fn from_int(value: u32) -> Color {
        if value > 0x00FF_FFFF {
            Color::from_argb(value)
        } else {
            Color::from_hex(value)
        }
    }

    pub(super) fn parse_str(text: &str) -> Option<Color> {
        let hex = text.strip_prefix('#')?;
        let value = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            6 => Some(Color::from_hex(value)),
            8 => Some(Color::from_argb(value)),
            _ => None,
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        from_repr(Repr::deserialize(deserializer)?)
    }

    pub mod option {
        use super::*;

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Color>, D::Error> {
            Option::<Repr>::deserialize(deserializer)?
                .map(from_repr)
                .transpose()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SlideUnlockConfig::default();
        assert_eq!(config.track_color, Color::WHITE);
        assert_eq!(config.thumb_color, Color::RED);
        assert_eq!(config.thumb_width, 60.0);
        assert_eq!(config.thumb_shape, ThumbShape::Circle);
        assert_eq!(config.thumb_content, ThumbContent::Icon);
        assert_eq!(config.resilience_duration_ms, 500);
        assert!(!config.shine_effect);
        assert_eq!(config.shine_duration_ms, 3000);
        assert_eq!(config.hint_text_size, 12.0);
        assert_eq!(config.touch_slop, 8.0);
    }

    #[test]
    fn test_missing_icon_is_rejected() {
        let config = SlideUnlockConfig::default();
        assert!(matches!(
            config.validate(),
            Err(SlideUnlockError::MissingIcon)
        ));

        let config = SlideUnlockConfig::new().thumb_text(">>");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = SlideUnlockConfig::from_toml_str(
            r##"
            track_color = "#80102030"
            thumb_color = 0x00FF00
            thumb_tint = "#FFFFFF"
            thumb_shape = "square"
            thumb_width = 72.0
            thumb_content = "text"
            thumb_text = "Go"
            thumb_text_style = "bold"
            shine_effect = true
            padding = { left = 4.0, right = 4.0 }
            "##,
        )
        .unwrap();

        assert!((config.track_color.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(config.thumb_color, Color::GREEN);
        assert_eq!(config.thumb_tint, Some(Color::WHITE));
        assert_eq!(config.thumb_shape, ThumbShape::Square);
        assert_eq!(config.thumb_width, 72.0);
        assert_eq!(config.thumb_content, ThumbContent::Text);
        assert_eq!(config.thumb_text_style, LabelStyle::Bold);
        assert!(config.shine_effect);
        assert_eq!(config.padding, Padding::new(4.0, 0.0, 4.0, 0.0));
        // Untouched keys keep their defaults
        assert_eq!(config.resilience_duration_ms, 500);
    }

    #[test]
    fn test_icon_path_from_toml() {
        let config = SlideUnlockConfig::from_toml_str(r#"icon = "assets/arrow.png""#).unwrap();
        assert_eq!(
            config.icon,
            Some(IconSource::File(PathBuf::from("assets/arrow.png")))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_color_is_a_config_error() {
        let err = SlideUnlockConfig::from_toml_str(r#"thumb_color = "red""#).unwrap_err();
        assert!(matches!(err, SlideUnlockError::Config(_)));
    }

    #[test]
    fn test_parse_color_strings() {
        assert_eq!(color::parse_str("#FF0000"), Some(Color::RED));
        assert_eq!(color::parse_str("FF0000"), None);
        assert_eq!(color::parse_str("#F00"), None);
    }
}
