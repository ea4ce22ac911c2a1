use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{OverlayError, OverlayResult};
use crate::render::Color;

/// Host platform family. The two variants differ only in panel chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Phone/tablet-style hosts: grey shadow, white panel, hairline stroke.
    Touch,
    /// Desktop hosts: highlight shadow, window-background panel, 2px stroke.
    Desktop,
}

impl Platform {
    /// Platform family of the compilation target.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(any(target_os = "ios", target_os = "android")) {
            Self::Touch
        } else {
            Self::Desktop
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// Platform-dependent panel colors and stroke width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformChrome {
    pub shadow_color: Color,
    pub background_color: Color,
    pub stroke_width_px: f64,
}

const PLATFORM_CHROME: [(Platform, PlatformChrome); 2] = [
    (
        Platform::Touch,
        PlatformChrome {
            // systemGray
            shadow_color: Color::rgb(0.557, 0.557, 0.576),
            background_color: Color::WHITE,
            stroke_width_px: 1.0,
        },
    ),
    (
        Platform::Desktop,
        PlatformChrome {
            shadow_color: Color::WHITE,
            // windowBackgroundColor (light appearance)
            background_color: Color::rgb(0.925, 0.925, 0.925),
            stroke_width_px: 2.0,
        },
    ),
];

impl PlatformChrome {
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        PLATFORM_CHROME
            .iter()
            .find(|(candidate, _)| *candidate == platform)
            .map(|(_, chrome)| *chrome)
            .unwrap_or(PLATFORM_CHROME[1].1)
    }

    pub fn validate(self) -> OverlayResult<()> {
        self.shadow_color.validate()?;
        self.background_color.validate()?;
        if !self.stroke_width_px.is_finite() || self.stroke_width_px < 0.0 {
            return Err(OverlayError::InvalidConfig(
                "stroke width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Platform-independent geometry and typography of the overlay panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayBoxStyle {
    pub padding_px: f64,
    pub corner_radius_px: f64,
    pub shadow_radius_px: f64,
    pub shadow_offset_x_px: f64,
    pub shadow_offset_y_px: f64,
    pub line_spacing_px: f64,
    pub value_font_size_px: f64,
    pub description_font_size_px: f64,
    /// Stroke color of the panel border.
    pub foreground_color: Color,
}

impl Default for OverlayBoxStyle {
    fn default() -> Self {
        Self {
            padding_px: 8.0,
            corner_radius_px: 15.0,
            shadow_radius_px: 6.0,
            shadow_offset_x_px: 0.0,
            shadow_offset_y_px: 0.0,
            line_spacing_px: 8.0,
            value_font_size_px: 17.0,
            description_font_size_px: 17.0,
            foreground_color: Color::BLACK,
        }
    }
}

impl OverlayBoxStyle {
    /// Panel origin that puts the top-left corner of the paint extent (panel
    /// plus blurred, offset shadow) at `(0, 0)`.
    #[must_use]
    pub fn shadow_inset(self) -> Point {
        Point::new(
            (self.shadow_radius_px - self.shadow_offset_x_px).max(0.0),
            (self.shadow_radius_px - self.shadow_offset_y_px).max(0.0),
        )
    }

    pub fn validate(self) -> OverlayResult<()> {
        for (name, value) in [
            ("padding_px", self.padding_px),
            ("corner_radius_px", self.corner_radius_px),
            ("shadow_radius_px", self.shadow_radius_px),
            ("line_spacing_px", self.line_spacing_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(OverlayError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("shadow_offset_x_px", self.shadow_offset_x_px),
            ("shadow_offset_y_px", self.shadow_offset_y_px),
        ] {
            if !value.is_finite() {
                return Err(OverlayError::InvalidConfig(format!(
                    "`{name}` must be finite"
                )));
            }
        }
        for (name, value) in [
            ("value_font_size_px", self.value_font_size_px),
            ("description_font_size_px", self.description_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OverlayError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        self.foreground_color.validate()
    }
}
