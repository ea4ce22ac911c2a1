use serde::{Deserialize, Serialize};

use crate::core::FrameRect;
use crate::error::{OverlayError, OverlayResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels.
    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> OverlayResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(OverlayError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn validate_geometry(kind: &str, x: f64, y: f64, width: f64, height: f64) -> OverlayResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(OverlayError::InvalidData(format!(
            "{kind} origin must be finite"
        )));
    }
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(OverlayError::InvalidData(format!(
            "{kind} size must be finite and > 0"
        )));
    }
    Ok(())
}

/// Filled (optionally stroked, optionally rounded) rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub fn from_frame(frame: FrameRect, fill_color: Color) -> Self {
        Self::new(frame.x, frame.y, frame.width, frame.height, fill_color)
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn frame(self) -> FrameRect {
        FrameRect::new(self.x, self.y, self.width, self.height)
    }

    pub fn validate(self) -> OverlayResult<()> {
        validate_geometry("rect", self.x, self.y, self.width, self.height)?;
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(OverlayError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(OverlayError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Blurred drop shadow cast by a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub blur_radius: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub color: Color,
}

impl ShadowPrimitive {
    #[must_use]
    pub fn under(rect: RectPrimitive, blur_radius: f64, color: Color) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            corner_radius: rect.corner_radius,
            blur_radius,
            offset_x: 0.0,
            offset_y: 0.0,
            color,
        }
    }

    #[must_use]
    pub const fn with_offset(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Area touched by the shadow once blur and offset are applied.
    #[must_use]
    pub fn extent(self) -> FrameRect {
        FrameRect::new(self.x, self.y, self.width, self.height)
            .translated(self.offset_x, self.offset_y)
            .outset(self.blur_radius)
    }

    pub fn validate(self) -> OverlayResult<()> {
        validate_geometry("shadow", self.x, self.y, self.width, self.height)?;
        if !self.blur_radius.is_finite() || self.blur_radius < 0.0 {
            return Err(OverlayError::InvalidData(
                "shadow blur radius must be finite and >= 0".to_owned(),
            ));
        }
        if !self.offset_x.is_finite() || !self.offset_y.is_finite() {
            return Err(OverlayError::InvalidData(
                "shadow offset must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label. `y` is the top of the line box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> OverlayResult<()> {
        if self.text.is_empty() {
            return Err(OverlayError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(OverlayError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(OverlayError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
