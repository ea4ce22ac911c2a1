use crate::core::FrameRect;
use crate::error::{OverlayError, OverlayResult};
use crate::render::{RectPrimitive, ShadowPrimitive, TextPrimitive};

/// Backend-agnostic scene for one overlay draw pass.
///
/// Primitives are painted in field order: shadows, then rects, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub bounds: FrameRect,
    pub shadows: Vec<ShadowPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(bounds: FrameRect) -> Self {
        Self {
            bounds,
            shadows: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_shadow(mut self, shadow: ShadowPrimitive) -> Self {
        self.shadows.push(shadow);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> OverlayResult<()> {
        if !self.bounds.is_valid() {
            return Err(OverlayError::InvalidData(format!(
                "frame bounds must be finite and non-empty: {:?}",
                self.bounds
            )));
        }

        for shadow in &self.shadows {
            shadow.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    /// Bounds grown to cover every shadow, for sizing offscreen surfaces.
    #[must_use]
    pub fn paint_extent(&self) -> FrameRect {
        self.shadows
            .iter()
            .map(|shadow| shadow.extent())
            .fold(self.bounds, |acc, extent| {
                let x = acc.x.min(extent.x);
                let y = acc.y.min(extent.y);
                FrameRect::new(
                    x,
                    y,
                    acc.right().max(extent.right()) - x,
                    acc.bottom().max(extent.bottom()) - y,
                )
            })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shadows.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}
