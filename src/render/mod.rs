mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, RectPrimitive, ShadowPrimitive, TextHAlign, TextPrimitive};

use crate::error::OverlayResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully laid-out `RenderFrame`, so drawing code never
/// sees selection data or styling decisions.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> OverlayResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{
    CairoContextRenderer, CairoRenderStats, CairoRenderer, PangoTextMeasurer,
};
