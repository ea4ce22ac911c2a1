use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::core::Size;
use crate::error::{OverlayError, OverlayResult};
use crate::overlay::TextMeasurer;
use crate::render::{
    Color, RectPrimitive, RenderFrame, Renderer, ShadowPrimitive, TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub shadows_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into an external Cairo context (for example a GTK
/// `DrawingArea` draw function).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> OverlayResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Offscreen rendering through `Renderer::render` shifts the frame so its
/// paint extent (panel plus shadow) starts at the surface origin. Rendering
/// on an external context keeps the frame's own coordinates.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Option<Color>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> OverlayResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(OverlayError::InvalidSurface { width, height });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: None,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Color painted under the overlay on offscreen renders. `None` keeps the
    /// surface transparent.
    pub fn set_clear_color(&mut self, color: Option<Color>) -> OverlayResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> OverlayResult<()> {
        frame.validate()?;
        let mut stats = CairoRenderStats::default();

        for shadow in &frame.shadows {
            draw_shadow(context, *shadow)?;
            stats.shadows_drawn += 1;
        }

        for rect in &frame.rects {
            append_rounded_rect_path(
                context,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                rect.corner_radius,
            );
            apply_color(context, rect.fill_color);
            if rect.border_width > 0.0 {
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                stroke_inside(context, *rect)?;
            } else {
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            }
            stats.rects_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            layout.set_font_description(Some(&font_description(text.font_size_px)));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            context.move_to(x, text.y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> OverlayResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        context.set_operator(cairo::Operator::Source);
        apply_color(
            &context,
            self.clear_color.unwrap_or(Color::rgba(0.0, 0.0, 0.0, 0.0)),
        );
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_operator(cairo::Operator::Over);

        let extent = frame.paint_extent();
        context.translate(-extent.x, -extent.y);
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> OverlayResult<()> {
        self.render_with_context(context, frame)
    }
}

/// Text measurement backed by Pango, matching what `CairoRenderer` draws.
#[derive(Debug)]
pub struct PangoTextMeasurer {
    context: Context,
}

impl PangoTextMeasurer {
    pub fn new() -> OverlayResult<Self> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)
            .map_err(|err| map_backend_error("failed to create measuring surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create measuring context", err))?;
        Ok(Self { context })
    }
}

impl TextMeasurer for PangoTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&font_description(font_size_px)));
        layout.set_text(text);
        let (width, height) = layout.pixel_size();
        Size::new(f64::from(width), f64::from(height))
    }
}

fn font_description(font_size_px: f64) -> FontDescription {
    FontDescription::from_string(&format!("Sans {font_size_px}"))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

/// Keeps the border inside the fill so the stroke never widens the panel.
fn stroke_inside(context: &Context, rect: RectPrimitive) -> OverlayResult<()> {
    let inset = rect.border_width * 0.5;
    context.new_path();
    append_rounded_rect_path(
        context,
        rect.x + inset,
        rect.y + inset,
        (rect.width - rect.border_width).max(0.0),
        (rect.height - rect.border_width).max(0.0),
        (rect.corner_radius - inset).max(0.0),
    );
    apply_color(context, rect.border_color);
    context.set_line_width(rect.border_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
}

/// Approximates a gaussian blur with concentric translucent rounded rects.
fn draw_shadow(context: &Context, shadow: ShadowPrimitive) -> OverlayResult<()> {
    let steps = shadow.blur_radius.ceil().max(1.0) as usize;
    let layer_alpha = shadow.color.alpha / (steps as f64 + 1.0);
    let x = shadow.x + shadow.offset_x;
    let y = shadow.y + shadow.offset_y;

    for step in (0..=steps).rev() {
        let spread = shadow.blur_radius * step as f64 / steps as f64;
        append_rounded_rect_path(
            context,
            x - spread,
            y - spread,
            shadow.width + 2.0 * spread,
            shadow.height + 2.0 * spread,
            shadow.corner_radius + spread,
        );
        apply_color(context, shadow.color.with_alpha(layer_alpha));
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill shadow", err))?;
    }
    Ok(())
}

fn append_rounded_rect_path(
    context: &Context,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    corner_radius: f64,
) {
    if corner_radius <= 0.0 {
        context.rectangle(x, y, width, height);
        return;
    }

    let radius = corner_radius.min(width * 0.5).min(height * 0.5);
    let right = x + width;
    let bottom = y + height;

    context.new_sub_path();
    context.arc(right - radius, y + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(x + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(x + radius, y + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> OverlayError {
    OverlayError::InvalidData(format!("{prefix}: {err}"))
}
