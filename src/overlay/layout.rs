use crate::core::{FrameRect, Point, Size};
use crate::render::{RectPrimitive, RenderFrame, ShadowPrimitive, TextHAlign, TextPrimitive};

use super::content::{OverlayLineKind, OverlayTree};
use super::style::{OverlayBoxStyle, PlatformChrome};
use super::text_metrics::TextMeasurer;

/// Resolved geometry of one overlay box.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayout {
    /// Panel bounds in the caller's coordinate space. This is the reported
    /// frame.
    pub frame: FrameRect,
    /// Panel bounds minus padding.
    pub content: FrameRect,
    /// One rect per tree line, same order. Empty lines get a zero-size rect.
    pub line_frames: Vec<FrameRect>,
}

fn font_size_for(kind: OverlayLineKind, style: &OverlayBoxStyle) -> f64 {
    match kind {
        OverlayLineKind::Value => style.value_font_size_px,
        OverlayLineKind::Description => style.description_font_size_px,
    }
}

/// Vertical stack layout: rows centred horizontally, separated by
/// `line_spacing_px`, wrapped in `padding_px` on every side.
pub fn layout_tree<M: TextMeasurer + ?Sized>(
    tree: &OverlayTree,
    origin: Point,
    style: &OverlayBoxStyle,
    measurer: &M,
) -> OverlayLayout {
    let sizes: Vec<Size> = tree
        .lines
        .iter()
        .map(|line| measurer.measure(&line.text, font_size_for(line.kind, style)))
        .collect();

    let visible = sizes.iter().filter(|size| size.height > 0.0).count();
    let content_width = sizes.iter().fold(0.0_f64, |acc, size| acc.max(size.width));
    let content_height = sizes.iter().map(|size| size.height).sum::<f64>()
        + style.line_spacing_px * visible.saturating_sub(1) as f64;

    let padding = style.padding_px;
    let content = FrameRect::new(
        origin.x + padding,
        origin.y + padding,
        content_width,
        content_height,
    );
    let frame = content.outset(padding);

    let mut cursor_y = content.y;
    let mut line_frames = Vec::with_capacity(sizes.len());
    for size in &sizes {
        if size.height <= 0.0 {
            line_frames.push(FrameRect::new(content.center().x, cursor_y, 0.0, 0.0));
            continue;
        }
        let x = content.x + (content_width - size.width) * 0.5;
        line_frames.push(FrameRect::new(x, cursor_y, size.width, size.height));
        cursor_y += size.height + style.line_spacing_px;
    }

    OverlayLayout {
        frame,
        content,
        line_frames,
    }
}

/// Materializes panel chrome and text rows as draw primitives.
#[must_use]
pub fn build_render_frame(
    tree: &OverlayTree,
    layout: &OverlayLayout,
    style: &OverlayBoxStyle,
    chrome: PlatformChrome,
) -> RenderFrame {
    let panel = RectPrimitive::from_frame(layout.frame, chrome.background_color)
        .with_corner_radius(style.corner_radius_px)
        .with_border(chrome.stroke_width_px, style.foreground_color);
    let shadow = ShadowPrimitive::under(panel, style.shadow_radius_px, chrome.shadow_color)
        .with_offset(style.shadow_offset_x_px, style.shadow_offset_y_px);

    let mut frame = RenderFrame::new(layout.frame)
        .with_shadow(shadow)
        .with_rect(panel);

    for (line, line_frame) in tree.lines.iter().zip(&layout.line_frames) {
        if line.text.is_empty() {
            continue;
        }
        frame.texts.push(TextPrimitive::new(
            line.text.clone(),
            line_frame.center().x,
            line_frame.y,
            font_size_for(line.kind, style),
            line.color,
            TextHAlign::Center,
        ));
    }

    frame
}
