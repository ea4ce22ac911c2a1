use tracing::{debug, trace};

use crate::core::{FrameRect, Point, SelectedPoint};
use crate::error::OverlayResult;
use crate::render::{RenderFrame, Renderer};

use super::config::OverlayConfig;
use super::content::OverlayTree;
use super::frame_report::FrameSink;
use super::layout::{OverlayLayout, build_render_frame, layout_tree};
use super::selection_box::SelectionOverlayBox;
use super::text_metrics::{EstimatedTextMeasurer, TextMeasurer};

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPass {
    pub tree: OverlayTree,
    pub layout: OverlayLayout,
    pub frame: RenderFrame,
}

impl OverlayPass {
    /// Panel bounds reported to the frame sink.
    #[must_use]
    pub fn box_frame(&self) -> FrameRect {
        self.layout.frame
    }
}

/// Runs layout passes for overlay boxes, reports their frames and hands the
/// resulting scene to a renderer.
pub struct OverlayPresenter<R: Renderer, S: FrameSink> {
    renderer: R,
    sink: S,
    config: OverlayConfig,
    measurer: Box<dyn TextMeasurer>,
    passes: u64,
    last_frame: Option<FrameRect>,
}

impl<R: Renderer, S: FrameSink> OverlayPresenter<R, S> {
    pub fn new(renderer: R, sink: S, config: OverlayConfig) -> OverlayResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            sink,
            config,
            measurer: Box::new(EstimatedTextMeasurer::default()),
            passes: 0,
            last_frame: None,
        })
    }

    #[must_use]
    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn layout_passes(&self) -> u64 {
        self.passes
    }

    /// Lays out `overlay` with its top-left corner at `origin` and reports the
    /// resolved panel frame to the sink. Every pass reports, even when the
    /// frame is unchanged.
    pub fn layout<P: SelectedPoint>(
        &mut self,
        overlay: &SelectionOverlayBox<'_, P>,
        origin: Point,
    ) -> OverlayPass {
        let tree = overlay.render();
        let style = self.config.style;
        let layout = layout_tree(&tree, origin, &style, self.measurer.as_ref());
        let frame = build_render_frame(&tree, &layout, &style, self.config.resolved_chrome());

        self.passes += 1;
        trace!(
            pass = self.passes,
            points = overlay.selected_points().len(),
            value_lines = tree.value_line_count(),
            description_lines = tree.description_line_count(),
            "overlay layout pass"
        );

        let box_frame = layout.frame;
        if self.last_frame != Some(box_frame) {
            debug!(frame = ?box_frame, "overlay frame changed");
            self.last_frame = Some(box_frame);
        }
        self.sink.frame_resolved(box_frame);

        OverlayPass {
            tree,
            layout,
            frame,
        }
    }

    /// Layout pass followed by a draw through the renderer.
    pub fn render<P: SelectedPoint>(
        &mut self,
        overlay: &SelectionOverlayBox<'_, P>,
        origin: Point,
    ) -> OverlayResult<FrameRect> {
        let pass = self.layout(overlay, origin);
        self.renderer.render(&pass.frame)?;
        Ok(pass.box_frame())
    }

    #[must_use]
    pub fn into_parts(self) -> (R, S) {
        (self.renderer, self.sink)
    }
}
