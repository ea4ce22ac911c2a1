use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::core::{FrameRect, SelectedPoint};
use crate::error::OverlayResult;
use crate::overlay::{OverlayConfig, OverlayPresenter, SelectionOverlayBox};
use crate::render::{
    CairoContextRenderer, CairoRenderer, Color, NullRenderer, PangoTextMeasurer, RenderFrame,
};

type FrameCallback = Box<dyn FnMut(FrameRect)>;

struct OverlayState {
    presenter: OverlayPresenter<NullRenderer, FrameCallback>,
    cairo: CairoRenderer,
    scene: Option<RenderFrame>,
}

/// GTK `DrawingArea` showing one selection overlay box.
///
/// Every `set_selection` call is a layout pass: the frame is reported to the
/// callback, the widget's content size follows the panel (shadow included)
/// and a redraw is queued.
pub struct GtkOverlayAdapter {
    area: gtk::DrawingArea,
    state: Rc<RefCell<OverlayState>>,
}

impl GtkOverlayAdapter {
    pub fn new(
        config: OverlayConfig,
        on_frame_resolved: impl FnMut(FrameRect) + 'static,
    ) -> OverlayResult<Self> {
        let callback: FrameCallback = Box::new(on_frame_resolved);
        let presenter = OverlayPresenter::new(NullRenderer::default(), callback, config)?
            .with_text_measurer(PangoTextMeasurer::new()?);
        let state = Rc::new(RefCell::new(OverlayState {
            presenter,
            cairo: CairoRenderer::new(1, 1)?,
            scene: None,
        }));

        let area = gtk::DrawingArea::new();
        let draw_state = Rc::clone(&state);
        area.set_draw_func(move |_area, context, _width, _height| {
            let Ok(mut state) = draw_state.try_borrow_mut() else {
                return;
            };
            let OverlayState { cairo, scene, .. } = &mut *state;
            if let Some(scene) = scene.as_ref() {
                if let Err(err) = cairo.render_on_cairo_context(context, scene) {
                    warn!(%err, "failed to draw selection overlay");
                }
            }
        });

        Ok(Self { area, state })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Lays out the box for `points` and schedules a redraw. The panel is
    /// placed so the shadow stays inside the widget for any shadow offset.
    pub fn set_selection<P: SelectedPoint>(
        &self,
        points: &[P],
        value_color: Color,
        description_color: Color,
    ) {
        let mut state = self.state.borrow_mut();
        let overlay = SelectionOverlayBox::from_config(
            points,
            value_color,
            description_color,
            state.presenter.config(),
        );
        let origin = state.presenter.config().style.shadow_inset();
        let pass = state.presenter.layout(&overlay, origin);

        let extent = pass.frame.paint_extent();
        self.area.set_content_width(extent.right().ceil() as i32);
        self.area.set_content_height(extent.bottom().ceil() as i32);
        state.scene = Some(pass.frame);
        drop(state);
        self.area.queue_draw();
    }

    pub fn clear_selection(&self) {
        self.state.borrow_mut().scene = None;
        self.area.queue_draw();
    }
}
