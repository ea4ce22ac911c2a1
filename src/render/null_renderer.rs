use crate::error::OverlayResult;
use crate::render::{RenderFrame, Renderer};

/// Renderer that draws nothing; used headless and in tests.
///
/// Frames are still validated so invalid geometry surfaces without a backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_shadow_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub last_texts: Vec<String>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> OverlayResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_shadow_count = frame.shadows.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.last_texts = frame.texts.iter().map(|text| text.text.clone()).collect();
        Ok(())
    }
}
