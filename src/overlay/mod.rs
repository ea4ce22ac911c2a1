//! Selection overlay box: content, layout, styling and frame reporting.

mod config;
mod content;
mod frame_report;
mod layout;
mod presenter;
mod selection_box;
mod style;
mod text_metrics;

pub use config::{OVERLAY_CONFIG_JSON_SCHEMA_V1, OverlayConfig, OverlayConfigJsonContractV1};
pub use content::{OverlayLine, OverlayLineKind, OverlayTree, shows_value_line};
pub use frame_report::{FrameSink, FrameSlot};
pub use layout::{OverlayLayout, build_render_frame, layout_tree};
pub use presenter::{OverlayPass, OverlayPresenter};
pub use selection_box::SelectionOverlayBox;
pub use style::{OverlayBoxStyle, Platform, PlatformChrome};
pub use text_metrics::{EstimatedTextMeasurer, TextMeasurer};
