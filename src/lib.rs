//! chart-touch-overlay: the floating value/label box charts show while the
//! user touches or drags across data points.
//!
//! [`overlay::SelectionOverlayBox`] turns the selected points into rows,
//! [`overlay::OverlayPresenter`] lays them out inside a rounded, shadowed
//! panel, reports the panel frame through a [`overlay::FrameSink`] and hands
//! the scene to a [`render::Renderer`].

pub mod core;
pub mod error;
pub mod overlay;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use error::{OverlayError, OverlayResult};
pub use overlay::{FrameSink, FrameSlot, OverlayConfig, OverlayPresenter, SelectionOverlayBox};
