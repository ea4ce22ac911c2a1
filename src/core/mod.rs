pub mod primitives;
pub mod selected_point;
pub mod specifier;
pub mod types;

pub use selected_point::{OverlayDataPoint, SelectedPoint};
pub use specifier::{DEFAULT_SPECIFIER, ValueSpecifier};
pub use types::{FrameRect, Point, Size};
