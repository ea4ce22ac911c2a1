use crate::core::{SelectedPoint, ValueSpecifier};
use crate::render::Color;

use super::config::OverlayConfig;
use super::content::{OverlayTree, build_tree};

/// Floating box listing the values and labels of touch-selected points.
///
/// Built fresh for every selection change. It only reads its inputs; the
/// resolved frame is reported by the layout pass that consumes it (see
/// [`super::OverlayPresenter`]).
#[derive(Debug, Clone)]
pub struct SelectionOverlayBox<'a, P: SelectedPoint> {
    selected_points: &'a [P],
    specifier: ValueSpecifier,
    value_color: Color,
    description_color: Color,
    ignore_zero: bool,
}

impl<'a, P: SelectedPoint> SelectionOverlayBox<'a, P> {
    #[must_use]
    pub fn new(selected_points: &'a [P], value_color: Color, description_color: Color) -> Self {
        Self {
            selected_points,
            specifier: ValueSpecifier::default(),
            value_color,
            description_color,
            ignore_zero: false,
        }
    }

    /// Takes specifier and zero suppression from `config`.
    #[must_use]
    pub fn from_config(
        selected_points: &'a [P],
        value_color: Color,
        description_color: Color,
        config: &OverlayConfig,
    ) -> Self {
        Self::new(selected_points, value_color, description_color)
            .with_specifier(config.specifier.clone())
            .with_ignore_zero(config.ignore_zero)
    }

    #[must_use]
    pub fn with_specifier(mut self, specifier: impl Into<ValueSpecifier>) -> Self {
        self.specifier = specifier.into();
        self
    }

    #[must_use]
    pub fn with_ignore_zero(mut self, ignore_zero: bool) -> Self {
        self.ignore_zero = ignore_zero;
        self
    }

    #[must_use]
    pub fn selected_points(&self) -> &'a [P] {
        self.selected_points
    }

    #[must_use]
    pub fn specifier(&self) -> &ValueSpecifier {
        &self.specifier
    }

    #[must_use]
    pub fn ignore_zero(&self) -> bool {
        self.ignore_zero
    }

    /// Produces the rows for the current inputs, in point order.
    #[must_use]
    pub fn render(&self) -> OverlayTree {
        build_tree(
            self.selected_points,
            &self.specifier,
            self.value_color,
            self.description_color,
            self.ignore_zero,
        )
    }
}
