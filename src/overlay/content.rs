use smallvec::SmallVec;

use crate::core::{SelectedPoint, ValueSpecifier};
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayLineKind {
    Value,
    Description,
}

/// One text row of the overlay box.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub kind: OverlayLineKind,
    pub text: String,
    pub color: Color,
    /// Index of the selected point this row belongs to.
    pub point_index: usize,
}

/// Visual tree produced by one render: rows in top-to-bottom order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayTree {
    pub lines: SmallVec<[OverlayLine; 4]>,
}

impl OverlayTree {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn value_line_count(&self) -> usize {
        self.count(OverlayLineKind::Value)
    }

    #[must_use]
    pub fn description_line_count(&self) -> usize {
        self.count(OverlayLineKind::Description)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    fn count(&self, kind: OverlayLineKind) -> usize {
        self.lines.iter().filter(|line| line.kind == kind).count()
    }
}

/// Value rows follow this exact truth table: always shown when zero
/// suppression is off, shown for non-zero values when it is on.
#[must_use]
pub fn shows_value_line(ignore_zero: bool, value: f64) -> bool {
    if ignore_zero && value != 0.0 {
        true
    } else {
        !ignore_zero
    }
}

pub(crate) fn build_tree<P: SelectedPoint>(
    selected_points: &[P],
    specifier: &ValueSpecifier,
    value_color: Color,
    description_color: Color,
    ignore_zero: bool,
) -> OverlayTree {
    let mut lines = SmallVec::with_capacity(selected_points.len() * 2);

    for (point_index, point) in selected_points.iter().enumerate() {
        let value = point.value();
        if shows_value_line(ignore_zero, value) {
            lines.push(OverlayLine {
                kind: OverlayLineKind::Value,
                text: specifier.format(value),
                color: value_color,
                point_index,
            });
        }
        if let Some(label) = point.point_description().filter(|label| !label.is_empty()) {
            lines.push(OverlayLine {
                kind: OverlayLineKind::Description,
                text: label.to_owned(),
                color: description_color,
                point_index,
            });
        }
    }

    OverlayTree { lines }
}
