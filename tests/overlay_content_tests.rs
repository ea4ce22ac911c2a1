use chart_touch_overlay::core::{OverlayDataPoint, SelectedPoint};
use chart_touch_overlay::overlay::{OverlayLineKind, SelectionOverlayBox};
use chart_touch_overlay::render::Color;

const VALUE: Color = Color::rgb(0.1, 0.2, 0.8);
const LABEL: Color = Color::rgb(0.4, 0.4, 0.4);

fn point(value: f64, description: &str) -> OverlayDataPoint {
    OverlayDataPoint::new(value).with_description(description)
}

#[test]
fn single_point_renders_value_then_description() {
    let points = [point(42.0, "Mon")];
    let tree = SelectionOverlayBox::new(&points, VALUE, LABEL)
        .with_specifier("%.0f")
        .render();

    assert_eq!(tree.texts().collect::<Vec<_>>(), vec!["42", "Mon"]);
    assert_eq!(tree.lines[0].kind, OverlayLineKind::Value);
    assert_eq!(tree.lines[0].color, VALUE);
    assert_eq!(tree.lines[1].kind, OverlayLineKind::Description);
    assert_eq!(tree.lines[1].color, LABEL);
}

#[test]
fn ignore_zero_keeps_only_the_description_of_zero_points() {
    let points = [point(0.0, "Tue")];
    let tree = SelectionOverlayBox::new(&points, VALUE, LABEL)
        .with_ignore_zero(true)
        .render();

    assert_eq!(tree.texts().collect::<Vec<_>>(), vec!["Tue"]);
    assert_eq!(tree.value_line_count(), 0);
}

#[test]
fn zero_values_are_shown_when_not_suppressed() {
    let points = [point(0.0, "Tue")];
    let tree = SelectionOverlayBox::new(&points, VALUE, LABEL).render();

    assert_eq!(tree.texts().collect::<Vec<_>>(), vec!["0", "Tue"]);
}

#[test]
fn caller_order_is_preserved_across_points() {
    let points = [
        point(3.0, "Wed"),
        OverlayDataPoint::new(0.0),
        point(-1.24, "Fri"),
        OverlayDataPoint::new(7.0),
    ];
    let tree = SelectionOverlayBox::new(&points, VALUE, LABEL)
        .with_specifier("%.1f")
        .with_ignore_zero(true)
        .render();

    assert_eq!(
        tree.texts().collect::<Vec<_>>(),
        vec!["3.0", "Wed", "-1.2", "Fri", "7.0"]
    );
    let owners: Vec<usize> = tree.lines.iter().map(|line| line.point_index).collect();
    assert_eq!(owners, vec![0, 0, 2, 2, 3]);
}

#[test]
fn empty_descriptions_do_not_produce_rows() {
    let points = [point(5.0, ""), OverlayDataPoint::new(6.0)];
    let tree = SelectionOverlayBox::new(&points, VALUE, LABEL).render();

    assert_eq!(tree.description_line_count(), 0);
    assert_eq!(tree.value_line_count(), 2);
}

#[test]
fn empty_selection_renders_no_rows() {
    let points: [OverlayDataPoint; 0] = [];
    let tree = SelectionOverlayBox::new(&points, VALUE, LABEL).render();
    assert!(tree.is_empty());
}

struct Reading {
    celsius: f64,
    station: &'static str,
}

impl SelectedPoint for Reading {
    fn value(&self) -> f64 {
        self.celsius
    }

    fn point_description(&self) -> Option<&str> {
        Some(self.station)
    }
}

#[test]
fn host_point_types_render_through_the_trait() {
    let readings = [
        Reading {
            celsius: 21.456,
            station: "North",
        },
        Reading {
            celsius: 19.0,
            station: "South",
        },
    ];
    let tree = SelectionOverlayBox::new(&readings, VALUE, LABEL)
        .with_specifier("%.1f°C")
        .render();

    assert_eq!(
        tree.texts().collect::<Vec<_>>(),
        vec!["21.5°C", "North", "19.0°C", "South"]
    );
}

#[test]
fn plain_values_render_without_descriptions() {
    let values = [1.5_f64, 2.5];
    let tree = SelectionOverlayBox::new(&values, VALUE, LABEL)
        .with_specifier("%.2f")
        .render();
    assert_eq!(tree.texts().collect::<Vec<_>>(), vec!["1.50", "2.50"]);
}

#[test]
fn malformed_specifier_degrades_to_plain_values() {
    let points = [point(12.75, "Sat")];
    let overlay = SelectionOverlayBox::new(&points, VALUE, LABEL).with_specifier("%.2y");
    assert!(overlay.specifier().is_fallback());
    assert_eq!(
        overlay.render().texts().collect::<Vec<_>>(),
        vec!["12.75", "Sat"]
    );
}

#[test]
fn decimal_points_convert_to_values() {
    let price = rust_decimal::Decimal::new(123_456, 2);
    let points = [OverlayDataPoint::from_decimal(price)
        .expect("decimal fits f64")
        .with_description("BTC")];
    let tree = SelectionOverlayBox::new(&points, VALUE, LABEL)
        .with_specifier("%.2f")
        .render();
    assert_eq!(tree.texts().collect::<Vec<_>>(), vec!["1234.56", "BTC"]);
}
