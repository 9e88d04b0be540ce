//! Tests for two-day chart assembly.

use renderer::{
    draw_chart, joint_range, render_chart, Canvas, ChartStyle, DaySeries, DrawCommand, Point,
    Rgba,
};
use test_utils::{count_rgb, decode_png, png_color_type, COLOR_TYPE_INDEXED};
use wx_common::{
    BucketSeries, ChartError, ChartResult, Extrema, Metric, MetricPolicy, RangeRule,
};

const BLUE: [u8; 3] = [0, 0, 255];
const RED: [u8; 3] = [255, 0, 0];
const BACKGROUND: [u8; 3] = [247, 247, 247];

// ============================================================================
// Helper functions
// ============================================================================

/// Canvas that remembers what was drawn.
#[derive(Default)]
struct RecordingCanvas {
    drawn: Vec<(DrawCommand, Rgba)>,
}

impl RecordingCanvas {
    fn in_color(&self, rgb: [u8; 3]) -> Vec<DrawCommand> {
        self.drawn
            .iter()
            .filter(|(_, c)| *c == Rgba::rgb(rgb[0], rgb[1], rgb[2]))
            .map(|(d, _)| *d)
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) {
        self.drawn.push((DrawCommand::Line { from, to }, color));
    }

    fn draw_point(&mut self, at: Point, color: Rgba) {
        self.drawn.push((DrawCommand::Point(at), color));
    }

    fn encode_image(&self) -> ChartResult<Vec<u8>> {
        Ok(Vec::new())
    }
}

/// Series with `value` in `buckets` and gaps elsewhere, plus matching extrema.
fn day(policy: &MetricPolicy, buckets: std::ops::Range<usize>, value: f64) -> (BucketSeries, Extrema) {
    let mut series = BucketSeries::new(policy.day_span(), policy.sentinel);
    let mut extrema = Extrema::seeded(policy.seeds);
    for j in buckets {
        series.set(j, value);
        extrema.observe(value, j);
    }
    (series, extrema)
}

// ============================================================================
// Joint range
// ============================================================================

#[test]
fn test_joint_range_pressure_pads_and_floors() {
    let rule = MetricPolicy::default_for(Metric::Pressure).range;
    let yesterday = Extrema { min: 1000.0, max: 1020.0, bucket_of_max: Some(3) };
    let today = Extrema { min: 990.0, max: 1030.0, bucket_of_max: Some(7) };
    assert_eq!(joint_range(&rule, &yesterday, &today), (984.0, 1046.0));
}

#[test]
fn test_joint_range_pressure_low_day() {
    let rule = MetricPolicy::default_for(Metric::Pressure).range;
    let yesterday = Extrema { min: 970.4, max: 1000.0, bucket_of_max: Some(0) };
    let today = Extrema { min: 975.0, max: 1050.2, bucket_of_max: Some(1) };
    assert_eq!(joint_range(&rule, &yesterday, &today), (969.0, 1051.0));
}

#[test]
fn test_joint_range_fixed_ignores_observations() {
    let rule = MetricPolicy::default_for(Metric::Humidity).range;
    let a = Extrema { min: 30.0, max: 60.0, bucket_of_max: Some(0) };
    let b = Extrema { min: 35.0, max: 95.0, bucket_of_max: Some(0) };
    assert_eq!(joint_range(&rule, &a, &b), (0.0, 100.0));
}

#[test]
fn test_joint_range_wind_chill_keeps_negative_min() {
    let rule = MetricPolicy::default_for(Metric::WindChill).range;
    let a = Extrema { min: -5.0, max: 4.0, bucket_of_max: Some(0) };
    let b = Extrema { min: -2.0, max: 10.0, bucket_of_max: Some(0) };
    assert_eq!(joint_range(&rule, &a, &b), (-5.0, 10.0));
}

// ============================================================================
// Draw commands
// ============================================================================

#[test]
fn test_days_drawn_in_their_colors_with_markers() {
    let policy = MetricPolicy::default_for(Metric::WindSpeed);
    let (y_series, y_extrema) = day(&policy, 10..12, 3.0);
    let (t_series, t_extrema) = day(&policy, 100..101, 4.0);

    let mut canvas = RecordingCanvas::default();
    draw_chart(
        &mut canvas,
        &policy,
        &ChartStyle::default(),
        DaySeries::new(&y_series, &y_extrema),
        DaySeries::new(&t_series, &t_extrema),
    )
    .unwrap();

    // Yesterday: point, line, point and two marker lines.
    let blue = canvas.in_color(BLUE);
    assert_eq!(blue.len(), 5);
    // Today: the lone bucket gets a point from each side plus two marker lines.
    let red = canvas.in_color(RED);
    assert_eq!(red.len(), 4);

    // Marker centered on today's max: range is (0, 5.1) on a 208px plot.
    let center_y = 19.0 + 208.0 - 208.0 * 4.0 / 5.1;
    match red[2] {
        DrawCommand::Line { from, to } => {
            assert_eq!(from.x, 60.0 + 100.0 - 2.0);
            assert_eq!(to.x, 60.0 + 100.0 + 2.0);
            assert!(((from.y + to.y) / 2.0 - center_y).abs() < 1e-9);
        }
        other => panic!("expected marker line, got {:?}", other),
    }
}

#[test]
fn test_yesterday_drawn_before_today() {
    let policy = MetricPolicy::default_for(Metric::Humidity);
    let (y_series, y_extrema) = day(&policy, 0..2, 40.0);
    let (t_series, t_extrema) = day(&policy, 0..2, 60.0);

    let mut canvas = RecordingCanvas::default();
    draw_chart(
        &mut canvas,
        &policy,
        &ChartStyle::default(),
        DaySeries::new(&y_series, &y_extrema),
        DaySeries::new(&t_series, &t_extrema),
    )
    .unwrap();

    let colors: Vec<Rgba> = canvas.drawn.iter().map(|(_, c)| *c).collect();
    assert_eq!(colors.first(), Some(&Rgba::rgb(0, 0, 255)));
    assert_eq!(colors.last(), Some(&Rgba::rgb(255, 0, 0)));
}

#[test]
fn test_no_markers_without_policy_size() {
    let policy = MetricPolicy::default_for(Metric::Humidity);
    let (series, extrema) = day(&policy, 0..3, 50.0);

    let mut canvas = RecordingCanvas::default();
    draw_chart(
        &mut canvas,
        &policy,
        &ChartStyle::default(),
        DaySeries::new(&series, &extrema),
        DaySeries::new(&series, &extrema),
    )
    .unwrap();
    // Two lines and a trailing point per day.
    assert_eq!(canvas.drawn.len(), 6);
    assert!(canvas
        .drawn
        .iter()
        .all(|(d, _)| !matches!(d, DrawCommand::Line { from, to } if (from.x - to.x).abs() > 1.0)));
}

#[test]
fn test_empty_days_draw_nothing() {
    let policy = MetricPolicy::default_for(Metric::Humidity);
    let (series, extrema) = day(&policy, 0..0, 0.0);

    let mut canvas = RecordingCanvas::default();
    draw_chart(
        &mut canvas,
        &policy,
        &ChartStyle::default(),
        DaySeries::new(&series, &extrema),
        DaySeries::new(&series, &extrema),
    )
    .unwrap();
    assert!(canvas.drawn.is_empty());
}

#[test]
fn test_degenerate_range_aborts_before_drawing() {
    // With no samples the wind-chill range collapses to (0, 0).
    let policy = MetricPolicy::default_for(Metric::WindChill);
    let (series, extrema) = day(&policy, 0..0, 0.0);

    let mut canvas = RecordingCanvas::default();
    let err = draw_chart(
        &mut canvas,
        &policy,
        &ChartStyle::default(),
        DaySeries::new(&series, &extrema),
        DaySeries::new(&series, &extrema),
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::DegenerateRange { .. }));
    assert!(canvas.drawn.is_empty());
}

// ============================================================================
// Encoded output
// ============================================================================

#[test]
fn test_render_chart_png_pixels() {
    let policy = MetricPolicy::default_for(Metric::Humidity);
    let (y_series, y_extrema) = day(&policy, 0..360, 50.0);
    let (t_series, t_extrema) = day(&policy, 0..100, 75.0);

    let png = render_chart(
        &policy,
        &ChartStyle::default(),
        DaySeries::new(&y_series, &y_extrema),
        DaySeries::new(&t_series, &t_extrema),
    )
    .unwrap();
    let image = decode_png(&png).unwrap();

    assert_eq!(image.dimensions(), (440, 350));
    assert_eq!(png_color_type(&png), Some(COLOR_TYPE_INDEXED));
    // 50% of a 270px plot below row 19.
    assert_eq!(&image.get_pixel(60, 154).0[..3], &BLUE);
    assert_eq!(&image.get_pixel(419, 154).0[..3], &BLUE);
    // 75% lands on row 86.5, truncated.
    assert_eq!(&image.get_pixel(60, 86).0[..3], &RED);
    assert_eq!(&image.get_pixel(159, 86).0[..3], &RED);
    assert_eq!(&image.get_pixel(200, 86).0[..3], &BACKGROUND);
    assert_eq!(&image.get_pixel(0, 0).0[..3], &BACKGROUND);
    assert_eq!(count_rgb(&image, BLUE), 360);
    assert_eq!(count_rgb(&image, RED), 100);
}

#[test]
fn test_render_chart_custom_style() {
    let policy = MetricPolicy::default_for(Metric::RainRate);
    let (series, extrema) = day(&policy, 0..288, 1.0);
    let style = ChartStyle {
        background: [0, 0, 0],
        yesterday: [10, 10, 10],
        today: [200, 200, 200],
    };

    let png = render_chart(
        &policy,
        &style,
        DaySeries::new(&series, &extrema),
        DaySeries::new(&series, &extrema),
    )
    .unwrap();
    let image = decode_png(&png).unwrap();
    assert_eq!(image.dimensions(), (368, 288));
    assert_eq!(count_rgb(&image, [10, 10, 10]), 0);
    assert!(count_rgb(&image, [200, 200, 200]) > 288);
}

#[test]
fn test_flat_fixed_range_is_degenerate() {
    let mut policy = MetricPolicy::default_for(Metric::Humidity);
    policy.range = RangeRule::Fixed { min: 5.0, max: 5.0 };
    let (series, extrema) = day(&policy, 0..10, 5.0);

    let result = render_chart(
        &policy,
        &ChartStyle::default(),
        DaySeries::new(&series, &extrema),
        DaySeries::new(&series, &extrema),
    );
    assert!(matches!(result, Err(ChartError::DegenerateRange { min, max }) if min == 5.0 && max == 5.0));
}
