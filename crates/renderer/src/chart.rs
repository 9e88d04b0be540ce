//! Two-day chart assembly.
//!
//! Combines yesterday's and today's aggregates on one shared value axis,
//! draws both curves plus optional max markers and encodes the result.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wx_common::{BucketSeries, ChartResult, Extrema, MetricPolicy, RangeRule};

use crate::canvas::{apply, Canvas, DrawCommand, RasterCanvas, Rgba};
use crate::mapper::CoordinateMapper;
use crate::marker::cross;
use crate::series::render_series;

/// Colors used for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub background: [u8; 3],
    pub yesterday: [u8; 3],
    pub today: [u8; 3],
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: [247, 247, 247],
            yesterday: [0, 0, 255],
            today: [255, 0, 0],
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Rgba {
    Rgba::rgb(r, g, b)
}

/// One day's input to a chart.
#[derive(Debug, Clone, Copy)]
pub struct DaySeries<'a> {
    pub series: &'a BucketSeries,
    pub extrema: &'a Extrema,
}

impl<'a> DaySeries<'a> {
    pub fn new(series: &'a BucketSeries, extrema: &'a Extrema) -> Self {
        Self { series, extrema }
    }
}

/// Axis range covering both days under `rule`.
pub fn joint_range(rule: &RangeRule, yesterday: &Extrema, today: &Extrema) -> (f64, f64) {
    let (min, max) = yesterday.joint(today);
    rule.resolve(min, max)
}

/// Draw commands for one day: the curve, then the max marker if requested.
pub fn day_commands(
    day: DaySeries<'_>,
    policy: &MetricPolicy,
    mapper: &CoordinateMapper,
) -> Vec<DrawCommand> {
    let x_origin = policy.layout.x_origin;
    let mut commands = render_series(day.series, mapper, x_origin);
    if let (Some(size), Some(bucket)) = (policy.max_marker, day.extrema.bucket_of_max) {
        commands.extend(cross(bucket, day.extrema.max, size, mapper, x_origin));
    }
    commands
}

/// Render both days onto `canvas` and encode it.
pub fn draw_chart<C: Canvas + ?Sized>(
    canvas: &mut C,
    policy: &MetricPolicy,
    style: &ChartStyle,
    yesterday: DaySeries<'_>,
    today: DaySeries<'_>,
) -> ChartResult<Vec<u8>> {
    let (min, max) = joint_range(&policy.range, yesterday.extrema, today.extrema);
    let mapper = CoordinateMapper::for_layout(&policy.layout, min, max, policy.origin)?;

    let previous = day_commands(yesterday, policy, &mapper);
    let current = day_commands(today, policy, &mapper);
    debug!(
        min,
        max,
        yesterday_commands = previous.len(),
        today_commands = current.len(),
        "Drawing chart"
    );

    apply(canvas, &previous, rgb(style.yesterday));
    apply(canvas, &current, rgb(style.today));
    canvas.encode_image()
}

/// Render a two-day chart to PNG bytes.
pub fn render_chart(
    policy: &MetricPolicy,
    style: &ChartStyle,
    yesterday: DaySeries<'_>,
    today: DaySeries<'_>,
) -> ChartResult<Vec<u8>> {
    let (width, height) = policy.canvas_size();
    let mut canvas = RasterCanvas::new(width, height, rgb(style.background));
    draw_chart(&mut canvas, policy, style, yesterday, today)
}
