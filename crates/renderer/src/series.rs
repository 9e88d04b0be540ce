//! Gap-aware polyline rendering of a bucket series.

use wx_common::BucketSeries;

use crate::canvas::{DrawCommand, Point};
use crate::mapper::CoordinateMapper;

/// Turn a bucket series into draw commands.
///
/// Adjacent valid buckets are joined by a line. A valid bucket whose
/// neighbour is a gap is drawn as a single point, so gaps stay visible
/// instead of being bridged. Bucket `j` sits at column `x_origin + j`.
pub fn render_series(
    series: &BucketSeries,
    mapper: &CoordinateMapper,
    x_origin: f64,
) -> Vec<DrawCommand> {
    let at = |j: usize, value: f64| Point::new(x_origin + j as f64, mapper.map(value));

    let mut commands = Vec::new();
    for j in 0..series.len().saturating_sub(1) {
        match (series.get(j), series.get(j + 1)) {
            (Some(left), Some(right)) => commands.push(DrawCommand::Line {
                from: at(j, left),
                to: at(j + 1, right),
            }),
            (Some(left), None) => commands.push(DrawCommand::Point(at(j, left))),
            (None, Some(right)) => commands.push(DrawCommand::Point(at(j + 1, right))),
            (None, None) => {}
        }
    }
    commands
}
