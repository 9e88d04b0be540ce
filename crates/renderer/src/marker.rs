//! Extremum overlay.

use crate::canvas::{DrawCommand, Point};
use crate::mapper::CoordinateMapper;

/// X-shaped cross of `size` pixels centered on `(bucket, value)`.
pub fn cross(
    bucket: usize,
    value: f64,
    size: f64,
    mapper: &CoordinateMapper,
    x_origin: f64,
) -> [DrawCommand; 2] {
    let x0 = x_origin + bucket as f64 - size / 2.0;
    let y0 = mapper.map(value) - size / 2.0;
    [
        DrawCommand::Line {
            from: Point::new(x0, y0),
            to: Point::new(x0 + size, y0 + size),
        },
        DrawCommand::Line {
            from: Point::new(x0, y0 + size),
            to: Point::new(x0 + size, y0),
        },
    ]
}
