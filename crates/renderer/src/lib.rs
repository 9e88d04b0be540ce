//! Chart rendering for aggregated weather series.
//!
//! - Value to pixel mapping
//! - Gap-aware series curves
//! - Extremum markers
//! - Raster canvas and PNG encoding

pub mod canvas;
pub mod chart;
pub mod mapper;
pub mod marker;
pub mod png;
pub mod series;

pub use canvas::{apply, Canvas, DrawCommand, Point, RasterCanvas, Rgba};
pub use chart::{day_commands, draw_chart, joint_range, render_chart, ChartStyle, DaySeries};
pub use mapper::CoordinateMapper;
pub use marker::cross;
pub use png::{encode_png, encode_png_rgba};
pub use series::render_series;
