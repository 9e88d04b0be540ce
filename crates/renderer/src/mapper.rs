//! Value to pixel row mapping.

use wx_common::{ChartError, ChartLayout, ChartResult, OriginRule};

/// Maps data values onto the vertical pixel axis of a plot area.
///
/// The plot spans `y_height` pixels below `y_top`; larger values map to
/// smaller rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    y_top: f64,
    y_height: f64,
    min: f64,
    range: f64,
    origin: OriginRule,
}

impl CoordinateMapper {
    /// Create a mapper for values starting at `min` and spanning `range`.
    ///
    /// A zero or non-finite range is rejected; callers widen flat ranges
    /// before building a mapper.
    pub fn new(
        y_top: f64,
        y_height: f64,
        min: f64,
        range: f64,
        origin: OriginRule,
    ) -> ChartResult<Self> {
        if range == 0.0 || !range.is_finite() || !min.is_finite() {
            return Err(ChartError::DegenerateRange {
                min,
                max: min + range,
            });
        }
        Ok(Self {
            y_top,
            y_height,
            min,
            range,
            origin,
        })
    }

    /// Mapper for the plot area of `layout` covering `[min, max]`.
    pub fn for_layout(
        layout: &ChartLayout,
        min: f64,
        max: f64,
        origin: OriginRule,
    ) -> ChartResult<Self> {
        Self::new(layout.y_top, layout.y_height, min, max - min, origin)
            .map_err(|_| ChartError::DegenerateRange { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    /// Pixel row of `value`.
    pub fn map(&self, value: f64) -> f64 {
        let offset = match self.origin {
            OriginRule::SignAware if self.min >= 0.0 => value,
            _ => value - self.min,
        };
        self.y_top + self.y_height - self.y_height * offset / self.range
    }
}
