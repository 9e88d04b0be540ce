//! Draw commands and the raster surface they are replayed on.

use image::RgbaImage;
use imageproc::drawing::draw_line_segment_mut;
use wx_common::ChartResult;

use crate::png::encode_png;

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single drawing operation, independent of color and surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Line { from: Point, to: Point },
    Point(Point),
}

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }
}

/// Minimal drawing surface the chart pipeline needs.
pub trait Canvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba);

    fn draw_point(&mut self, at: Point, color: Rgba);

    /// Encode the current contents as an image file.
    fn encode_image(&self) -> ChartResult<Vec<u8>>;
}

/// Replay `commands` on `canvas` in `color`.
pub fn apply<C: Canvas + ?Sized>(canvas: &mut C, commands: &[DrawCommand], color: Rgba) {
    for command in commands {
        match *command {
            DrawCommand::Line { from, to } => canvas.draw_line(from, to, color),
            DrawCommand::Point(at) => canvas.draw_point(at, color),
        }
    }
}

/// In-memory RGBA canvas encoded as PNG.
///
/// Coordinates are truncated toward zero to whole pixels; anything outside
/// the canvas is clipped.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    image: RgbaImage,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, image::Rgba(background.0)),
        }
    }

    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Color at (x, y), or `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(Rgba(self.image.get_pixel(x as u32, y as u32).0))
    }
}

impl Canvas for RasterCanvas {
    /// Bresenham line including both endpoints.
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) {
        draw_line_segment_mut(
            &mut self.image,
            (from.x as f32, from.y as f32),
            (to.x as f32, to.y as f32),
            image::Rgba(color.0),
        );
    }

    fn draw_point(&mut self, at: Point, color: Rgba) {
        let (x, y) = (at.x.trunc(), at.y.trunc());
        if x < 0.0 || y < 0.0 || x >= self.width() as f64 || y >= self.height() as f64 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, image::Rgba(color.0));
    }

    fn encode_image(&self) -> ChartResult<Vec<u8>> {
        encode_png(self.image.as_raw(), self.width(), self.height())
    }
}
