//! Ink dots and their rasterization onto a binary canvas.

use image::{GrayImage, Luma};

pub const PAPER: u8 = 255;
pub const INK: u8 = 0;

/// A single stipple dot at pixel (`row`, `col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InkDot {
    pub row: usize,
    pub col: usize,
}

impl InkDot {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Paint `dots` black on an all-white `width` × `height` canvas.
///
/// Repeated dots are idempotent. A dot off the canvas is a sampler bug: debug
/// builds assert, release builds drop it.
pub fn rasterize(dots: &[InkDot], width: u32, height: u32) -> GrayImage {
    let mut canvas = GrayImage::from_pixel(width, height, Luma([PAPER]));
    for dot in dots {
        let inside = dot.col < width as usize && dot.row < height as usize;
        debug_assert!(inside, "{dot:?} outside {width}x{height} canvas");
        if inside {
            canvas.put_pixel(dot.col as u32, dot.row as u32, Luma([INK]));
        }
    }
    canvas
}
