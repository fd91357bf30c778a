//! Drawing surface
//!
//! The shelf engine only ever talks to a `Canvas`: filled rectangles, text
//! centered in a box, and star stamps. `ScreenCanvas` forwards those calls to
//! macroquad; tests record them instead.

use macroquad::prelude::*;

use super::text::wrap_words;
use super::theme::{OUTLINE_COLOR, STAR_COLOR};
use super::Rect;

/// Outbound draw calls issued once per frame
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Filled rectangle with an outline
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Text wrapped to the box width, centered horizontally and vertically
    fn text_in_box(&mut self, text: &str, rect: Rect, font_size: f32, color: Color);

    /// Star icon stretched to `rect`
    fn stamp_star(&mut self, rect: Rect);
}

/// Side of the generated star texture in pixels
const STAR_TEXTURE_SIZE: u16 = 64;

/// Canvas backed by the macroquad window
pub struct ScreenCanvas {
    star: Texture2D,
}

impl ScreenCanvas {
    pub fn new() -> Self {
        let star = Texture2D::from_image(&star_image(STAR_TEXTURE_SIZE));
        star.set_filter(FilterMode::Linear);
        Self { star }
    }
}

impl Default for ScreenCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for ScreenCanvas {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, OUTLINE_COLOR);
    }

    fn text_in_box(&mut self, text: &str, rect: Rect, font_size: f32, color: Color) {
        let size = font_size.round().max(1.0) as u16;
        let lines = wrap_words(text, rect.w, |s| measure_text(s, None, size, 1.0).width);
        if lines.is_empty() {
            return;
        }

        let line_height = font_size;
        let block_height = line_height * lines.len() as f32;
        let top = rect.center_y() - block_height * 0.5;

        for (i, line) in lines.iter().enumerate() {
            let dims = measure_text(line, None, size, 1.0);
            let x = rect.center_x() - dims.width * 0.5;
            // draw_text positions the baseline; center each line in its row
            let row_center = top + line_height * (i as f32 + 0.5);
            let baseline = row_center - dims.height * 0.5 + dims.offset_y;
            draw_text(line, x, baseline, font_size, color);
        }
    }

    fn stamp_star(&mut self, rect: Rect) {
        draw_texture_ex(
            &self.star,
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                ..Default::default()
            },
        );
    }
}

/// Five-pointed star polygon (outer/inner vertices alternating) in unit space
fn star_points() -> [(f32, f32); 10] {
    let mut points = [(0.0, 0.0); 10];
    for (i, p) in points.iter_mut().enumerate() {
        let radius = if i % 2 == 0 { 0.5 } else { 0.2 };
        let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
        *p = (0.5 + radius * angle.cos(), 0.5 + radius * angle.sin());
    }
    points
}

/// Even-odd point-in-polygon test
fn inside_polygon(x: f32, y: f32, poly: &[(f32, f32)]) -> bool {
    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (xi, yi) = poly[i];
        let (xj, yj) = poly[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn star_image(size: u16) -> Image {
    let mut image = Image::gen_image_color(size, size, BLANK);
    let poly = star_points();
    let scale = size as f32;
    for py in 0..size as u32 {
        for px in 0..size as u32 {
            let u = (px as f32 + 0.5) / scale;
            let v = (py as f32 + 0.5) / scale;
            if inside_polygon(u, v, &poly) {
                image.set_pixel(px, py, STAR_COLOR);
            }
        }
    }
    image
}

/// One recorded draw call
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Rect { rect: Rect, color: Color },
    Text { text: String, rect: Rect, color: Color },
    Star { rect: Rect },
}

/// Canvas that records calls instead of drawing
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text strings drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn star_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Star { .. })).count()
    }
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Rect { rect, color });
    }

    fn text_in_box(&mut self, text: &str, rect: Rect, _font_size: f32, color: Color) {
        self.calls.push(DrawCall::Text { text: text.to_string(), rect, color });
    }

    fn stamp_star(&mut self, rect: Rect) {
        self.calls.push(DrawCall::Star { rect });
    }
}
