//! Board rasterization - draws a `BoardSnapshot` into an RGBA image.
//!
//! The composition mirrors the on-screen empathy map (see `render::board`):
//! 2x2 quadrant grid, titled quadrants with stacked note cards, and the
//! subject label circle at the center. The note pool and toolbar are not
//! part of the export.
//!
//! ## Performance Notes
//!
//! Runs on the background executor. Glyph shaping goes through a single
//! process-wide `FontSystem`, which is expensive to build (it scans system
//! fonts) and is created on the first capture.

use super::{CaptureOptions, ExportError, ExportResult};
use crate::board::{BoardSnapshot, QuadrantSnapshot};
use crate::constants::{
    BOARD_BORDER_WIDTH, BOARD_LINE_COLOR, BOARD_SIZE, BOARD_TEXT_COLOR, CENTER_CIRCLE_SIZE,
    DELETE_COLOR, DELETE_CONTROL_PADDING, DELETE_GLYPH, GRID_LINE_WIDTH, LABEL_INPUT_WIDTH,
    NOTE_CONTROL_GAP, NOTE_FONT_SIZE, NOTE_GAP, NOTE_LINE_HEIGHT, NOTE_PADDING, NOTE_RADIUS,
    QUADRANT_PADDING, QUADRANT_TITLE_GAP,
};
use crate::profile_scope;
use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, Weight};
use image::{ImageFormat, Rgba, RgbaImage};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::io::Cursor;

/// Upper bound on the export scale, keeps a bad scale factor from allocating gigabytes
pub const MAX_EXPORT_SCALE: f32 = 8.0;

const WHITE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

static TEXT: Lazy<Mutex<TextRasterizer>> = Lazy::new(|| Mutex::new(TextRasterizer::new()));

/// Render the snapshot and encode it as PNG.
pub fn render_png(snapshot: &BoardSnapshot, options: &CaptureOptions) -> ExportResult<Vec<u8>> {
    let image = render_board(snapshot, options)?;
    encode_png(&image)
}

pub fn encode_png(image: &RgbaImage) -> ExportResult<Vec<u8>> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ExportError::EmptyImage);
    }
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Draw the exported board region at `options.scale` pixels per logical pixel.
pub fn render_board(snapshot: &BoardSnapshot, options: &CaptureOptions) -> ExportResult<RgbaImage> {
    profile_scope!("render_board");

    let scale = options.scale;
    if !scale.is_finite() || scale <= 0.0 || scale > MAX_EXPORT_SCALE {
        return Err(ExportError::Render(format!("invalid scale factor {}", scale)));
    }
    let size = options.pixel_size();
    if size == 0 {
        return Err(ExportError::EmptyImage);
    }

    // The background doubles as the board fill, as on screen.
    let mut canvas = Raster::new(size, scale, options.background);
    let mut text = TEXT.lock();

    let line = rgb(BOARD_LINE_COLOR);
    let half = BOARD_SIZE / 2.0;
    canvas.fill_rect(half - GRID_LINE_WIDTH / 2.0, 0.0, GRID_LINE_WIDTH, BOARD_SIZE, line);
    canvas.fill_rect(0.0, half - GRID_LINE_WIDTH / 2.0, BOARD_SIZE, GRID_LINE_WIDTH, line);

    for quadrant in &snapshot.quadrants {
        draw_quadrant(&mut canvas, &mut text, quadrant);
    }

    let b = BOARD_BORDER_WIDTH;
    canvas.fill_rect(0.0, 0.0, BOARD_SIZE, b, line);
    canvas.fill_rect(0.0, BOARD_SIZE - b, BOARD_SIZE, b, line);
    canvas.fill_rect(0.0, 0.0, b, BOARD_SIZE, line);
    canvas.fill_rect(BOARD_SIZE - b, 0.0, b, BOARD_SIZE, line);

    draw_label(&mut canvas, &mut text, &snapshot.label);

    Ok(canvas.image)
}

fn draw_quadrant(canvas: &mut Raster, text: &mut TextRasterizer, quadrant: &QuadrantSnapshot) {
    let cell = BOARD_SIZE / 2.0;
    let (col, row) = quadrant.quadrant.cell();
    let left = col as f32 * cell + QUADRANT_PADDING;
    let top = row as f32 * cell + QUADRANT_PADDING;
    let color = rgb(BOARD_TEXT_COLOR);

    let title = text.layout(quadrant.quadrant.title(), true, None, canvas.scale);
    let (_, title_height) = text_extent(&title, canvas.scale);
    text.draw(&title, canvas, left, top, color);

    // Cards are sized to their content: text, gap, then the delete glyph.
    let control = text.layout(DELETE_GLYPH, false, None, canvas.scale);
    let (glyph_width, _) = text_extent(&control, canvas.scale);
    let control_width = glyph_width + 2.0 * DELETE_CONTROL_PADDING;

    let max_text_width =
        cell - 2.0 * QUADRANT_PADDING - 2.0 * NOTE_PADDING - NOTE_CONTROL_GAP - control_width;
    let mut y = top + title_height + QUADRANT_TITLE_GAP;
    for note in &quadrant.notes {
        let buffer = text.layout(&note.text, false, Some(max_text_width), canvas.scale);
        let (width, height) = text_extent(&buffer, canvas.scale);
        let card_width = width + NOTE_CONTROL_GAP + control_width + 2.0 * NOTE_PADDING;
        let card_height = height.max(NOTE_LINE_HEIGHT) + 2.0 * NOTE_PADDING;

        canvas.fill_rounded_rect(left, y, card_width, card_height, NOTE_RADIUS, note.color.rgba());
        text.draw(&buffer, canvas, left + NOTE_PADDING, y + NOTE_PADDING, color);

        let control_x = left + NOTE_PADDING + width + NOTE_CONTROL_GAP + DELETE_CONTROL_PADDING;
        let control_y = y + (card_height - NOTE_LINE_HEIGHT) / 2.0;
        text.draw(&control, canvas, control_x, control_y, rgb(DELETE_COLOR));

        y += card_height + NOTE_GAP;
    }
}

fn draw_label(canvas: &mut Raster, text: &mut TextRasterizer, label: &str) {
    let center = BOARD_SIZE / 2.0;
    let radius = CENTER_CIRCLE_SIZE / 2.0;
    canvas.fill_circle(center, center, radius, rgb(BOARD_LINE_COLOR));
    canvas.fill_circle(center, center, radius - BOARD_BORDER_WIDTH, WHITE);

    if label.is_empty() {
        return;
    }
    let buffer = text.layout(label, true, Some(LABEL_INPUT_WIDTH), canvas.scale);
    let (width, height) = text_extent(&buffer, canvas.scale);
    text.draw(
        &buffer,
        canvas,
        center - width / 2.0,
        center - height / 2.0,
        rgb(BOARD_TEXT_COLOR),
    );
}

/// Logical (unscaled) width and height of a shaped buffer.
fn text_extent(buffer: &Buffer, scale: f32) -> (f32, f32) {
    let mut width: f32 = 0.0;
    let mut lines = 0usize;
    for run in buffer.layout_runs() {
        width = width.max(run.line_w);
        lines += 1;
    }
    (width / scale, lines as f32 * NOTE_LINE_HEIGHT)
}

fn rgb(hex: u32) -> [u8; 4] {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 0xff]
}

// ============================================================================
// Text
// ============================================================================

struct TextRasterizer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextRasterizer {
    fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    fn layout(&mut self, text: &str, bold: bool, max_width: Option<f32>, scale: f32) -> Buffer {
        let metrics = Metrics::new(NOTE_FONT_SIZE * scale, NOTE_LINE_HEIGHT * scale);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, max_width.map(|w| w * scale), None);

        let weight = if bold { Weight::BOLD } else { Weight::NORMAL };
        let attrs = Attrs::new().family(Family::SansSerif).weight(weight);
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }

    /// Draw `buffer` with its top-left corner at logical (`x`, `y`).
    fn draw(&mut self, buffer: &Buffer, canvas: &mut Raster, x: f32, y: f32, color: [u8; 4]) {
        let origin_x = (x * canvas.scale).round() as i64;
        let origin_y = (y * canvas.scale).round() as i64;
        let text_color = Color::rgba(color[0], color[1], color[2], color[3]);

        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            text_color,
            |gx, gy, w, h, glyph_color| {
                let rgba = [glyph_color.r(), glyph_color.g(), glyph_color.b(), glyph_color.a()];
                for dy in 0..h as i64 {
                    for dx in 0..w as i64 {
                        canvas.blend(origin_x + gx as i64 + dx, origin_y + gy as i64 + dy, rgba, 1.0);
                    }
                }
            },
        );
    }
}

// ============================================================================
// Pixels
// ============================================================================

/// RGBA target addressed in logical pixels.
struct Raster {
    image: RgbaImage,
    scale: f32,
}

impl Raster {
    fn new(size: u32, scale: f32, background: [u8; 4]) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, Rgba(background)),
            scale,
        }
    }

    /// Source-over blend of `color` at physical pixel (`x`, `y`).
    fn blend(&mut self, x: i64, y: i64, color: [u8; 4], coverage: f32) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        let alpha = (color[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        for channel in 0..3 {
            let dst = pixel.0[channel] as f32;
            pixel.0[channel] = (color[channel] as f32 * alpha + dst * (1.0 - alpha)).round() as u8;
        }
        let dst_alpha = pixel.0[3] as f32 / 255.0;
        pixel.0[3] = ((alpha + dst_alpha * (1.0 - alpha)) * 255.0).round() as u8;
    }

    fn physical_span(&self, start: f32, len: f32) -> (i64, i64) {
        let from = (start * self.scale).round() as i64;
        let to = ((start + len) * self.scale).round() as i64;
        (from, to.max(from + 1))
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [u8; 4]) {
        let (x0, x1) = self.physical_span(x, w);
        let (y0, y1) = self.physical_span(y, h);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color, 1.0);
            }
        }
    }

    fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: [u8; 4]) {
        let s = self.scale;
        let (x0, y0, x1, y1) = (x * s, y * s, (x + w) * s, (y + h) * s);
        let r = (radius * s).min((x1 - x0) / 2.0).min((y1 - y0) / 2.0);

        for py in y0.floor() as i64..y1.ceil() as i64 {
            for px in x0.floor() as i64..x1.ceil() as i64 {
                let cx = px as f32 + 0.5;
                let cy = py as f32 + 0.5;
                let dx = (x0 + r - cx).max(cx - (x1 - r)).max(0.0);
                let dy = (y0 + r - cy).max(cy - (y1 - r)).max(0.0);
                let dist = (dx * dx + dy * dy).sqrt();
                let coverage = if dist == 0.0 { 1.0 } else { r + 0.5 - dist };
                self.blend(px, py, color, coverage);
            }
        }
    }

    fn fill_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: [u8; 4]) {
        let s = self.scale;
        let (cx, cy, r) = (center_x * s, center_y * s, radius * s);
        for py in (cy - r).floor() as i64..(cy + r).ceil() as i64 {
            for px in (cx - r).floor() as i64..(cx + r).ceil() as i64 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let coverage = r + 0.5 - (dx * dx + dy * dy).sqrt();
                self.blend(px, py, color, coverage);
            }
        }
    }
}
