use tiny_skia::{FillRule, LineJoin, PathBuilder, Stroke, Transform};
use ttf_parser::GlyphId;

use crate::builtin_font;
use crate::canvas::{Canvas, Mask};
use crate::fonts::FontHandle;
use crate::models::{Anchor, Bounds, HAlign, Point, TextStyle, VAlign};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    /// Distance from the baseline up to the ascender line, positive.
    pub ascender: f32,
    /// Distance from the baseline down to the descender line, negative.
    pub descender: f32,
}

pub fn measure(font: &FontHandle, text: &str, size: f32) -> TextMetrics {
    match font {
        FontHandle::Outline(f) => match f.face() {
            Some(face) => outline_metrics(&face, text, size),
            None => builtin_metrics(text, size),
        },
        FontHandle::Builtin => builtin_metrics(text, size),
    }
}

fn glyph_id(face: &ttf_parser::Face<'_>, ch: char) -> GlyphId {
    face.glyph_index(ch).unwrap_or(GlyphId(0))
}

fn outline_metrics(face: &ttf_parser::Face<'_>, text: &str, size: f32) -> TextMetrics {
    let scale = size / face.units_per_em() as f32;
    let width = text
        .chars()
        .map(|ch| face.glyph_hor_advance(glyph_id(face, ch)).unwrap_or(0) as f32 * scale)
        .sum();
    TextMetrics {
        width,
        ascender: face.ascender() as f32 * scale,
        descender: face.descender() as f32 * scale,
    }
}

fn builtin_metrics(text: &str, size: f32) -> TextMetrics {
    let s = builtin_font::scale_for(size) as f32;
    TextMetrics {
        width: text.chars().count() as f32 * builtin_font::ADVANCE as f32 * s,
        ascender: builtin_font::ASCENT as f32 * s,
        descender: -(builtin_font::DESCENT as f32) * s,
    }
}

/// Pen position (left edge, baseline) for text anchored at `origin`.
fn pen_origin(origin: Point, m: &TextMetrics, anchor: Anchor) -> Point {
    let x = match anchor.h {
        HAlign::Left => origin.x,
        HAlign::Middle => origin.x - m.width / 2.0,
        HAlign::Right => origin.x - m.width,
    };
    let baseline = match anchor.v {
        VAlign::Ascender => origin.y + m.ascender,
        VAlign::Middle => origin.y + (m.ascender + m.descender) / 2.0,
        VAlign::Baseline => origin.y,
        VAlign::Descender => origin.y + m.descender,
    };
    Point::new(x, baseline)
}

/// Coverage of `text` on a `width` x `height` raster.
///
/// Outline fonts are thickened by stroking the glyph outlines with
/// `style.embolden` pixels. The bitmap font has no outline, so it is stamped
/// `embolden` more times one pixel to the right instead (see [`overdraw_mask`]).
pub fn text_mask(
    width: u32,
    height: u32,
    font: &FontHandle,
    origin: Point,
    text: &str,
    style: &TextStyle,
) -> Mask {
    let metrics = measure(font, text, style.size);
    let pen = pen_origin(origin, &metrics, style.anchor);
    if let FontHandle::Outline(f) = font {
        if let Some(face) = f.face() {
            return outline_mask(width, height, &face, pen, text, style);
        }
    }
    let spread = style.embolden.round() as i32;
    if spread > 0 {
        let offsets: Vec<(i32, i32)> = (0..=spread).map(|dx| (dx, 0)).collect();
        return overdraw_mask(width, height, font, origin, text, style, &offsets);
    }
    let mut mask = Mask::new(width, height);
    add_builtin_glyphs(&mut mask, pen, text, style.size);
    mask
}

pub fn draw_text(canvas: &mut Canvas, origin: Point, text: &str, font: &FontHandle, style: &TextStyle) {
    let mask = text_mask(canvas.width(), canvas.height(), font, origin, text, style);
    canvas.fill_mask(&mask, style.color);
}

/// Coverage of `text` stamped once per `(dx, dy)` offset. The glyphs are
/// rendered once at regular weight and the offsets unioned, so overlapping
/// stamps never stack.
pub fn overdraw_mask(
    width: u32,
    height: u32,
    font: &FontHandle,
    origin: Point,
    text: &str,
    style: &TextStyle,
    offsets: &[(i32, i32)],
) -> Mask {
    let plain = TextStyle { embolden: 0.0, ..*style };
    let glyphs = text_mask(width, height, font, origin, text, &plain);
    let mut mask = Mask::new(width, height);
    for &(dx, dy) in offsets {
        mask.union_offset(&glyphs, dx, dy);
    }
    mask
}

/// Thickens text by stamping it at every offset, the way fonts without a
/// weight parameter are made bold. [`TextStyle::embolden`] is the regular
/// way to get bold outline glyphs.
pub fn draw_text_overdraw(
    canvas: &mut Canvas,
    origin: Point,
    text: &str,
    font: &FontHandle,
    style: &TextStyle,
    offsets: &[(i32, i32)],
) {
    let mask = overdraw_mask(canvas.width(), canvas.height(), font, origin, text, style, offsets);
    canvas.fill_mask(&mask, style.color);
}

fn add_builtin_glyphs(mask: &mut Mask, pen: Point, text: &str, size: f32) {
    let s = builtin_font::scale_for(size);
    let left = pen.x.round() as i32;
    let top = pen.y.round() as i32 - builtin_font::ASCENT * s;
    for (i, ch) in text.chars().enumerate() {
        let columns = builtin_font::glyph(ch);
        let gx = left + i as i32 * builtin_font::ADVANCE * s;
        for col in 0..builtin_font::COLUMNS {
            for row in 0..builtin_font::CELL_HEIGHT {
                if builtin_font::is_set(columns, col, row) {
                    let x = gx + col * s;
                    let y = top + row * s;
                    mask.add_rect(Bounds::new(x, y, x + s - 1, y + s - 1));
                }
            }
        }
    }
}

struct GlyphSink<'a> {
    builder: &'a mut PathBuilder,
    scale: f32,
    dx: f32,
    baseline: f32,
}

impl GlyphSink<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.dx + x * self.scale, self.baseline - y * self.scale)
    }
}

impl ttf_parser::OutlineBuilder for GlyphSink<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

fn outline_mask(
    width: u32,
    height: u32,
    face: &ttf_parser::Face<'_>,
    pen: Point,
    text: &str,
    style: &TextStyle,
) -> Mask {
    let mut mask = Mask::new(width, height);
    let scale = style.size / face.units_per_em() as f32;
    let mut builder = PathBuilder::new();
    let mut x = pen.x;
    for ch in text.chars() {
        let id = glyph_id(face, ch);
        let mut sink = GlyphSink { builder: &mut builder, scale, dx: x, baseline: pen.y };
        face.outline_glyph(id, &mut sink);
        x += face.glyph_hor_advance(id).unwrap_or(0) as f32 * scale;
    }
    // whitespace-only text has no outline
    let Some(path) = builder.finish() else { return mask };

    if let Some(mut fill) = tiny_skia::Mask::new(width, height) {
        fill.fill_path(&path, FillRule::Winding, true, Transform::identity());
        mask.add_alpha(0, 0, width, height, fill.data());
    }
    if style.embolden > 0.0 {
        let stroke = Stroke { width: style.embolden, line_join: LineJoin::Round, ..Stroke::default() };
        if let (Some(outline), Some(mut bold)) = (path.stroke(&stroke, 1.0), tiny_skia::Mask::new(width, height)) {
            bold.fill_path(&outline, FillRule::Winding, true, Transform::identity());
            mask.add_alpha(0, 0, width, height, bold.data());
        }
    }
    mask
}
