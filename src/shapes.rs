use crate::canvas::{Canvas, Mask};
use crate::fonts::FontHandle;
use crate::models::{Bounds, Color, Shape};
use crate::text;

/// Adds a rounded rectangle to `mask`: two bands that leave out the corner
/// strips plus one quarter-disc pie slice per corner, centered on the inset
/// corner point.
pub fn add_rounded_rect(mask: &mut Mask, bounds: Bounds, radius: i32) {
    if bounds.is_empty() {
        return;
    }
    let r = radius.clamp(0, bounds.width().min(bounds.height()) / 2);
    let Bounds { x0, y0, x1, y1 } = bounds;
    let d = 2 * r;

    mask.add_rect(Bounds::new(x0, y0 + r, x1, y1 - r));
    mask.add_rect(Bounds::new(x0 + r, y0, x1 - r, y1));
    mask.add_pie_slice(Bounds::new(x0, y0, x0 + d, y0 + d), 180.0, 270.0);
    mask.add_pie_slice(Bounds::new(x1 - d, y0, x1, y0 + d), 270.0, 360.0);
    mask.add_pie_slice(Bounds::new(x0, y1 - d, x0 + d, y1), 90.0, 180.0);
    mask.add_pie_slice(Bounds::new(x1 - d, y1 - d, x1, y1), 0.0, 90.0);
}

/// Fills a rounded rectangle. The parts are unioned before the fill, so a
/// translucent color has the same alpha everywhere inside the shape.
pub fn rounded_rectangle(canvas: &mut Canvas, bounds: Bounds, radius: i32, color: Color) {
    let mut mask = canvas.mask();
    add_rounded_rect(&mut mask, bounds, radius);
    canvas.fill_mask(&mask, color);
}

pub fn draw_shape(canvas: &mut Canvas, shape: &Shape, font: &FontHandle) {
    match shape {
        Shape::Rect { bounds, color } => canvas.fill_rect(*bounds, *color),
        Shape::RoundedRect { bounds, radius, color } => {
            rounded_rectangle(canvas, *bounds, *radius, *color)
        }
        Shape::PieSlice { bounds, start, end, color } => {
            canvas.fill_pie_slice(*bounds, *start, *end, *color)
        }
        Shape::Ellipse { bounds, color } => canvas.fill_ellipse(*bounds, *color),
        Shape::Line { from, to, width, color } => canvas.draw_line(*from, *to, *width, *color),
        Shape::Arc { bounds, start, end, width, color } => {
            canvas.draw_arc(*bounds, *start, *end, *width, *color)
        }
        Shape::Text { origin, text, style } => text::draw_text(canvas, *origin, text, font, style),
        Shape::OverdrawnText { origin, text, style, offsets } => {
            text::draw_text_overdraw(canvas, *origin, text, font, style, offsets)
        }
    }
}

/// Paints `shapes` in order (painter's algorithm).
pub fn draw_shapes(canvas: &mut Canvas, shapes: &[Shape], font: &FontHandle) {
    for shape in shapes {
        draw_shape(canvas, shape, font);
    }
}
