use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(p: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Color { r, g, b, a }
    }
}

/// Pixel box with inclusive corners, `(x0, y0)` top-left and `(x1, y1)` bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square box of edge `side` (in box units) with its top-left at `(x, y)`.
    pub const fn square(x: i32, y: i32, side: i32) -> Self {
        Self::new(x, y, x + side, y + side)
    }

    /// Box enclosing a circle of radius `r` around `(cx, cy)`.
    pub const fn around(cx: i32, cy: i32, r: i32) -> Self {
        Self::new(cx - r, cy - r, cx + r, cy + r)
    }

    pub const fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub const fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub const fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    pub const fn inset(&self, d: i32) -> Self {
        Self::new(self.x0 + d, self.y0 + d, self.x1 - d, self.y1 - d)
    }

    pub fn intersect(&self, other: &Bounds) -> Option<Bounds> {
        let b = Bounds::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        );
        (!b.is_empty()).then_some(b)
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HAlign {
    #[default]
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VAlign {
    #[default]
    Ascender,
    Middle,
    Baseline,
    Descender,
}

/// Where the text origin sits relative to the laid out line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub h: HAlign,
    pub v: VAlign,
}

impl Anchor {
    pub const LEFT_ASCENDER: Anchor = Anchor { h: HAlign::Left, v: VAlign::Ascender };
    pub const LEFT_MIDDLE: Anchor = Anchor { h: HAlign::Left, v: VAlign::Middle };
    pub const MIDDLE_MIDDLE: Anchor = Anchor { h: HAlign::Middle, v: VAlign::Middle };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Em size in pixels.
    pub size: f32,
    pub color: Color,
    pub anchor: Anchor,
    /// Extra stroke width in pixels used to thicken glyphs, 0 for regular weight.
    pub embolden: f32,
}

impl TextStyle {
    pub fn new(size: f32, color: Color) -> Self {
        Self { size, color, anchor: Anchor::LEFT_ASCENDER, embolden: 0.0 }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn embolden(mut self, width: f32) -> Self {
        self.embolden = width.max(0.0);
        self
    }
}

/// One drawing instruction. Shapes are painted in list order, later ones on top.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { bounds: Bounds, color: Color },
    RoundedRect { bounds: Bounds, radius: i32, color: Color },
    /// Sector of the ellipse inscribed in `bounds`, sweeping clockwise from `start` to `end` degrees.
    PieSlice { bounds: Bounds, start: f32, end: f32, color: Color },
    Ellipse { bounds: Bounds, color: Color },
    Line { from: Point, to: Point, width: f32, color: Color },
    Arc { bounds: Bounds, start: f32, end: f32, width: f32, color: Color },
    Text { origin: Point, text: String, style: TextStyle },
    /// Text stamped once per pixel offset, the union filled once.
    OverdrawnText { origin: Point, text: String, style: TextStyle, offsets: Vec<(i32, i32)> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_intersection_drops_disjoint_boxes() {
        let a = Bounds::new(0, 0, 10, 10);
        assert_eq!(a.intersect(&Bounds::new(5, 5, 20, 20)), Some(Bounds::new(5, 5, 10, 10)));
        assert_eq!(a.intersect(&Bounds::new(11, 0, 20, 10)), None);
        assert!(Bounds::new(3, 0, 2, 10).is_empty());
    }
}
