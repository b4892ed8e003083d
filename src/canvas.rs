use image::{Rgba, RgbaImage};

use crate::models::{Bounds, Color, Point};

const EPS: f32 = 1e-4;

/// Square-or-not RGBA raster that shapes are painted onto.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Transparent square canvas.
    pub fn new(size: u32) -> Self {
        Self::with_background(size, Color::TRANSPARENT)
    }

    pub fn with_background(size: u32, background: Color) -> Self {
        Self { image: RgbaImage::from_pixel(size, size, background.to_rgba()) }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(0, 0, self.width() as i32 - 1, self.height() as i32 - 1)
    }

    /// Color at `(x, y)`, transparent outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return Color::TRANSPARENT;
        }
        (*self.image.get_pixel(x as u32, y as u32)).into()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Empty coverage mask with the canvas dimensions.
    pub fn mask(&self) -> Mask {
        Mask::new(self.width(), self.height())
    }

    /// Blends `color` once into every covered pixel, scaling its alpha by the coverage.
    pub fn fill_mask(&mut self, mask: &Mask, color: Color) {
        for (x, y, coverage) in mask.covered() {
            if x as u32 >= self.width() || y as u32 >= self.height() {
                continue;
            }
            let dst = self.image.get_pixel_mut(x as u32, y as u32);
            *dst = blend(*dst, color, coverage);
        }
    }

    pub fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        let mut mask = self.mask();
        mask.add_rect(bounds);
        self.fill_mask(&mask, color);
    }

    pub fn fill_ellipse(&mut self, bounds: Bounds, color: Color) {
        let mut mask = self.mask();
        mask.add_ellipse(bounds);
        self.fill_mask(&mask, color);
    }

    pub fn fill_pie_slice(&mut self, bounds: Bounds, start: f32, end: f32, color: Color) {
        let mut mask = self.mask();
        mask.add_pie_slice(bounds, start, end);
        self.fill_mask(&mask, color);
    }

    pub fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        let mut mask = self.mask();
        mask.add_line(from, to, width);
        self.fill_mask(&mask, color);
    }

    pub fn draw_arc(&mut self, bounds: Bounds, start: f32, end: f32, width: f32, color: Color) {
        let mut mask = self.mask();
        mask.add_arc(bounds, start, end, width);
        self.fill_mask(&mask, color);
    }
}

/// Source-over of a straight-alpha color onto a straight-alpha pixel.
fn blend(dst: Rgba<u8>, src: Color, coverage: u8) -> Rgba<u8> {
    let sa = (src.a as f32 / 255.0) * (coverage as f32 / 255.0);
    if sa <= 0.0 {
        return dst;
    }
    let [dr, dg, db, da] = dst.0;
    let da = da as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let mix = |s: u8, d: u8| {
        let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        mix(src.r, dr),
        mix(src.g, dg),
        mix(src.b, db),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

/// Per-pixel coverage (0..=255). Adding parts keeps the maximum coverage, so
/// overlapping parts of one shape are only blended once when the mask is filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<u8>,
    dirty: Option<Bounds>,
}

impl Mask {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, data: vec![0; (width * height) as usize], dirty: None }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.dirty.is_none()
    }

    pub fn coverage(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return 0;
        }
        self.data[(y as u32 * self.width + x as u32) as usize]
    }

    fn full(&self) -> Bounds {
        Bounds::new(0, 0, self.width as i32 - 1, self.height as i32 - 1)
    }

    fn clip(&self, b: Bounds) -> Option<Bounds> {
        b.intersect(&self.full())
    }

    /// Raises the coverage at `(x, y)` to at least `coverage`. Points outside are ignored.
    pub fn cover(&mut self, x: i32, y: i32, coverage: u8) {
        if coverage == 0 || x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        if self.data[idx] < coverage {
            self.data[idx] = coverage;
        }
        let point = Bounds::new(x, y, x, y);
        self.dirty = Some(match self.dirty {
            Some(d) => d.union(&point),
            None => point,
        });
    }

    /// Iterates `(x, y, coverage)` over every pixel with non-zero coverage.
    pub fn covered(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        let area = self.dirty.unwrap_or(Bounds::new(0, 0, -1, -1));
        (area.y0..=area.y1).flat_map(move |y| {
            (area.x0..=area.x1).filter_map(move |x| {
                let c = self.coverage(x, y);
                (c > 0).then_some((x, y, c))
            })
        })
    }

    pub fn union(&mut self, other: &Mask) {
        self.union_offset(other, 0, 0);
    }

    /// Unions `other` moved by `(dx, dy)`. Coverage `other` lost at its own
    /// edges is not recovered.
    pub fn union_offset(&mut self, other: &Mask, dx: i32, dy: i32) {
        for (x, y, c) in other.covered() {
            self.cover(x + dx, y + dy, c);
        }
    }

    pub fn add_rect(&mut self, bounds: Bounds) {
        let Some(b) = self.clip(bounds) else { return };
        for y in b.y0..=b.y1 {
            for x in b.x0..=b.x1 {
                self.cover(x, y, 255);
            }
        }
    }

    pub fn add_ellipse(&mut self, bounds: Bounds) {
        self.add_pie_slice(bounds, 0.0, 360.0);
    }

    /// Sector of the ellipse inscribed in `bounds`, sampled at integer pixel
    /// coordinates. Angles are degrees clockwise from 3 o'clock.
    pub fn add_pie_slice(&mut self, bounds: Bounds, start: f32, end: f32) {
        if bounds.is_empty() {
            return;
        }
        let geo = EllipseGeometry::new(bounds);
        let Some(b) = self.clip(bounds) else { return };
        for y in b.y0..=b.y1 {
            for x in b.x0..=b.x1 {
                let (dx, dy) = geo.offset(x, y);
                if geo.norm(dx, dy, 0.0) <= 1.0 + EPS && in_sweep(dx, dy, start, end) {
                    self.cover(x, y, 255);
                }
            }
        }
    }

    /// Outline of the ellipse inscribed in `bounds`, `width` pixels thick towards the center.
    pub fn add_arc(&mut self, bounds: Bounds, start: f32, end: f32, width: f32) {
        if bounds.is_empty() || width <= 0.0 {
            return;
        }
        let geo = EllipseGeometry::new(bounds);
        let Some(b) = self.clip(bounds) else { return };
        let solid = geo.rx <= width || geo.ry <= width;
        for y in b.y0..=b.y1 {
            for x in b.x0..=b.x1 {
                let (dx, dy) = geo.offset(x, y);
                if geo.norm(dx, dy, 0.0) > 1.0 + EPS || !in_sweep(dx, dy, start, end) {
                    continue;
                }
                if solid || geo.norm(dx, dy, width) > 1.0 + EPS {
                    self.cover(x, y, 255);
                }
            }
        }
    }

    /// Pixels whose coordinates lie within `width / 2` of the segment.
    pub fn add_line(&mut self, from: Point, to: Point, width: f32) {
        let half = (width.max(1.0)) / 2.0;
        let area = Bounds::new(
            (from.x.min(to.x) - half).floor() as i32,
            (from.y.min(to.y) - half).floor() as i32,
            (from.x.max(to.x) + half).ceil() as i32,
            (from.y.max(to.y) + half).ceil() as i32,
        );
        let Some(b) = self.clip(area) else { return };
        for y in b.y0..=b.y1 {
            for x in b.x0..=b.x1 {
                if segment_distance(Point::new(x as f32, y as f32), from, to) <= half + EPS {
                    self.cover(x, y, 255);
                }
            }
        }
    }

    /// Copies an alpha bitmap whose top-left pixel lands on `(left, top)`.
    pub fn add_alpha(&mut self, left: i32, top: i32, width: u32, height: u32, alpha: &[u8]) {
        for row in 0..height {
            for col in 0..width {
                let Some(&a) = alpha.get((row * width + col) as usize) else { return };
                self.cover(left + col as i32, top + row as i32, a);
            }
        }
    }
}

struct EllipseGeometry {
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
}

impl EllipseGeometry {
    fn new(b: Bounds) -> Self {
        Self {
            cx: (b.x0 + b.x1) as f32 / 2.0,
            cy: (b.y0 + b.y1) as f32 / 2.0,
            rx: b.width() as f32 / 2.0,
            ry: b.height() as f32 / 2.0,
        }
    }

    fn offset(&self, x: i32, y: i32) -> (f32, f32) {
        (x as f32 - self.cx, y as f32 - self.cy)
    }

    /// Normalized squared distance against the ellipse shrunk by `shrink` on both radii.
    fn norm(&self, dx: f32, dy: f32, shrink: f32) -> f32 {
        let axis = |d: f32, r: f32| {
            let r = r - shrink;
            if r > 0.0 {
                d / r
            } else if d.abs() <= EPS {
                0.0
            } else {
                f32::INFINITY
            }
        };
        let nx = axis(dx, self.rx);
        let ny = axis(dy, self.ry);
        nx * nx + ny * ny
    }
}

/// Whether the direction `(dx, dy)` falls within the clockwise sweep `start..=end`.
/// The center point belongs to every sweep.
fn in_sweep(dx: f32, dy: f32, start: f32, end: f32) -> bool {
    let sweep = end - start;
    if sweep >= 360.0 || (dx.abs() <= EPS && dy.abs() <= EPS) {
        return true;
    }
    if sweep < 0.0 {
        return false;
    }
    let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
    let from_start = (angle - start.rem_euclid(360.0)).rem_euclid(360.0);
    from_start <= sweep + EPS || from_start >= 360.0 - EPS
}

fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let (vx, vy) = (b.x - a.x, b.y - a.y);
    let len2 = vx * vx + vy * vy;
    let t = if len2 > 0.0 { (((p.x - a.x) * vx + (p.y - a.y) * vy) / len2).clamp(0.0, 1.0) } else { 0.0 };
    let (qx, qy) = (a.x + t * vx, a.y + t * vy);
    ((p.x - qx).powi(2) + (p.y - qy).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::WHITE;

    #[test]
    fn opaque_fill_replaces_transparent_pixels_exactly() {
        let mut canvas = Canvas::new(8);
        canvas.fill_rect(Bounds::new(2, 2, 4, 4), WHITE);
        assert_eq!(canvas.pixel(2, 2), WHITE);
        assert_eq!(canvas.pixel(4, 4), WHITE);
        assert_eq!(canvas.pixel(5, 4), Color::TRANSPARENT);
        assert_eq!(canvas.pixel(1, 2), Color::TRANSPARENT);
    }

    #[test]
    fn translucent_fill_over_opaque_mixes_channels() {
        let mut canvas = Canvas::with_background(2, Color::rgb(0, 0, 0));
        canvas.fill_rect(Bounds::new(0, 0, 1, 1), Color::rgba(255, 255, 255, 128));
        let p = canvas.pixel(0, 0);
        assert_eq!(p.a, 255);
        assert!((127..=129).contains(&p.r), "got {:?}", p);
    }

    #[test]
    fn pie_slice_only_covers_its_quadrant() {
        let mut canvas = Canvas::new(41);
        canvas.fill_pie_slice(Bounds::new(0, 0, 40, 40), 180.0, 270.0, WHITE);
        // up-left of the center is inside, the other three quadrants are not
        assert_eq!(canvas.pixel(10, 10), WHITE);
        assert_eq!(canvas.pixel(30, 10), Color::TRANSPARENT);
        assert_eq!(canvas.pixel(10, 30), Color::TRANSPARENT);
        assert_eq!(canvas.pixel(30, 30), Color::TRANSPARENT);
        // both axis ends of the sweep are included
        assert_eq!(canvas.pixel(0, 20), WHITE);
        assert_eq!(canvas.pixel(20, 0), WHITE);
        assert_eq!(canvas.pixel(20, 20), WHITE);
    }

    #[test]
    fn sweep_wrapping_past_zero_includes_three_oclock() {
        assert!(in_sweep(1.0, 0.0, 270.0, 360.0));
        assert!(in_sweep(0.0, -1.0, 270.0, 360.0));
        assert!(!in_sweep(0.0, 1.0, 270.0, 360.0));
        assert!(in_sweep(-1.0, 1.0, 90.0, 180.0));
    }

    #[test]
    fn ellipse_matches_circle_equation() {
        let mut canvas = Canvas::new(21);
        canvas.fill_ellipse(Bounds::around(10, 10, 10), WHITE);
        for y in 0..21 {
            for x in 0..21 {
                let d2 = (x - 10) * (x - 10) + (y - 10) * (y - 10);
                let inside = canvas.pixel(x, y) == WHITE;
                assert_eq!(inside, d2 <= 100, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn one_pixel_line_stays_on_its_row() {
        let mut canvas = Canvas::new(16);
        canvas.draw_line(Point::new(2.0, 5.0), Point::new(12.0, 5.0), 1.0, WHITE);
        assert_eq!(canvas.pixel(2, 5), WHITE);
        assert_eq!(canvas.pixel(12, 5), WHITE);
        assert_eq!(canvas.pixel(13, 5), Color::TRANSPARENT);
        assert_eq!(canvas.pixel(7, 4), Color::TRANSPARENT);
        assert_eq!(canvas.pixel(7, 6), Color::TRANSPARENT);
    }

    #[test]
    fn arc_is_a_ring_not_a_disc() {
        let mut canvas = Canvas::new(41);
        canvas.draw_arc(Bounds::new(0, 0, 40, 40), 225.0, 315.0, 2.0, WHITE);
        // top of the circle, on the ring
        assert_eq!(canvas.pixel(20, 0), WHITE);
        assert_eq!(canvas.pixel(20, 1), WHITE);
        // well inside the ring
        assert_eq!(canvas.pixel(20, 5), Color::TRANSPARENT);
        // bottom of the circle is outside the sweep
        assert_eq!(canvas.pixel(20, 40), Color::TRANSPARENT);
    }

    #[test]
    fn mask_union_keeps_max_coverage() {
        let mut a = Mask::new(4, 4);
        a.cover(1, 1, 100);
        let mut b = Mask::new(4, 4);
        b.cover(1, 1, 50);
        b.cover(2, 2, 200);
        a.union(&b);
        assert_eq!(a.coverage(1, 1), 100);
        assert_eq!(a.coverage(2, 2), 200);
        assert_eq!(a.covered().count(), 2);
    }

    #[test]
    fn offset_union_shifts_and_clips() {
        let mut src = Mask::new(4, 4);
        src.cover(0, 0, 90);
        src.cover(3, 3, 255);
        let mut dst = Mask::new(4, 4);
        dst.union_offset(&src, 1, 0);
        assert_eq!(dst.coverage(1, 0), 90);
        assert_eq!(dst.coverage(0, 0), 0);
        // (3, 3) moves off the raster
        assert_eq!(dst.covered().count(), 1);
    }

    #[test]
    fn shapes_outside_the_canvas_are_clipped() {
        let mut canvas = Canvas::new(4);
        canvas.fill_rect(Bounds::new(-10, -10, 1, 1), WHITE);
        canvas.fill_ellipse(Bounds::new(10, 10, 20, 20), WHITE);
        assert_eq!(canvas.pixel(0, 0), WHITE);
        assert_eq!(canvas.pixel(2, 2), Color::TRANSPARENT);
    }
}
