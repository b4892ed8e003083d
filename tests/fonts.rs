mod common;

use std::fs;

use iconsmith::artwork::{self, FinalIcon};
use iconsmith::fonts::{FontHandle, FontProvider, SystemFontProvider};
use iconsmith::models::{Anchor, Color, Point, TextStyle};
use iconsmith::text;
use pretty_assertions::assert_eq;

fn centered(size: f32) -> TextStyle {
    TextStyle::new(size, Color::WHITE).anchor(Anchor::MIDDLE_MIDDLE)
}

#[test]
fn first_parseable_candidate_wins() {
    let dir = common::scratch_dir("fonts-candidates");
    fs::create_dir_all(&dir).unwrap();
    let garbage = dir.join("broken.ttf");
    fs::write(&garbage, b"not a font").unwrap();

    let provider = SystemFontProvider::new(vec![
        dir.join("missing.ttf"),
        garbage,
        common::fixture_font_path(),
    ]);
    match provider.resolve() {
        FontHandle::Outline(font) => assert_eq!(font.source(), common::fixture_font_path().as_path()),
        FontHandle::Builtin => panic!("fell back to the bitmap font"),
    }
}

#[test]
fn middle_anchored_glyph_is_centered_on_its_origin() {
    let mask = text::text_mask(200, 200, &common::fixture_font(), Point::new(100.0, 100.0), ">", &centered(100.0));
    let b = common::covered_bounds(&mask);
    let (cx, cy) = ((b.x0 + b.x1) as f32 / 2.0, (b.y0 + b.y1) as f32 / 2.0);
    assert!((cx - 100.0).abs() <= 3.0, "{:?}", b);
    // the anchor centers the ascender..descender band, not the ink
    assert!((cy - 100.0).abs() <= 8.0, "{:?}", b);
    assert!(b.width() > 30 && b.height() > 30, "{:?}", b);
}

#[test]
fn glyphs_are_drawn_the_right_way_up() {
    let font = common::fixture_font();
    let underscore = text::text_mask(200, 200, &font, Point::new(100.0, 100.0), "_", &centered(100.0));
    let b = common::covered_bounds(&underscore);
    // an underscore hangs below the middle of the line
    assert!(b.y0 > 130, "{:?}", b);
    assert!(b.height() < 10, "{:?}", b);

    // '>' points right: its rightmost ink is at mid height, not at the top or bottom
    let arrow = text::text_mask(200, 200, &font, Point::new(100.0, 100.0), ">", &centered(100.0));
    let ab = common::covered_bounds(&arrow);
    let tip_y: Vec<i32> = arrow.covered().filter(|&(x, _, _)| x == ab.x1).map(|(_, y, _)| y).collect();
    let mid = (ab.y0 + ab.y1) / 2;
    assert!(tip_y.iter().any(|&y| (y - mid).abs() <= 4), "{:?} {:?}", ab, tip_y);
}

#[test]
fn embolden_grows_outline_glyphs_on_every_side() {
    let font = common::fixture_font();
    let at = Point::new(100.0, 100.0);
    let plain = text::text_mask(200, 200, &font, at, ">", &centered(100.0));
    let bold = text::text_mask(200, 200, &font, at, ">", &centered(100.0).embolden(6.0));

    let (p, b) = (common::covered_bounds(&plain), common::covered_bounds(&bold));
    for grow in [p.x0 - b.x0, p.y0 - b.y0, b.x1 - p.x1, b.y1 - p.y1] {
        assert!((2..=4).contains(&grow), "plain {:?} bold {:?}", p, b);
    }
    assert!(bold.covered().count() > plain.covered().count());
    // the stroke is unioned with the fill, never cut out of it
    assert!(plain.covered().all(|(x, y, c)| bold.coverage(x, y) >= c));
}

#[test]
fn final_icon_renders_with_an_outline_font() {
    let provider = SystemFontProvider::new(vec![common::fixture_font_path()]);
    let master = artwork::render(&FinalIcon, &provider);
    assert_eq!(master.width(), 1024);
    assert_eq!(master.pixel(0, 0), Color::TRANSPARENT);
    let white = master.image().pixels().filter(|p| p.0 == [255, 255, 255, 255]).count();
    assert!(white > 1000, "only {} white pixels", white);
}
