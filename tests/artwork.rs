mod common;

use std::fs;

use iconsmith::artwork::{self, Artwork, FinalIcon, FullIcon, GenerateOptions, Overview};
use iconsmith::export::{IconSizeSet, OutputRoot};
use iconsmith::fonts::BuiltinFontProvider;
use iconsmith::models::Color;
use pretty_assertions::assert_eq;

#[test]
fn every_preset_renders_a_square_master_once() {
    for art in artwork::all() {
        let fonts = common::FakeFonts::default();
        let master = artwork::render(art.as_ref(), &fonts);
        assert_eq!(master.width(), art.master_size(), "{}", art.name());
        assert!(master.is_square());
        assert_eq!(fonts.calls.get(), 1, "{} resolved the font more than once", art.name());
    }
}

#[test]
fn final_icon_has_transparent_rounded_corners() {
    let master = artwork::render(&FinalIcon, &BuiltinFontProvider);
    assert_eq!(master.pixel(0, 0), Color::TRANSPARENT);
    assert_eq!(master.pixel(1023, 1023), Color::TRANSPARENT);
    assert_eq!(master.pixel(40, 40).a, 0);
    // inside the corner arc and along the edges it is orange
    assert_eq!(master.pixel(100, 100), Color::rgb(235, 140, 85));
    assert_eq!(master.pixel(0, 512), Color::rgb(235, 140, 85));
    assert_eq!(master.pixel(512, 1023), Color::rgb(235, 140, 85));
}

#[test]
fn full_icon_is_opaque_everywhere() {
    let master = artwork::render(&FullIcon, &BuiltinFontProvider);
    assert!(master.image().pixels().all(|p| p.0[3] == 255));
    assert_eq!(master.pixel(0, 0), Color::rgb(235, 140, 85));
}

#[test]
fn prompt_glyphs_land_on_the_icon() {
    let master = artwork::render(&FullIcon, &BuiltinFontProvider);
    let white = master.image().pixels().filter(|p| p.0 == [255, 255, 255, 255]).count();
    assert!(white > 1000, "only {} white pixels", white);
}

#[test]
fn overview_glow_is_translucent_blue() {
    let master = artwork::render(&Overview, &BuiltinFontProvider);
    // grid starts at 82; the outermost glow ring begins 12 px before the tile
    let glow = master.pixel(75, 120);
    assert!(glow.b > glow.r, "{:?}", glow);
    let tile = master.pixel(120, 90);
    assert_eq!(tile, Color::rgb(74, 158, 255));
}

#[test]
fn generate_writes_the_plan_and_honors_size_override() {
    let dir = common::scratch_dir("generate");
    let root = OutputRoot::acquire(&dir).unwrap();
    let options = GenerateOptions { sizes: Some(IconSizeSet::new(vec![64, 16])), iconset: false };

    let report = artwork::generate(&Overview, &BuiltinFontProvider, &root, &options).unwrap();

    let mut names: Vec<String> =
        report.files.iter().map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned()).collect();
    names.sort();
    assert_eq!(names, vec!["icon.png", "overview_icon.png", "overview_icon_16.png", "overview_icon_64.png"]);
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn generate_rejects_sizes_bigger_than_the_master() {
    let dir = common::scratch_dir("generate-big");
    let root = OutputRoot::acquire(&dir).unwrap();
    let options = GenerateOptions { sizes: Some(IconSizeSet::new(vec![2048])), iconset: false };
    assert!(artwork::generate(&FullIcon, &BuiltinFontProvider, &root, &options).is_err());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn full_preset_with_iconset_writes_both_layouts() {
    let dir = common::scratch_dir("generate-iconset");
    let root = OutputRoot::acquire(&dir).unwrap();
    let options = GenerateOptions { sizes: None, iconset: true };

    let report = artwork::generate(&FullIcon, &BuiltinFontProvider, &root, &options).unwrap();

    // master + six sizes + alias + ten iconset entries
    assert_eq!(report.files.len(), 18);
    assert!(dir.join("icon_1024.png").is_file());
    assert!(dir.join("full.iconset").join("icon_512x512@2x.png").is_file());
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn descriptions_are_filled_in() {
    for art in artwork::all() {
        assert!(!art.description().is_empty(), "{}", art.name());
        let _: &dyn Artwork = art.as_ref();
    }
}
