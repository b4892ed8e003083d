#![allow(dead_code)]

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;

use iconsmith::canvas::Mask;
use iconsmith::fonts::{FontHandle, FontProvider, OutlineFont};
use iconsmith::models::Bounds;

/// Fresh, empty directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("iconsmith-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

/// Provider that never touches the filesystem and counts lookups.
#[derive(Default)]
pub struct FakeFonts {
    pub calls: Cell<u32>,
}

impl FontProvider for FakeFonts {
    fn resolve(&self) -> FontHandle {
        self.calls.set(self.calls.get() + 1);
        FontHandle::Builtin
    }
}

/// DejaVu Sans Mono, checked in so outline rendering does not depend on the host.
pub fn fixture_font_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSansMono.ttf")
}

pub fn fixture_font() -> FontHandle {
    let data = fs::read(fixture_font_path()).unwrap();
    FontHandle::Outline(OutlineFont::from_bytes(data, fixture_font_path()).unwrap())
}

/// Smallest box holding every covered pixel.
pub fn covered_bounds(mask: &Mask) -> Bounds {
    mask.covered().fold(Bounds::new(i32::MAX, i32::MAX, i32::MIN, i32::MIN), |b, (x, y, _)| {
        b.union(&Bounds::new(x, y, x, y))
    })
}
