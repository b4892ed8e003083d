use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{IconError, Result};

/// Well-known monospace fonts, tried in order. Entries that do not exist or
/// cannot be parsed (e.g. legacy `.dfont` resource forks) are skipped.
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Monaco.dfont",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Courier.dfont",
    "/Library/Fonts/Courier New.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// Source of the font that icon text is drawn with.
pub trait FontProvider {
    fn resolve(&self) -> FontHandle;
}

#[derive(Debug, Clone)]
pub enum FontHandle {
    Outline(OutlineFont),
    /// The built-in bitmap font, always available.
    Builtin,
}

impl FontHandle {
    pub fn is_builtin(&self) -> bool {
        matches!(self, FontHandle::Builtin)
    }
}

/// Raw bytes of a TrueType/OpenType face that has been checked to parse.
#[derive(Clone)]
pub struct OutlineFont {
    data: Arc<[u8]>,
    index: u32,
    source: PathBuf,
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont")
            .field("source", &self.source)
            .field("index", &self.index)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl OutlineFont {
    /// Validates `data` as a font file. Collections use their first face.
    pub fn from_bytes(data: Vec<u8>, source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        if let Err(e) = ttf_parser::Face::parse(&data, 0) {
            return Err(IconError::Font { path: source, reason: e.to_string() });
        }
        Ok(Self { data: data.into(), index: 0, source })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| IconError::io(path, e))?;
        Self::from_bytes(data, path)
    }

    pub fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, self.index).ok()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Tries candidate font files in order and takes the first usable one, falling back
/// to the builtin bitmap font.
#[derive(Debug, Clone)]
pub struct SystemFontProvider {
    candidates: Vec<PathBuf>,
}

impl Default for SystemFontProvider {
    fn default() -> Self {
        Self::with_defaults(Vec::new())
    }
}

impl SystemFontProvider {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// `preferred` paths are tried before the well-known ones.
    pub fn with_defaults(preferred: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut candidates: Vec<PathBuf> = preferred.into_iter().collect();
        candidates.extend(DEFAULT_FONT_PATHS.iter().map(PathBuf::from));
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }
}

impl FontProvider for SystemFontProvider {
    fn resolve(&self) -> FontHandle {
        for path in &self.candidates {
            if !path.exists() {
                log::debug!("font {} not present", path.display());
                continue;
            }
            match OutlineFont::load(path) {
                Ok(font) => {
                    log::debug!("using font {}", path.display());
                    return FontHandle::Outline(font);
                }
                Err(e) => log::debug!("skipping font: {}", e),
            }
        }
        log::info!("no usable font file found, using the builtin bitmap font");
        FontHandle::Builtin
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFontProvider;

impl FontProvider for BuiltinFontProvider {
    fn resolve(&self) -> FontHandle {
        FontHandle::Builtin
    }
}
