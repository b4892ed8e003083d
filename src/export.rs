use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::RgbaImage;
use image::imageops::{self, FilterType};
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::{IconError, Result};

/// Ordered edge lengths of the exported variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSizeSet(Vec<u32>);

impl IconSizeSet {
    pub fn new(sizes: Vec<u32>) -> Self {
        Self(sizes)
    }

    /// 256 down to 16, for 512 px masters.
    pub fn standard() -> Self {
        Self(vec![256, 128, 64, 32, 16])
    }

    /// 512 down to 16, for 1024 px masters.
    pub fn extended() -> Self {
        Self(vec![512, 256, 128, 64, 32, 16])
    }

    pub fn sizes(&self) -> &[u32] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self, master: u32) -> Result<()> {
        self.0.iter().try_for_each(|&size| check_size(size, master))
    }
}

impl FromStr for IconSizeSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| p.parse::<u32>().map_err(|e| format!("bad size '{}': {}", p, e)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for IconSizeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u32::to_string).collect();
        write!(f, "{}", parts.join(","))
    }
}

fn check_size(size: u32, master: u32) -> Result<()> {
    if size == 0 {
        return Err(IconError::InvalidSize);
    }
    if size > master {
        return Err(IconError::SizeExceedsMaster { size, master });
    }
    Ok(())
}

/// Output directory that is known to exist. Created once on acquisition.
#[derive(Debug, Clone)]
pub struct OutputRoot {
    dir: PathBuf,
}

impl OutputRoot {
    pub fn acquire(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| IconError::io(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    pub fn subroot(&self, name: &str) -> Result<OutputRoot> {
        OutputRoot::acquire(self.dir.join(name))
    }
}

/// An un-suffixed file (`<stem>.png`) holding the variant of one size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub stem: String,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    pub base_name: String,
    pub sizes: IconSizeSet,
    /// Also write the master itself as `<base>_<master>.png`.
    pub write_master: bool,
    pub aliases: Vec<Alias>,
}

impl ExportPlan {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            sizes: IconSizeSet::new(Vec::new()),
            write_master: false,
            aliases: Vec::new(),
        }
    }

    pub fn sizes(mut self, sizes: IconSizeSet) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_master(mut self) -> Self {
        self.write_master = true;
        self
    }

    pub fn alias(mut self, stem: impl Into<String>, size: u32) -> Self {
        self.aliases.push(Alias { stem: stem.into(), size });
        self
    }

    pub fn file_name(&self, size: u32) -> String {
        format!("{}_{}.png", self.base_name, size)
    }

    pub fn validate(&self, master: u32) -> Result<()> {
        self.sizes.validate(master)?;
        self.aliases.iter().try_for_each(|a| check_size(a.size, master))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    pub files: Vec<ExportedFile>,
}

impl ExportReport {
    pub fn extend(&mut self, other: ExportReport) {
        self.files.extend(other.files);
    }
}

/// Lanczos3 downscale; the master size yields an identical copy.
pub fn resample(master: &RgbaImage, size: u32) -> RgbaImage {
    if size == master.width() && size == master.height() {
        master.clone()
    } else {
        imageops::resize(master, size, size, FilterType::Lanczos3)
    }
}

fn square_master(master: &Canvas) -> Result<u32> {
    if !master.is_square() {
        return Err(IconError::NotSquare { width: master.width(), height: master.height() });
    }
    Ok(master.width())
}

fn save(image: &RgbaImage, path: PathBuf, size: u32, report: &mut ExportReport) -> Result<()> {
    image.save(&path).map_err(|source| IconError::Image { path: path.clone(), source })?;
    log::info!("Created: {}", path.display());
    report.files.push(ExportedFile { path, size });
    Ok(())
}

/// Writes every file of `plan` derived from `master`. All sizes are checked
/// before the first write.
pub fn export(master: &Canvas, root: &OutputRoot, plan: &ExportPlan) -> Result<ExportReport> {
    let master_size = square_master(master)?;
    plan.validate(master_size)?;

    let mut variants: BTreeMap<u32, RgbaImage> = BTreeMap::new();
    let mut variant = |size: u32| -> RgbaImage {
        variants.entry(size).or_insert_with(|| resample(master.image(), size)).clone()
    };

    let mut report = ExportReport::default();
    if plan.write_master {
        save(master.image(), root.path_for(&plan.file_name(master_size)), master_size, &mut report)?;
    }
    for &size in plan.sizes.sizes() {
        save(&variant(size), root.path_for(&plan.file_name(size)), size, &mut report)?;
    }
    for alias in &plan.aliases {
        let path = root.path_for(&format!("{}.png", alias.stem));
        save(&variant(alias.size), path, alias.size, &mut report)?;
    }
    Ok(report)
}

/// Entries of a macOS `.iconset` directory: pixel size and file name.
pub const ICONSET_ENTRIES: [(u32, &str); 10] = [
    (16, "icon_16x16.png"),
    (32, "icon_16x16@2x.png"),
    (32, "icon_32x32.png"),
    (64, "icon_32x32@2x.png"),
    (128, "icon_128x128.png"),
    (256, "icon_128x128@2x.png"),
    (256, "icon_256x256.png"),
    (512, "icon_256x256@2x.png"),
    (512, "icon_512x512.png"),
    (1024, "icon_512x512@2x.png"),
];

/// Writes `<root>/<name>.iconset/`. Entries larger than the master are skipped.
pub fn export_iconset(master: &Canvas, root: &OutputRoot, name: &str) -> Result<ExportReport> {
    let master_size = square_master(master)?;
    let set = root.subroot(&format!("{}.iconset", name))?;

    let mut report = ExportReport::default();
    for (size, file_name) in ICONSET_ENTRIES {
        if size > master_size {
            log::warn!("skipping {}: needs a {} px master, have {}", file_name, size, master_size);
            continue;
        }
        save(&resample(master.image(), size), set.path_for(file_name), size, &mut report)?;
    }
    log::info!("Iconset written to {}", set.dir().display());
    Ok(report)
}
