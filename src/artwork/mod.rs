mod dashboard;
mod final_icon;
mod full;
mod modern;
mod overview;
mod terminal;

pub use dashboard::Dashboard;
pub use final_icon::FinalIcon;
pub use full::FullIcon;
pub use modern::ModernIcon;
pub use overview::Overview;
pub use terminal::TerminalIcon;

use crate::canvas::Canvas;
use crate::error::{IconError, Result};
use crate::export::{self, ExportPlan, ExportReport, IconSizeSet, OutputRoot};
use crate::fonts::FontProvider;
use crate::models::{Color, Shape};
use crate::shapes;

pub mod palette {
    use crate::models::Color;

    pub const CLAUDE_ORANGE: Color = Color::rgb(235, 140, 85);
    pub const WHITE: Color = Color::WHITE;
    pub const LIGHT_GRAY: Color = Color::rgb(224, 224, 224);
    pub const DARK_BG: Color = Color::rgb(26, 26, 26);
    pub const TERMINAL_BG: Color = Color::rgb(42, 42, 42);
    pub const HEADER_BG: Color = Color::rgb(51, 51, 51);
    pub const ACCENT_BLUE: Color = Color::rgb(74, 158, 255);
    pub const DOT_GRAY: Color = Color::rgb(102, 102, 102);
    pub const TRAFFIC_RED: Color = Color::rgb(255, 95, 86);
    pub const TRAFFIC_YELLOW: Color = Color::rgb(255, 189, 46);
    pub const TRAFFIC_GREEN: Color = Color::rgb(39, 201, 63);
}

/// One icon design: what to draw on the master and which files to export.
pub trait Artwork {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn master_size(&self) -> u32;
    fn background(&self) -> Color {
        Color::TRANSPARENT
    }
    fn shapes(&self) -> Vec<Shape>;
    fn export_plan(&self) -> ExportPlan;
}

pub fn all() -> Vec<Box<dyn Artwork>> {
    vec![
        Box::new(Dashboard),
        Box::new(Overview),
        Box::new(TerminalIcon),
        Box::new(ModernIcon),
        Box::new(FullIcon),
        Box::new(FinalIcon),
    ]
}

pub fn by_name(name: &str) -> Result<Box<dyn Artwork>> {
    all().into_iter().find(|a| a.name() == name).ok_or_else(|| IconError::UnknownArtwork {
        name: name.to_string(),
        available: names().join(", "),
    })
}

pub fn names() -> Vec<&'static str> {
    all().iter().map(|a| a.name()).collect()
}

/// Draws the master canvas once, at the artwork's master size.
pub fn render(art: &dyn Artwork, fonts: &dyn FontProvider) -> Canvas {
    let font = fonts.resolve();
    let mut canvas = Canvas::with_background(art.master_size(), art.background());
    shapes::draw_shapes(&mut canvas, &art.shapes(), &font);
    canvas
}

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Replaces the artwork's own size cascade.
    pub sizes: Option<IconSizeSet>,
    /// Additionally write a macOS `.iconset` directory.
    pub iconset: bool,
}

/// Renders `art` and writes its files into `root`.
pub fn generate(
    art: &dyn Artwork,
    fonts: &dyn FontProvider,
    root: &OutputRoot,
    options: &GenerateOptions,
) -> Result<ExportReport> {
    let mut plan = art.export_plan();
    if let Some(sizes) = &options.sizes {
        plan.sizes = sizes.clone();
    }
    plan.validate(art.master_size())?;

    log::info!("Rendering '{}' at {} px", art.name(), art.master_size());
    let master = render(art, fonts);
    let mut report = export::export(&master, root, &plan)?;
    if options.iconset {
        report.extend(export::export_iconset(&master, root, art.name())?);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_names_are_unique_and_resolvable() {
        let names = names();
        assert_eq!(names.len(), 6);
        for name in &names {
            assert_eq!(by_name(name).unwrap().name(), *name);
            assert_eq!(names.iter().filter(|n| *n == name).count(), 1);
        }
    }

    #[test]
    fn unknown_name_lists_the_available_ones() {
        let err = by_name("nope").err().unwrap();
        let msg = err.to_string();
        assert!(msg.contains("nope"));
        assert!(msg.contains("final"));
    }

    #[test]
    fn every_plan_fits_its_master() {
        for art in all() {
            art.export_plan().validate(art.master_size()).unwrap();
        }
    }
}
