use super::Artwork;
use super::palette::*;
use crate::export::{ExportPlan, IconSizeSet};
use crate::models::{Anchor, Color, Point, Shape, TextStyle};

/// Edge-to-edge orange square with a white `>_`.
pub struct FullIcon;

impl Artwork for FullIcon {
    fn name(&self) -> &'static str {
        "full"
    }

    fn description(&self) -> &'static str {
        "full-bleed orange background with a white >_"
    }

    fn master_size(&self) -> u32 {
        1024
    }

    fn background(&self) -> Color {
        CLAUDE_ORANGE
    }

    fn shapes(&self) -> Vec<Shape> {
        vec![
            Shape::Text {
                origin: Point::new(312.0, 472.0),
                text: ">".into(),
                style: TextStyle::new(400.0, WHITE).anchor(Anchor::MIDDLE_MIDDLE),
            },
            Shape::Text {
                origin: Point::new(595.5, 552.0),
                text: "_".into(),
                style: TextStyle::new(400.0, WHITE).anchor(Anchor::MIDDLE_MIDDLE).embolden(7.0),
            },
        ]
    }

    fn export_plan(&self) -> ExportPlan {
        ExportPlan::new("icon").sizes(IconSizeSet::extended()).with_master().alias("icon", 512)
    }
}
