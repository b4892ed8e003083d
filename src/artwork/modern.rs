use super::Artwork;
use super::palette::*;
use crate::export::{ExportPlan, IconSizeSet};
use crate::models::{Anchor, Bounds, Color, Point, Shape, TextStyle};

/// Orange rounded square with a large white `>_`.
pub struct ModernIcon;

impl Artwork for ModernIcon {
    fn name(&self) -> &'static str {
        "modern"
    }

    fn description(&self) -> &'static str {
        "orange rounded square with a large white >_"
    }

    fn master_size(&self) -> u32 {
        512
    }

    fn shapes(&self) -> Vec<Shape> {
        let mut shapes = vec![
            Shape::RoundedRect { bounds: Bounds::new(0, 0, 512, 512), radius: 90, color: CLAUDE_ORANGE },
            Shape::Text {
                origin: Point::new(136.0, 236.0),
                text: ">".into(),
                style: TextStyle::new(220.0, WHITE).anchor(Anchor::MIDDLE_MIDDLE),
            },
            Shape::Text {
                origin: Point::new(298.0, 276.0),
                text: "_".into(),
                style: TextStyle::new(220.0, WHITE).anchor(Anchor::MIDDLE_MIDDLE).embolden(4.0),
            },
        ];
        // faint shadow along the top edge
        for i in 0..3 {
            let y = i as f32;
            shapes.push(Shape::Line {
                from: Point::new(90.0, y),
                to: Point::new(422.0, y),
                width: 1.0,
                color: Color::rgba(200, 100, 50, (30 - i * 10) as u8),
            });
        }
        shapes
    }

    fn export_plan(&self) -> ExportPlan {
        ExportPlan::new("icon").sizes(IconSizeSet::standard()).alias("icon", 512)
    }
}
