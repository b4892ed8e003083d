use super::Artwork;
use super::palette::*;
use crate::export::{ExportPlan, IconSizeSet};
use crate::models::{Anchor, Bounds, Color, Point, Shape, TextStyle};

/// Terminal window with a `claude >` prompt over a "Dashboard" title, on an
/// opaque dark square.
pub struct Dashboard;

impl Artwork for Dashboard {
    fn name(&self) -> &'static str {
        "dashboard"
    }

    fn description(&self) -> &'static str {
        "terminal window mockup with a Dashboard title on dark background"
    }

    fn master_size(&self) -> u32 {
        512
    }

    fn background(&self) -> Color {
        DARK_BG
    }

    fn shapes(&self) -> Vec<Shape> {
        let mut shapes = vec![
            Shape::RoundedRect { bounds: Bounds::new(80, 140, 432, 372), radius: 8, color: TERMINAL_BG },
            Shape::Rect { bounds: Bounds::new(80, 140, 432, 172), color: HEADER_BG },
            Shape::Ellipse { bounds: Bounds::new(98, 150, 110, 162), color: TRAFFIC_RED },
            Shape::Ellipse { bounds: Bounds::new(118, 150, 130, 162), color: TRAFFIC_YELLOW },
            Shape::Ellipse { bounds: Bounds::new(138, 150, 150, 162), color: TRAFFIC_GREEN },
            Shape::Text {
                origin: Point::new(100.0, 200.0),
                text: "claude".into(),
                style: TextStyle::new(28.0, ACCENT_BLUE),
            },
            Shape::Text {
                origin: Point::new(180.0, 200.0),
                text: ">".into(),
                style: TextStyle::new(28.0, LIGHT_GRAY),
            },
            // cursor block
            Shape::Rect { bounds: Bounds::new(200, 195, 216, 215), color: ACCENT_BLUE.with_alpha(200) },
        ];

        for i in 0..3 {
            for j in 0..3 {
                let color = if i == 0 && j == 0 { ACCENT_BLUE } else { DOT_GRAY };
                shapes.push(Shape::Ellipse { bounds: Bounds::around(120 + i * 20, 280 + j * 20, 4), color });
            }
        }

        shapes.push(Shape::Text {
            origin: Point::new(256.0, 280.0),
            text: "Dashboard".into(),
            style: TextStyle::new(42.0, LIGHT_GRAY).anchor(Anchor::MIDDLE_MIDDLE),
        });
        shapes
    }

    fn export_plan(&self) -> ExportPlan {
        ExportPlan::new("icon").sizes(IconSizeSet::standard()).alias("icon", 512)
    }
}
