use super::Artwork;
use super::palette::*;
use crate::export::{ExportPlan, IconSizeSet};
use crate::models::{Anchor, Bounds, Point, Shape, TextStyle};

const SIZE: i32 = 512;
const TERM_W: i32 = 380;
const TERM_H: i32 = 260;
const HEADER_H: i32 = 40;

/// Terminal window showing `>_`, with a row of project dots underneath.
pub struct TerminalIcon;

impl Artwork for TerminalIcon {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn description(&self) -> &'static str {
        "terminal window with a >_ prompt and project dots"
    }

    fn master_size(&self) -> u32 {
        SIZE as u32
    }

    fn shapes(&self) -> Vec<Shape> {
        let tx = (SIZE - TERM_W) / 2;
        let ty = (SIZE - TERM_H) / 2 - 20;

        let mut shapes = vec![
            Shape::RoundedRect { bounds: Bounds::new(32, 32, 480, 480), radius: 48, color: DARK_BG },
            Shape::RoundedRect { bounds: Bounds::new(tx, ty, tx + TERM_W, ty + TERM_H), radius: 16, color: TERMINAL_BG },
            Shape::Rect { bounds: Bounds::new(tx, ty, tx + TERM_W, ty + HEADER_H), color: HEADER_BG },
            Shape::PieSlice { bounds: Bounds::new(tx, ty, tx + 32, ty + 32), start: 180.0, end: 270.0, color: HEADER_BG },
            Shape::PieSlice {
                bounds: Bounds::new(tx + TERM_W - 32, ty, tx + TERM_W, ty + 32),
                start: 270.0,
                end: 360.0,
                color: HEADER_BG,
            },
        ];

        let dot_y = ty + 20;
        for (i, color) in [TRAFFIC_RED, TRAFFIC_YELLOW, TRAFFIC_GREEN].into_iter().enumerate() {
            shapes.push(Shape::Ellipse { bounds: Bounds::around(tx + 20 + i as i32 * 20, dot_y, 6), color });
        }

        let prompt_x = (tx + 60) as f32;
        let prompt_y = (ty + TERM_H / 2) as f32;
        shapes.push(Shape::Text {
            origin: Point::new(prompt_x, prompt_y),
            text: ">".into(),
            style: TextStyle::new(80.0, LIGHT_GRAY).anchor(Anchor::LEFT_MIDDLE),
        });
        shapes.push(Shape::Text {
            origin: Point::new(prompt_x + 71.0, prompt_y + 5.0),
            text: "_".into(),
            style: TextStyle::new(80.0, CLAUDE_ORANGE).anchor(Anchor::LEFT_MIDDLE).embolden(2.0),
        });

        let grid_y = ty + TERM_H + 40;
        let spacing = 24;
        let grid_start = (SIZE - 5 * spacing) / 2;
        for i in 0..6 {
            let color = if i == 0 { CLAUDE_ORANGE } else { DOT_GRAY.with_alpha(180) };
            shapes.push(Shape::Ellipse { bounds: Bounds::around(grid_start + i * spacing, grid_y, 4), color });
        }
        shapes
    }

    fn export_plan(&self) -> ExportPlan {
        ExportPlan::new("icon").sizes(IconSizeSet::standard()).alias("icon", 512)
    }
}
