use super::Artwork;
use super::palette::*;
use crate::export::{ExportPlan, IconSizeSet};
use crate::models::{Bounds, Color, Shape};

const GRID: i32 = 3;
const SQUARE: i32 = 100;
const SPACING: i32 = 24;

/// 3x3 grid of project tiles with the top-left one glowing blue.
pub struct Overview;

impl Overview {
    fn grid_start() -> i32 {
        (512 - (GRID * SQUARE + (GRID - 1) * SPACING)) / 2
    }

    fn active_tile(x: i32, y: i32, shapes: &mut Vec<Shape>) {
        // three glow layers, widest and faintest first
        for glow in 0..3 {
            let glow_size = SQUARE + (3 - glow) * 8;
            let gx = x - (glow_size - SQUARE) / 2;
            let gy = y - (glow_size - SQUARE) / 2;
            shapes.push(Shape::RoundedRect {
                bounds: Bounds::square(gx, gy, glow_size),
                radius: 12,
                color: ACCENT_BLUE.with_alpha((60 - glow * 20) as u8),
            });
        }
        shapes.push(Shape::RoundedRect { bounds: Bounds::square(x, y, SQUARE), radius: 8, color: ACCENT_BLUE });
        shapes.push(Shape::RoundedRect {
            bounds: Bounds::square(x, y, SQUARE).inset(12),
            radius: 4,
            color: Color::rgba(107, 183, 255, 180),
        });
    }

    fn idle_tile(x: i32, y: i32, shapes: &mut Vec<Shape>) {
        shapes.push(Shape::RoundedRect { bounds: Bounds::square(x, y, SQUARE), radius: 8, color: TERMINAL_BG });
        shapes.push(Shape::RoundedRect { bounds: Bounds::square(x, y, SQUARE).inset(2), radius: 6, color: HEADER_BG });
    }
}

impl Artwork for Overview {
    fn name(&self) -> &'static str {
        "overview"
    }

    fn description(&self) -> &'static str {
        "project grid with the active tile highlighted"
    }

    fn master_size(&self) -> u32 {
        512
    }

    fn shapes(&self) -> Vec<Shape> {
        let mut shapes = vec![Shape::RoundedRect { bounds: Bounds::new(32, 32, 480, 480), radius: 48, color: DARK_BG }];

        let start = Self::grid_start();
        for row in 0..GRID {
            for col in 0..GRID {
                let x = start + col * (SQUARE + SPACING);
                let y = start + row * (SQUARE + SPACING);
                if row == 0 && col == 0 {
                    Self::active_tile(x, y, &mut shapes);
                } else {
                    Self::idle_tile(x, y, &mut shapes);
                }
            }
        }

        // terminal / preview / ... indicators inside the active tile
        let dot_y = start + SQUARE - 20;
        for i in 0..3 {
            let alpha = if i == 1 { 200 } else { 120 };
            shapes.push(Shape::Ellipse {
                bounds: Bounds::around(start + 25 + i * 25, dot_y, 4),
                color: WHITE.with_alpha(alpha),
            });
        }
        shapes
    }

    fn export_plan(&self) -> ExportPlan {
        ExportPlan::new("overview_icon")
            .sizes(IconSizeSet::standard())
            .alias("overview_icon", 512)
            .alias("icon", 512)
    }
}
