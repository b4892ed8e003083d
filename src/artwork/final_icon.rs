use super::Artwork;
use super::palette::*;
use crate::export::{ExportPlan, IconSizeSet};
use crate::models::{Anchor, Bounds, Point, Shape, TextStyle};

const SIZE: i32 = 1024;

/// Orange squircle-ish square (22.5% corner radius) with a heavy `>_` and a
/// faint highlight along the top border.
pub struct FinalIcon;

impl FinalIcon {
    pub fn corner_radius() -> i32 {
        SIZE * 225 / 1000
    }

    /// The cursor is stretched 14 px wider and 6 px taller than the glyph.
    fn cursor_offsets() -> Vec<(i32, i32)> {
        (-3..=3).flat_map(|dy| (-3..=11).map(move |dx| (dx, dy))).collect()
    }
}

impl Artwork for FinalIcon {
    fn name(&self) -> &'static str {
        "final"
    }

    fn description(&self) -> &'static str {
        "orange rounded square with macOS corner radius, bold >_ and top highlight"
    }

    fn master_size(&self) -> u32 {
        SIZE as u32
    }

    fn shapes(&self) -> Vec<Shape> {
        let center = (SIZE / 2) as f32;
        let mut shapes = vec![
            Shape::RoundedRect { bounds: Bounds::new(0, 0, SIZE, SIZE), radius: Self::corner_radius(), color: CLAUDE_ORANGE },
            Shape::Text {
                origin: Point::new(center - 250.0, center - 50.0),
                text: ">".into(),
                style: TextStyle::new(600.0, WHITE).anchor(Anchor::MIDDLE_MIDDLE),
            },
            Shape::OverdrawnText {
                origin: Point::new(center + 120.0, center + 80.0),
                text: "_".into(),
                style: TextStyle::new(500.0, WHITE).anchor(Anchor::MIDDLE_MIDDLE),
                offsets: Self::cursor_offsets(),
            },
        ];
        for i in 0..3 {
            shapes.push(Shape::Arc {
                bounds: Bounds::new(i, i, SIZE - i, SIZE - i),
                start: 225.0,
                end: 315.0,
                width: 2.0,
                color: WHITE.with_alpha((40 - i * 13) as u8),
            });
        }
        shapes
    }

    fn export_plan(&self) -> ExportPlan {
        ExportPlan::new("icon").sizes(IconSizeSet::extended()).with_master().alias("icon", 512)
    }
}
