//! Checkerboard background tiling and the centered content panel.

use crate::core::geometry::{Border, Rect};
use crate::core::page::DivBox;
use crate::core::style::{glyph, Style};
use crate::error::LayoutError;
use crate::layout::viewport::Viewport;

/// Horizontal divisor for the cell width.
pub const CELL_COLUMNS: u32 = 7;
/// Vertical divisor for the cell height.
pub const CELL_ROWS: u32 = 6;

const EVEN_TONE: &str = "darkslategrey";
const ODD_TONE: &str = "springgreen";

/// Cell size `floor(W/7) x floor(H/6)`.
pub fn grid_cell_size(viewport: Viewport) -> Result<(u32, u32), LayoutError> {
    viewport.require("checkerboard grid", CELL_COLUMNS, CELL_ROWS)?;
    Ok((
        viewport.width() / CELL_COLUMNS,
        viewport.height() / CELL_ROWS,
    ))
}

fn checker_tone(row: u32, col: u32) -> &'static str {
    if (row + col) % 2 == 0 {
        EVEN_TONE
    } else {
        ODD_TONE
    }
}

/// Tile the viewport with alternating cells, rows first.
///
/// Cells in the last row/column are clipped to the viewport edge, so the
/// tiling covers the viewport exactly and never overlaps itself. Cells are
/// named `cell-{row}-{col}`.
pub fn checkerboard_grid(viewport: Viewport) -> Result<Vec<DivBox>, LayoutError> {
    let (cell_width, cell_height) = grid_cell_size(viewport)?;
    let mut cells = Vec::new();

    for (row, y) in (0..viewport.height()).step_by(cell_height as usize).enumerate() {
        let height = cell_height.min(viewport.height() - y);
        for (col, x) in (0..viewport.width()).step_by(cell_width as usize).enumerate() {
            let width = cell_width.min(viewport.width() - x);
            let (row, col) = (row as u32, col as u32);
            cells.push(
                DivBox::new(
                    format!("cell-{row}-{col}"),
                    Rect::new(x, y, width, height),
                    Style::pair("grey", checker_tone(row, col)),
                )
                .with_fill_glyph(glyph("")),
            );
        }
    }

    Ok(cells)
}

/// Bordered panel centered in the viewport, three quarters wide and four
/// fifths tall (floor division throughout).
pub fn centered_panel(name: &str, viewport: Viewport) -> DivBox {
    let (width, height) = (viewport.width(), viewport.height());
    let panel_width = width - width / 4;
    let panel_height = height - height / 5;
    let rect = Rect::new(
        width / 2 - panel_width / 2,
        height / 2 - panel_height / 2,
        panel_width,
        panel_height,
    );

    DivBox::new(name, rect, Style::pair("grey", "black"))
        .with_border(Border::new(
            1,
            glyph("^"),
            Style::pair("darkolivegreen", "lightgreen"),
        ))
        .with_fill_glyph(glyph(""))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{centered_panel, checkerboard_grid};
    use crate::core::geometry::Rect;
    use crate::error::LayoutError;
    use crate::layout::viewport::Viewport;

    fn viewport(width: u32, height: u32) -> Viewport {
        Viewport::new(width, height).expect("viewport")
    }

    #[test]
    fn grid_tiles_viewport_without_gaps_or_overlap() {
        for (width, height) in [(7, 6), (80, 24), (81, 25), (120, 40), (13, 11), (200, 61)] {
            let viewport = viewport(width, height);
            let cells = checkerboard_grid(viewport).expect("grid");
            let bounds = viewport.rect();

            let covered: u64 = cells.iter().map(|cell| cell.rect.area()).sum();
            assert_eq!(covered, bounds.area(), "{width}x{height} coverage");

            for (index, cell) in cells.iter().enumerate() {
                assert!(!cell.rect.is_empty());
                assert!(bounds.contains_rect(&cell.rect), "{width}x{height} cell {index}");
                for other in &cells[index + 1..] {
                    assert!(!cell.rect.intersects(&other.rect));
                }
            }
        }
    }

    #[test]
    fn grid_row_and_column_counts_follow_cell_size() {
        // 80 / 11 leaves a remainder: floor(80/11)+1 = 8 columns.
        // 24 / 4 divides evenly: 6 rows, no zero-height seventh row.
        let cells = checkerboard_grid(viewport(80, 24)).expect("grid");
        let rows = cells.iter().map(|cell| cell.rect.y).collect::<HashSet<_>>();
        let cols = cells.iter().map(|cell| cell.rect.x).collect::<HashSet<_>>();
        assert_eq!(cols.len(), 8);
        assert_eq!(rows.len(), 6);
        assert_eq!(cells.len(), 48);

        let cells = checkerboard_grid(viewport(81, 25)).expect("grid");
        let rows = cells.iter().map(|cell| cell.rect.y).collect::<HashSet<_>>();
        assert_eq!(rows.len(), (25 / (25 / 6) + 1) as usize);
    }

    #[test]
    fn grid_names_are_unique_and_checkered() {
        let cells = checkerboard_grid(viewport(70, 30)).expect("grid");
        let names = cells.iter().map(|cell| cell.name.as_str()).collect::<HashSet<_>>();
        assert_eq!(names.len(), cells.len());

        assert_eq!(cells[0].name, "cell-0-0");
        assert_eq!(cells[0].fill_style.bg.as_str(), "darkslategrey");
        assert_eq!(cells[1].name, "cell-0-1");
        assert_eq!(cells[1].fill_style.bg.as_str(), "springgreen");
        let second_row = cells
            .iter()
            .find(|cell| cell.name == "cell-1-0")
            .expect("second row");
        assert_eq!(second_row.fill_style.bg.as_str(), "springgreen");
    }

    #[test]
    fn grid_rejects_viewport_below_one_cell() {
        let error = checkerboard_grid(viewport(6, 40)).expect_err("too narrow");
        assert!(matches!(
            error,
            LayoutError::ViewportTooSmall {
                min_width: 7,
                min_height: 6,
                ..
            }
        ));
        assert!(checkerboard_grid(viewport(40, 5)).is_err());
    }

    #[test]
    fn centered_panel_matches_floor_arithmetic() {
        let panel = centered_panel("content", viewport(80, 24));
        // 80 - 20 = 60 wide, 24 - 4 = 20 tall, origin (40-30, 12-10).
        assert_eq!(panel.rect, Rect::new(10, 2, 60, 20));
        assert!(panel.border.is_some());
    }

    #[test]
    fn centered_panel_stays_inside_any_viewport() {
        for width in 1..=64 {
            for height in 1..=40 {
                let viewport = viewport(width, height);
                let panel = centered_panel("content", viewport);
                assert!(!panel.rect.is_empty(), "{width}x{height}");
                assert!(
                    viewport.rect().contains_rect(&panel.rect),
                    "{width}x{height} -> {:?}",
                    panel.rect
                );
            }
        }
    }
}
