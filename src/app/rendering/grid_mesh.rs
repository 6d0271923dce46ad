use ggez::graphics::{Mesh, MeshBuilder};
use ggez::Context;

use crate::app::palette::Palette;
use crate::basic::{CellDim, GridDim, Point};
use crate::error::{AppError, AppErrorConversion, AppResult};

/// Faint lines along every cell border, including the outer edges
pub fn grid_lines(board_dim: GridDim, cell_dim: CellDim) -> Vec<[Point; 2]> {
    let width = board_dim.col as f32 * cell_dim.side;
    let height = board_dim.row as f32 * cell_dim.side;

    let vertical = (0..=board_dim.col).map(|c| {
        let x = c as f32 * cell_dim.side;
        [Point { x, y: 0. }, Point { x, y: height }]
    });
    let horizontal = (0..=board_dim.row).map(|r| {
        let y = r as f32 * cell_dim.side;
        [Point { x: 0., y }, Point { x: width, y }]
    });

    vertical.chain(horizontal).collect()
}

pub fn grid_mesh(board_dim: GridDim, cell_dim: CellDim, palette: &Palette, ctx: &Context) -> AppResult<Mesh> {
    let mut builder = MeshBuilder::new();

    for line in grid_lines(board_dim, cell_dim) {
        builder
            .line(&line, palette.grid_thickness, palette.grid_color)
            .map_err(AppError::from)
            .with_trace_step("grid_mesh")?;
    }

    Ok(Mesh::from_data(ctx, builder.build()))
}

#[test]
fn test_grid_lines_cover_board() {
    let lines = grid_lines(GridDim { col: 25, row: 18 }, CellDim::new(32));
    assert_eq!(lines.len(), 26 + 19);

    let last_vertical = lines[25];
    assert_eq!(last_vertical[0], Point { x: 800., y: 0. });
    assert_eq!(last_vertical[1], Point { x: 800., y: 576. });

    let last_horizontal = lines[lines.len() - 1];
    assert_eq!(last_horizontal[1], Point { x: 800., y: 576. });
}
