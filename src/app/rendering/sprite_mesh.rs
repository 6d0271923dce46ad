use ggez::graphics::{Color, DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;

use crate::app::palette::{Palette, Sprite, SpriteKind};
use crate::basic::{CellDim, GridPoint};
use crate::error::{AppError, AppErrorConversion, AppResult};

/// One solid square of a sprite, in window pixels
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Block {
    pub rect: Rect,
    pub color: Color,
}

/// The `SUBDIVISIONS x SUBDIVISIONS` blocks of a sprite drawn in `cell`,
/// anchored at the cell's top-left corner
pub fn sprite_blocks(cell: GridPoint, sprite: &Sprite, cell_dim: CellDim) -> impl Iterator<Item = Block> + '_ {
    let origin = cell.to_point(cell_dim);
    sprite.iter().enumerate().flat_map(move |(r, row)| {
        row.iter().enumerate().map(move |(c, &color)| Block {
            rect: Rect::new(
                origin.x + c as f32 * cell_dim.block,
                origin.y + r as f32 * cell_dim.block,
                cell_dim.block,
                cell_dim.block,
            ),
            color,
        })
    })
}

fn add_block(builder: &mut MeshBuilder, block: Block, palette: &Palette) -> AppResult {
    builder
        .rectangle(DrawMode::fill(), block.rect, block.color)
        .map_err(AppError::from)?;

    let border = Rect::new(
        block.rect.x,
        block.rect.y,
        block.rect.w - palette.block_border_thickness,
        block.rect.h - palette.block_border_thickness,
    );
    builder
        .rectangle(
            DrawMode::stroke(palette.block_border_thickness),
            border,
            palette.block_border_color,
        )
        .map_err(AppError::from)?;

    Ok(())
}

/// Food first, then the snake from tail to head so the head ends up on top
pub fn sprite_mesh(
    food: Option<GridPoint>,
    segments: impl DoubleEndedIterator<Item = GridPoint> + ExactSizeIterator,
    cell_dim: CellDim,
    palette: &Palette,
    ctx: &Context,
) -> AppResult<Option<Mesh>> {
    let mut builder = MeshBuilder::new();
    let mut empty = true;

    let food = food.map(|pos| (pos, SpriteKind::Food));
    let snake = segments
        .enumerate()
        .rev()
        .map(|(idx, pos)| (pos, SpriteKind::for_segment(idx)));

    for (pos, kind) in food.into_iter().chain(snake) {
        for block in sprite_blocks(pos, palette.sprite(kind), cell_dim) {
            add_block(&mut builder, block, palette).with_trace_step("sprite_mesh")?;
            empty = false;
        }
    }

    // an empty mesh can't be uploaded
    if empty {
        return Ok(None);
    }
    Ok(Some(Mesh::from_data(ctx, builder.build())))
}
