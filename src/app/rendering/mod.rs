use ggez::graphics::{Canvas, DrawMode, DrawParam, Mesh, Rect};
use ggez::Context;
use rand::Rng;

use crate::app::message::Message;
use crate::app::palette::{Palette, CELL_SIDE};
use crate::basic::{CellDim, GridDim, Point};
use crate::error::{AppError, AppErrorConversion, AppResult};
use crate::game::{GameEngine, RunState, Score};

pub use grid_mesh::grid_mesh;
pub use sprite_mesh::sprite_mesh;

mod grid_mesh;
mod sprite_mesh;

pub struct Renderer {
    pub palette: Palette,
    pub cell_dim: CellDim,

    /// Only depends on the board size, built on first draw
    grid_mesh: Option<(GridDim, Mesh)>,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            cell_dim: CellDim::new(CELL_SIDE),
            grid_mesh: None,
        }
    }

    /// Window size needed to show the whole board
    pub fn board_size(&self, board_dim: GridDim) -> Point {
        board_dim.to_point(self.cell_dim)
    }

    fn refresh_grid(&mut self, board_dim: GridDim, ctx: &Context) -> AppResult {
        let stale = self.grid_mesh.as_ref().map_or(true, |(dim, _)| *dim != board_dim);
        if stale {
            let mesh = grid_mesh(board_dim, self.cell_dim, &self.palette, ctx)?;
            self.grid_mesh = Some((board_dim, mesh));
        }
        Ok(())
    }

    pub fn draw<R: Rng>(
        &mut self,
        ctx: &mut Context,
        canvas: &mut Canvas,
        engine: &GameEngine<R>,
    ) -> AppResult {
        let board_dim = engine.board_dim();
        let board_size = self.board_size(board_dim);

        self.refresh_grid(board_dim, ctx).with_trace_step("Renderer::draw")?;
        if let Some((_, grid)) = &self.grid_mesh {
            canvas.draw(grid, DrawParam::default());
        }

        let sprites = sprite_mesh(
            engine.food(),
            engine.snake().iter(),
            self.cell_dim,
            &self.palette,
            ctx,
        )
        .with_trace_step("Renderer::draw")?;
        if let Some(mesh) = sprites {
            canvas.draw(&mesh, DrawParam::default());
        }

        Message::top_left(
            format!("Score: {}", engine.score()),
            18.,
            self.palette.score_color,
        )
        .draw(canvas, board_size);

        if engine.run_state() == RunState::GameOver {
            self.draw_game_over(ctx, canvas, board_size, engine.score())
                .with_trace_step("Renderer::draw")?;
        }

        Ok(())
    }

    fn draw_game_over(
        &self,
        ctx: &Context,
        canvas: &mut Canvas,
        board_size: Point,
        score: Score,
    ) -> AppResult {
        let shade = Mesh::new_rectangle(
            ctx,
            DrawMode::fill(),
            Rect::new(0., 0., board_size.x, board_size.y),
            self.palette.game_over_shade,
        )
        .map_err(AppError::from)
        .with_trace_step("game over shade")?;
        canvas.draw(&shade, DrawParam::default());

        let color = self.palette.game_over_color;
        [
            Message::centered("GAME OVER".to_string(), -30., 54., color),
            Message::centered(format!("Score: {score}"), 20., 28., color),
            Message::centered("Press R to restart".to_string(), 55., 18., color),
        ]
        .iter()
        .for_each(|message| message.draw(canvas, board_size));

        Ok(())
    }
}
