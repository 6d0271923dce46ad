use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::EventHandler;
use ggez::graphics::Canvas;
use ggez::input::keyboard::KeyInput;
use ggez::Context;
use tracing::{info, trace};

use crate::app::control::Control;
use crate::app::keyboard_control::{Command, KeyMap};
use crate::app::palette::Palette;
use crate::app::rendering::Renderer;
use crate::error::{AppError, AppErrorConversion, AppResult};
use crate::game::{GameEngine, Prefs, RunState};

mod control;
mod keyboard_control;
mod message;
mod palette;
mod rendering;

pub struct App {
    engine: GameEngine,
    control: Control,
    key_map: KeyMap,
    renderer: Renderer,
}

impl App {
    pub fn new(prefs: Prefs) -> Self {
        Self {
            engine: GameEngine::new(prefs),
            control: Control::new(),
            key_map: KeyMap::default(),
            renderer: Renderer::new(Palette::pixel()),
        }
    }

    /// Sized to fit the board exactly
    pub fn wm(&self) -> WindowMode {
        let size = self.renderer.board_size(self.engine.board_dim());
        WindowMode::default()
            .dimensions(size.x, size.y)
            .resizable(false)
    }

    pub fn ws(&self) -> WindowSetup {
        WindowSetup::default().title("Snake - Color Pixels").vsync(true)
    }

    fn handle(&mut self, ctx: &mut Context, command: Command) {
        match command {
            Command::Turn(dir) => self.engine.set_direction(dir),
            Command::Restart => {
                if self.engine.restart() {
                    self.control.play();
                }
            }
            Command::Quit => {
                info!("quit requested");
                ctx.request_quit();
            }
        }
    }
}

impl EventHandler<AppError> for App {
    fn update(&mut self, ctx: &mut Context) -> AppResult {
        self.control.graphics_frame(ctx.time.delta());

        while self.control.can_update(self.engine.tick_interval()) {
            let outcome = self.engine.tick();
            trace!(?outcome, ticks = self.control.ticks(), "tick");

            let playing = self.control.state() == control::State::Playing;
            if playing && self.engine.run_state() == RunState::GameOver {
                info!(reason = ?self.engine.end_reason(), "waiting for restart");
                self.control.game_over();
            }
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        let mut canvas = Canvas::from_frame(ctx, self.renderer.palette.background_color);
        self.renderer
            .draw(ctx, &mut canvas, &self.engine)
            .with_trace_step("App::draw")?;
        canvas
            .finish(ctx)
            .map_err(AppError::from)
            .with_trace_step("App::draw")
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> AppResult {
        if let Some(command) = input.keycode.and_then(|key| self.key_map.command(key)) {
            self.handle(ctx, command);
        }
        Ok(())
    }
}
