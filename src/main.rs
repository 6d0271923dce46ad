#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

use ggez::{event, ContextBuilder};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::error::{AppError, AppErrorConversion, AppResult};
use crate::game::Prefs;

mod app;
mod basic;
mod error;
mod game;

fn main() -> AppResult {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = App::new(Prefs::default());

    let (ctx, event_loop) = ContextBuilder::new("pixel_snake", "gorilskij")
        .window_mode(app.wm())
        .window_setup(app.ws())
        .build()
        .map_err(AppError::from)
        .with_trace_step("main")?;

    event::run(ctx, event_loop, app)
}
