use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum AppErrorType {
    GameError(GameError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct AppError(AppErrorType, Vec<String>);

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        Self(AppErrorType::GameError(e), vec![])
    }
}

impl AppError {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    #[cfg(test)]
    pub fn error_type(&self) -> &AppErrorType {
        &self.0
    }

    /// Innermost step first
    #[cfg(test)]
    pub fn trace(&self) -> impl Iterator<Item = &str> {
        self.1.iter().map(String::as_str)
    }
}

impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T = ()> = result::Result<T, AppError>;

pub trait AppErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> AppErrorConversion for AppResult<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_is_printed_outermost_first() {
    let res: AppResult = Err(AppError::from(GameError::RenderError("boom".to_string())));
    let err = res
        .with_trace_step("grid_mesh")
        .with_trace_step("draw")
        .unwrap_err();

    assert_eq!(err.trace().collect::<Vec<_>>(), ["grid_mesh", "draw"]);
    assert!(matches!(err.error_type(), AppErrorType::GameError(_)));

    let printed = format!("{err:?}");
    let draw = printed.find(" in draw").unwrap();
    let grid_mesh = printed.find(" in grid_mesh").unwrap();
    assert!(draw < grid_mesh);
}
