//! Process-level error.
//!
//! Library modules return their own typed errors; `app` converts them into an
//! `AppError` carrying the exit code the binary terminates with:
//!
//! - `2`: bad configuration or bad input
//! - `3`: the predictor could not be brought up (catalog, weights, model load)
//! - `4`: no prediction available (every model failed)

use crate::catalog::CatalogError;
use crate::domain::ValidationError;
use crate::ensemble::{EnsembleError, WeightError};
use crate::models::RegistryError;

pub const EXIT_INPUT: u8 = 2;
pub const EXIT_STARTUP: u8 = 3;
pub const EXIT_NO_PREDICTION: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Integrity { .. } => AppError::new(EXIT_STARTUP, err.to_string()),
            CatalogError::UnknownLabel { .. } | CatalogError::UnknownCode { .. } => {
                AppError::new(EXIT_INPUT, err.to_string())
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(EXIT_INPUT, format!("Invalid request: {err}"))
    }
}

impl From<WeightError> for AppError {
    fn from(err: WeightError) -> Self {
        AppError::new(EXIT_STARTUP, err.to_string())
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        AppError::new(EXIT_STARTUP, err.to_string())
    }
}

impl From<EnsembleError> for AppError {
    fn from(err: EnsembleError) -> Self {
        match err {
            EnsembleError::Registry(e) => e.into(),
            EnsembleError::Empty { ref failures } => {
                let mut message = err.to_string();
                for f in failures {
                    message.push_str(&format!("\n  {}: {}", f.model, f.reason));
                }
                AppError::new(EXIT_NO_PREDICTION, message)
            }
        }
    }
}
