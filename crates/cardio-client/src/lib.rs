//! Submission client and session controller for the prediction service.

pub mod client;
pub mod controller;
pub mod error;

pub use client::{DEFAULT_ENDPOINT, PredictionClient};
pub use controller::PredictionFormController;
pub use error::{PredictError, Result};
