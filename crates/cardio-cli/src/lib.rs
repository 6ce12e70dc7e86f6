//! CLI library components for Cardio Risk Studio.

pub mod logging;
