//! CLI library components for the case report form validator.

pub mod input;
pub mod logging;
pub mod outcome;
pub mod summary;
