//! Unified error type for the encoder.
//!
//! Every fallible operation in this crate returns [`EncodeError`]. There is
//! no local recovery: every error is fatal to the current run. Each variant
//! names the component that raised it.

use thiserror::Error;

/// Top-level error type for the linear-layout encoder.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// Illegal flavor/budget combination (e.g. `mixed` with one side zero).
    #[error("parameter error in {component}: {detail}")]
    Parameter { component: &'static str, detail: String },

    /// Malformed graph (self-loop, bad direction-sequence length, ...).
    #[error("input error in {component}: {detail}")]
    Input { component: &'static str, detail: String },

    /// Contradictory or out-of-range custom (side-channel) constraint.
    #[error("constraint error in {component}: {detail}")]
    Constraint { component: &'static str, detail: String },

    /// Variable registry invariant violated. A defect in the encoder.
    #[error("internal error in {component}: {detail}")]
    Internal { component: &'static str, detail: String },

    /// File I/O failure or malformed DIMACS input.
    #[error("I/O error in {component}: {detail}")]
    Io { component: &'static str, detail: String },
}

impl EncodeError {
    pub fn parameter(component: &'static str, detail: impl Into<String>) -> Self {
        EncodeError::Parameter { component, detail: detail.into() }
    }

    pub fn input(component: &'static str, detail: impl Into<String>) -> Self {
        EncodeError::Input { component, detail: detail.into() }
    }

    pub fn constraint(component: &'static str, detail: impl Into<String>) -> Self {
        EncodeError::Constraint { component, detail: detail.into() }
    }

    pub fn internal(component: &'static str, detail: impl Into<String>) -> Self {
        EncodeError::Internal { component, detail: detail.into() }
    }

    pub fn io(component: &'static str, detail: impl Into<String>) -> Self {
        EncodeError::Io { component, detail: detail.into() }
    }
}

impl From<std::io::Error> for EncodeError {
    fn from(e: std::io::Error) -> Self {
        EncodeError::io("dimacs", e.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EncodeError>;
