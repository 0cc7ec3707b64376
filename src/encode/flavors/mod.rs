//! Flavor encoders: per-edge-pair crossing/nesting/X-cross clauses, one
//! module per layout flavor.

pub mod common;
pub mod mixed;
pub mod mixed_pages;
pub mod queue;
pub mod stack;
pub mod track;
