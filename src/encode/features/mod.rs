//! Feature encoders: opt-in constraints layered on top of a flavor
//! encoding.

pub mod adjacency;
pub mod directed;
pub mod dispersible;
pub mod local;
pub mod planar;
pub mod star;
pub mod trees;
