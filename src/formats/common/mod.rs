//! Shared building blocks for the fixed-table formats

mod arena;
pub(crate) mod json;

pub use arena::BodyArena;
