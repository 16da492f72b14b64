//! CLI command implementations

pub mod case;
pub mod prune;
pub mod transform;
