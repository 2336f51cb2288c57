//! Intermediate Representation (IR) for Forge-Wrapgen
//!
//! This module provides the resolved type model consumed from a module
//! resolver and the symbol records produced for wrapper renderers.

pub mod types;
pub mod symbol;
pub mod module;

pub use types::*;
pub use symbol::*;
pub use module::*;
