//! Module resolution boundary
//!
//! Parsing and type checking happen outside this crate. A
//! [`ModuleResolver`] hands over the result for a module path:
//! - `StaticResolver`: modules registered in memory
//! - `JsonDumpResolver`: modules read from a JSON dump written by an
//!   external type checker

pub mod json;
pub mod memory;

pub use json::{JsonDumpResolver, ModuleDump};
pub use memory::StaticResolver;

use crate::error::ModuleLoadError;
use crate::ir::ResolvedModule;

/// Source of resolved modules
pub trait ModuleResolver {
    /// Load the modules matching `module_path`.
    ///
    /// Modules are returned even when they carry diagnostics; rejecting them
    /// is the caller's decision.
    fn load(&self, module_path: &str) -> Result<Vec<ResolvedModule>, ModuleLoadError>;
}

impl<R: ModuleResolver + ?Sized> ModuleResolver for &R {
    fn load(&self, module_path: &str) -> Result<Vec<ResolvedModule>, ModuleLoadError> {
        (**self).load(module_path)
    }
}

impl<R: ModuleResolver + ?Sized> ModuleResolver for Box<R> {
    fn load(&self, module_path: &str) -> Result<Vec<ResolvedModule>, ModuleLoadError> {
        (**self).load(module_path)
    }
}
