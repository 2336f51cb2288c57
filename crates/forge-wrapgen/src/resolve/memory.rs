//! In-memory module registry

use crate::error::ModuleLoadError;
use crate::ir::ResolvedModule;
use crate::resolve::ModuleResolver;
use std::collections::HashMap;

/// Resolver over modules registered by path
#[derive(Debug, Default, Clone)]
pub struct StaticResolver {
    modules: HashMap<String, Vec<ResolvedModule>>,
}

impl StaticResolver {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under its own path
    pub fn register(&mut self, module: ResolvedModule) {
        self.modules
            .entry(module.path.clone())
            .or_default()
            .push(module);
    }

    /// Register a module, builder style
    pub fn with_module(mut self, module: ResolvedModule) -> Self {
        self.register(module);
        self
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.modules.values().map(Vec::len).sum()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ModuleResolver for StaticResolver {
    fn load(&self, module_path: &str) -> Result<Vec<ResolvedModule>, ModuleLoadError> {
        Ok(self.modules.get(module_path).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_load() {
        let resolver = StaticResolver::new()
            .with_module(ResolvedModule::new("github.com/acme/store", "store"))
            .with_module(ResolvedModule::new("github.com/acme/cache", "cache"));

        assert_eq!(resolver.len(), 2);
        let modules = resolver.load("github.com/acme/store").unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name, "store");
    }

    #[test]
    fn test_unknown_path_yields_nothing() {
        let resolver = StaticResolver::new();
        assert!(resolver.is_empty());
        assert!(resolver.load("github.com/acme/none").unwrap().is_empty());
    }
}
