//! Resolver over JSON module dumps
//!
//! An external type checker writes the resolved modules it loaded as
//!
//! ```json
//! { "modules": [ { "path": "...", "name": "...", "files": [...], "defs": {...} } ] }
//! ```
//!
//! and this resolver serves them by path.

use crate::error::ModuleLoadError;
use crate::ir::ResolvedModule;
use crate::resolve::ModuleResolver;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Top-level shape of a module dump
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModuleDump {
    #[serde(default)]
    pub modules: Vec<ResolvedModule>,
}

/// Resolver backed by a parsed [`ModuleDump`]
#[derive(Debug, Clone, Default)]
pub struct JsonDumpResolver {
    dump: ModuleDump,
}

impl JsonDumpResolver {
    /// Wrap an already parsed dump
    pub fn new(dump: ModuleDump) -> Self {
        Self { dump }
    }

    /// Read and parse a dump file
    pub fn from_file(path: &Path) -> Result<Self, ModuleLoadError> {
        let content = fs::read_to_string(path).map_err(|source| ModuleLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let resolver = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            modules = resolver.dump.modules.len(),
            "wrapgen.dump loaded"
        );
        Ok(resolver)
    }

    /// Parse a dump from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ModuleLoadError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// The underlying dump
    pub fn dump(&self) -> &ModuleDump {
        &self.dump
    }
}

impl ModuleResolver for JsonDumpResolver {
    fn load(&self, module_path: &str) -> Result<Vec<ResolvedModule>, ModuleLoadError> {
        Ok(self
            .dump
            .modules
            .iter()
            .filter(|m| m.path == module_path)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{GoType, InterfaceType};
    use std::io::Write;

    const EXAMPLE: &str = include_str!("../../fixtures/example.module.json");

    #[test]
    fn test_example_fixture_parses() {
        let resolver = JsonDumpResolver::from_json(EXAMPLE).unwrap();
        let modules = resolver.load("github.com/acme/wrappers/example").unwrap();
        assert_eq!(modules.len(), 1);

        let module = &modules[0];
        assert_eq!(module.name, "example");
        assert_eq!(module.files.len(), 2);

        let spec = module.files[0].decls[1].type_specs().next().unwrap();
        let object = module.object(&spec.name).unwrap();
        assert!(matches!(
            object.ty.underlying(),
            Some(GoType::Interface(InterfaceType { methods, .. })) if methods.len() == 2
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXAMPLE.as_bytes()).unwrap();

        let resolver = JsonDumpResolver::from_file(file.path()).unwrap();
        assert_eq!(resolver.dump().modules.len(), 1);
        assert!(resolver.load("github.com/acme/other").unwrap().is_empty());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("module.json");
        assert!(matches!(
            JsonDumpResolver::from_file(&missing),
            Err(ModuleLoadError::Io { .. })
        ));

        assert!(matches!(
            JsonDumpResolver::from_json("{\"modules\": 3}"),
            Err(ModuleLoadError::Json(_))
        ));
    }
}
