//! Declaration scanning
//!
//! Walks a module's syntax trees in resolver order and yields every
//! top-level type declaration whose underlying type is an interface.
//! Excluded files, excluded names, declarations without a resolved object
//! and non-interface declarations are skipped silently.
//!
//! File exclusion matches on the base name only, so two files with the same
//! name in different directories cannot be told apart.

use crate::build::GeneratorConfig;
use crate::ir::{GoType, InterfaceType, ResolvedModule};
use tracing::trace;

/// A discovered interface declaration, methods not yet rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceHandle<'m> {
    /// Declared name
    pub name: &'m str,
    /// Path of the declaring file
    pub file: &'m str,
    /// Resolved interface type
    pub interface: &'m InterfaceType,
}

/// Finds interface declarations, honoring a [`GeneratorConfig`]
#[derive(Debug, Clone, Copy)]
pub struct DeclarationScanner<'c> {
    config: &'c GeneratorConfig,
}

impl<'c> DeclarationScanner<'c> {
    /// Create a scanner applying the exclusions in `config`
    pub fn new(config: &'c GeneratorConfig) -> Self {
        Self { config }
    }

    /// Scan `module`, returning interfaces in declaration order
    pub fn scan<'m>(&self, module: &'m ResolvedModule) -> Vec<InterfaceHandle<'m>> {
        let mut handles = Vec::new();

        for file in &module.files {
            let base_name = file.base_name();
            if self.config.is_file_excluded(base_name) {
                trace!(file = %file.path, "wrapgen.scan excluded file");
                continue;
            }

            for spec in file.decls.iter().flat_map(|decl| decl.type_specs()) {
                let name = spec.name.name.as_str();
                let Some(object) = module.object(&spec.name) else {
                    trace!(name = %name, id = %spec.name.id, "wrapgen.scan no resolved type");
                    continue;
                };

                let Some(GoType::Interface(interface)) = object.ty.underlying() else {
                    continue;
                };

                if self.config.is_interface_excluded(name) {
                    trace!(name = %name, "wrapgen.scan excluded interface");
                    continue;
                }

                handles.push(InterfaceHandle {
                    name,
                    file: &file.path,
                    interface,
                });
            }
        }

        handles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{InterfaceMethod, ModuleBuilder, Package, Signature};
    use pretty_assertions::assert_eq;

    fn iface() -> InterfaceType {
        InterfaceType::new(vec![InterfaceMethod::new("Close", Signature::default())])
    }

    fn module() -> ResolvedModule {
        ModuleBuilder::new("github.com/acme/store", "store")
            .import("store.go", "context")
            .interface_decl("store.go", "Store", iface())
            .type_decl("store.go", "Record", GoType::Struct { fields: vec![] })
            .func_decl("store.go", "New")
            .interface_decl("cache/cache.go", "Cache", iface())
            .interface_decl("mock.go", "Mocked", iface())
            .unresolved_type_decl("broken.go", "Broken")
            .alias_decl(
                "alias.go",
                "Closer",
                GoType::named(Package::new("io", "io"), "Closer").with_underlying(
                    GoType::Interface(iface()),
                ),
            )
            .alias_decl("alias.go", "ID", GoType::basic("string"))
            .build()
    }

    fn names(handles: &[InterfaceHandle<'_>]) -> Vec<String> {
        handles.iter().map(|h| h.name.to_string()).collect()
    }

    #[test]
    fn test_finds_interfaces_in_order() {
        let config = GeneratorConfig::default();
        let module = module();
        let handles = DeclarationScanner::new(&config).scan(&module);

        assert_eq!(names(&handles), vec!["Store", "Cache", "Mocked", "Closer"]);
        assert_eq!(handles[1].file, "cache/cache.go");
        assert_eq!(handles[0].interface, &iface());
    }

    #[test]
    fn test_excluded_file_by_base_name() {
        let config = GeneratorConfig::default().ignore_file_names(["mock.go", "cache.go"]);
        let module = module();
        let handles = DeclarationScanner::new(&config).scan(&module);

        assert_eq!(names(&handles), vec!["Store", "Closer"]);
    }

    #[test]
    fn test_base_name_exclusion_spans_directories() {
        let module = ModuleBuilder::new("github.com/acme/store", "store")
            .interface_decl("a/mock.go", "FirstMock", iface())
            .interface_decl("b/mock.go", "SecondMock", iface())
            .interface_decl("b/store.go", "Store", iface())
            .build();
        let config = GeneratorConfig::default().ignore_file_names(["mock.go"]);
        let handles = DeclarationScanner::new(&config).scan(&module);

        assert_eq!(names(&handles), vec!["Store"]);
    }

    #[test]
    fn test_excluded_interface_name() {
        let config = GeneratorConfig::default().ignore_interface_names(["Store", "Closer"]);
        let module = module();
        let handles = DeclarationScanner::new(&config).scan(&module);

        assert_eq!(names(&handles), vec!["Cache", "Mocked"]);
    }

    #[test]
    fn test_excluding_non_interface_names_is_harmless() {
        let config = GeneratorConfig::default().ignore_interface_names(["Record", "Nope"]);
        let module = module();
        let handles = DeclarationScanner::new(&config).scan(&module);

        assert_eq!(handles.len(), 4);
    }

    #[test]
    fn test_named_type_without_underlying_is_skipped() {
        let module = ModuleBuilder::new("github.com/acme/store", "store")
            .alias_decl(
                "alias.go",
                "Opaque",
                GoType::named(Package::new("io", "io"), "Reader"),
            )
            .build();
        let config = GeneratorConfig::default();
        assert!(DeclarationScanner::new(&config).scan(&module).is_empty());
    }
}
