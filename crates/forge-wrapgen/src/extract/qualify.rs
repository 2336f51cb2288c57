//! Type-name qualification
//!
//! Named types owned by the analyzed module are written bare, since the
//! generated code lives in that module. Every other package is referred to
//! by the last segment of its import path. Two imported packages sharing a
//! last segment render identically; that collision is not detected.

use crate::ir::{GoType, Package};

/// Renders types relative to one module
#[derive(Debug, Clone, Copy)]
pub struct Qualifier<'a> {
    module_name: &'a str,
}

impl<'a> Qualifier<'a> {
    /// Create a qualifier for code generated inside `module_name`
    pub fn new(module_name: &'a str) -> Self {
        Self { module_name }
    }

    /// Prefix for named types of `package`, empty for the module itself
    pub fn package_prefix(&self, package: &Package) -> String {
        if package.name == self.module_name {
            String::new()
        } else {
            package.last_path_segment().to_string()
        }
    }

    /// Render a type as source text for the module
    pub fn render(&self, ty: &GoType) -> String {
        ty.type_string(&|package: &Package| self.package_prefix(package))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Signature, Var};

    #[test]
    fn test_own_module_is_unqualified() {
        let q = Qualifier::new("store");
        let ty = GoType::named(Package::new("github.com/acme/store", "store"), "Record");
        assert_eq!(q.render(&ty), "Record");
        assert_eq!(q.render(&GoType::pointer(ty)), "*Record");
    }

    #[test]
    fn test_foreign_package_uses_last_segment() {
        let q = Qualifier::new("store");
        let ty = GoType::named(Package::new("a/b/context", "context"), "Context");
        assert_eq!(q.render(&ty), "context.Context");
    }

    #[test]
    fn test_nested_types_are_qualified_throughout() {
        let q = Qualifier::new("store");
        let record = GoType::named(Package::new("github.com/acme/store", "store"), "Record");
        let ctx = GoType::named(Package::new("context", "context"), "Context");
        let ty = GoType::map(
            GoType::basic("string"),
            GoType::Signature(Signature::new(
                vec![Var::unnamed(ctx)],
                vec![Var::unnamed(GoType::slice(record))],
            )),
        );
        assert_eq!(q.render(&ty), "map[string]func(context.Context) []Record");
    }

    #[test]
    fn test_shared_last_segment_collides() {
        let q = Qualifier::new("store");
        let a = GoType::named(Package::new("github.com/one/log", "log"), "Logger");
        let b = GoType::named(Package::new("github.com/two/log", "log"), "Logger");
        assert_eq!(q.render(&a), q.render(&b));
    }

    #[test]
    fn test_universe_types() {
        let q = Qualifier::new("store");
        assert_eq!(q.render(&GoType::error()), "error");
        assert_eq!(q.render(&GoType::basic("int64")), "int64");
    }
}
