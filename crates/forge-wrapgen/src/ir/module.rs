//! Resolved module metadata
//!
//! This module provides the [`ResolvedModule`] structure handed over by a
//! module resolver: the module's syntax trees (top-level declarations only),
//! the mapping from declaring identifiers to their resolved objects, and any
//! diagnostics the type checker reported.

use crate::ir::{GoType, InterfaceType, Package};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identity of a declaring identifier within a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclId(pub u32);

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Declaring identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    pub id: DeclId,
    pub name: String,
}

impl Ident {
    pub fn new(id: DeclId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Kind of a general declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenDeclKind {
    Import,
    Const,
    Type,
    Var,
}

/// Type specification (`type Name ...` or `type Name = ...`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeSpec {
    pub name: Ident,
    /// Whether this is an alias declaration
    #[serde(default)]
    pub alias: bool,
}

/// Specification within a general declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "spec", rename_all = "snake_case")]
pub enum Spec {
    /// Import specification
    Import {
        path: String,
        #[serde(default)]
        name: Option<String>,
    },
    /// Const or var specification
    Value { names: Vec<Ident> },
    /// Type specification
    Type(TypeSpec),
}

/// General declaration: import, const, type or var group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenDecl {
    pub kind: GenDeclKind,
    #[serde(default)]
    pub specs: Vec<Spec>,
}

/// Function or method declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: Ident,
    /// Receiver type name for methods
    #[serde(default)]
    pub receiver: Option<String>,
}

/// Top-level declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "decl", rename_all = "snake_case")]
pub enum Decl {
    Gen(GenDecl),
    Func(FuncDecl),
}

impl Decl {
    /// Type specifications declared by this declaration
    pub fn type_specs(&self) -> impl Iterator<Item = &TypeSpec> {
        let specs: &[Spec] = match self {
            Decl::Gen(decl) => &decl.specs,
            Decl::Func(_) => &[],
        };
        specs.iter().filter_map(|spec| match spec {
            Spec::Type(ts) => Some(ts),
            _ => None,
        })
    }
}

/// Syntax tree of one source file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyntaxFile {
    /// Source file path as reported by the resolver
    pub path: String,
    #[serde(default)]
    pub decls: Vec<Decl>,
}

impl SyntaxFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            decls: Vec::new(),
        }
    }

    /// Add a declaration
    pub fn decl(mut self, decl: Decl) -> Self {
        self.decls.push(decl);
        self
    }

    /// Base name of the source file (last path segment)
    pub fn base_name(&self) -> &str {
        base_name(&self.path)
    }
}

/// Last segment of a slash- or backslash-separated path
pub fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Object a declaring identifier resolves to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Object {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: GoType,
}

impl Object {
    pub fn new(name: impl Into<String>, ty: GoType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Diagnostic reported while loading or type-checking a module
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Position as `file:line:col`, when known
    #[serde(default)]
    pub pos: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            pos: None,
            message: message.into(),
        }
    }

    /// Attach a source position
    pub fn at(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pos {
            Some(pos) => write!(f, "{}: {}", pos, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// A module as produced by the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedModule {
    /// Import path of the module (e.g., "github.com/acme/store")
    pub path: String,

    /// Declared short name (e.g., "store")
    pub name: String,

    /// Syntax trees, in resolver order
    #[serde(default)]
    pub files: Vec<SyntaxFile>,

    /// Declaring identifier to resolved object
    #[serde(default)]
    pub defs: BTreeMap<DeclId, Object>,

    /// Load and type-check diagnostics
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolvedModule {
    /// Create an empty module
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            files: Vec::new(),
            defs: BTreeMap::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Look up the object declared by an identifier
    pub fn object(&self, ident: &Ident) -> Option<&Object> {
        self.defs.get(&ident.id)
    }

    /// Whether the module carries any diagnostics
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Builder for assembling a [`ResolvedModule`] in memory.
///
/// Assigns declaration ids and keeps the syntax trees and the definition
/// map consistent.
#[derive(Debug)]
pub struct ModuleBuilder {
    module: ResolvedModule,
    next_id: u32,
}

impl ModuleBuilder {
    /// Start a module with the given import path and short name
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: ResolvedModule::new(path, name),
            next_id: 0,
        }
    }

    fn file_mut(&mut self, path: &str) -> &mut SyntaxFile {
        let index = match self.module.files.iter().position(|f| f.path == path) {
            Some(index) => index,
            None => {
                self.module.files.push(SyntaxFile::new(path));
                self.module.files.len() - 1
            }
        };
        &mut self.module.files[index]
    }

    fn next_ident(&mut self, name: &str) -> Ident {
        let ident = Ident::new(DeclId(self.next_id), name);
        self.next_id += 1;
        ident
    }

    /// Declare `type name <ty>` in `file`; `ty` is the underlying type
    pub fn type_decl(mut self, file: &str, name: &str, ty: GoType) -> Self {
        let ident = self.next_ident(name);
        let named = GoType::Named {
            package: Some(Package::new(
                self.module.path.clone(),
                self.module.name.clone(),
            )),
            name: name.to_string(),
            type_args: Vec::new(),
            underlying: Some(Box::new(ty)),
        };
        self.module
            .defs
            .insert(ident.id, Object::new(name, named));
        self.push_type_spec(file, ident, false);
        self
    }

    /// Declare `type name interface{...}` in `file`
    pub fn interface_decl(self, file: &str, name: &str, iface: InterfaceType) -> Self {
        self.type_decl(file, name, GoType::Interface(iface))
    }

    /// Declare `type name = <ty>` in `file`
    pub fn alias_decl(mut self, file: &str, name: &str, ty: GoType) -> Self {
        let ident = self.next_ident(name);
        self.module.defs.insert(ident.id, Object::new(name, ty));
        self.push_type_spec(file, ident, true);
        self
    }

    /// Declare a type whose identifier has no resolved object
    pub fn unresolved_type_decl(mut self, file: &str, name: &str) -> Self {
        let ident = self.next_ident(name);
        self.push_type_spec(file, ident, false);
        self
    }

    /// Declare a top-level function in `file`
    pub fn func_decl(mut self, file: &str, name: &str) -> Self {
        let ident = self.next_ident(name);
        self.file_mut(file).decls.push(Decl::Func(FuncDecl {
            name: ident,
            receiver: None,
        }));
        self
    }

    /// Add an import declaration to `file`
    pub fn import(mut self, file: &str, path: &str) -> Self {
        self.file_mut(file).decls.push(Decl::Gen(GenDecl {
            kind: GenDeclKind::Import,
            specs: vec![Spec::Import {
                path: path.to_string(),
                name: None,
            }],
        }));
        self
    }

    /// Record a diagnostic
    pub fn diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.module.diagnostics.push(diagnostic);
        self
    }

    fn push_type_spec(&mut self, file: &str, name: Ident, alias: bool) {
        self.file_mut(file).decls.push(Decl::Gen(GenDecl {
            kind: GenDeclKind::Type,
            specs: vec![Spec::Type(TypeSpec { name, alias })],
        }));
    }

    /// Finish the module
    pub fn build(self) -> ResolvedModule {
        self.module
    }
}
