//! Resolved type model for Forge-Wrapgen
//!
//! This module provides the representation of the types an external type
//! checker hands over for a module: named types with their owning package,
//! composite types, signatures and interfaces.
//!
//! # Type Rendering
//!
//! [`GoType::type_string`] renders a type as source text. Package
//! qualification is delegated to a caller-supplied function so the same
//! model can be printed fully qualified (see the [`fmt::Display`] impl) or
//! relative to the package the generated code will live in.
//!
//! | Type | Rendered |
//! |------|----------|
//! | `Basic` | `int`, `string`, `error` |
//! | `Named` | `context.Context`, `Cache[string, int]` |
//! | `Pointer` | `*T` |
//! | `Slice` | `[]T` |
//! | `Array` | `[4]T` |
//! | `Map` | `map[K]V` |
//! | `Chan` | `chan T`, `chan<- T`, `<-chan T` |
//! | `Signature` | `func(a int, rest ...string) (int, error)` |
//! | `Interface` | `interface{Close() error}` |
//! | `Struct` | `struct{Name string; Age int "json:\"age\""}` |
//!
//! Named types are never expanded to their underlying type when rendered.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Package that owns a named type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Package {
    /// Full import path (e.g., "github.com/acme/store/cache")
    pub path: String,
    /// Declared package name (e.g., "cache")
    pub name: String,
}

impl Package {
    /// Create a new package reference
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Last segment of the import path, falling back to the package name
    pub fn last_path_segment(&self) -> &str {
        match self.path.rsplit('/').next() {
            Some(segment) if !segment.is_empty() => segment,
            _ => &self.name,
        }
    }
}

/// Channel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChanDir {
    /// `chan T`
    #[default]
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
}

/// A named, typed variable of a parameter or result tuple
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Var {
    /// Variable name, empty when unnamed
    #[serde(default)]
    pub name: String,
    /// Variable type
    #[serde(rename = "type")]
    pub ty: GoType,
}

impl Var {
    /// Create a named variable
    pub fn new(name: impl Into<String>, ty: GoType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Create an unnamed variable
    pub fn unnamed(ty: GoType) -> Self {
        Self::new("", ty)
    }
}

/// Function signature: parameter tuple, result tuple and variadic flag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Signature {
    /// Parameters in declaration order
    #[serde(default)]
    pub params: Vec<Var>,
    /// Results in declaration order
    #[serde(default)]
    pub results: Vec<Var>,
    /// Whether the last parameter is variadic (its type is then a slice)
    #[serde(default)]
    pub variadic: bool,
}

impl Signature {
    /// Create a non-variadic signature
    pub fn new(params: Vec<Var>, results: Vec<Var>) -> Self {
        Self {
            params,
            results,
            variadic: false,
        }
    }

    /// Mark the last parameter as variadic
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }
}

/// A method declared by an interface
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceMethod {
    /// Method name
    pub name: String,
    /// Method type, expected to be a [`GoType::Signature`]
    #[serde(rename = "type")]
    pub ty: GoType,
}

impl InterfaceMethod {
    /// Create a method from a signature
    pub fn new(name: impl Into<String>, signature: Signature) -> Self {
        Self {
            name: name.into(),
            ty: GoType::Signature(signature),
        }
    }

    /// The method's signature, if its type is one
    pub fn signature(&self) -> Option<&Signature> {
        match &self.ty {
            GoType::Signature(sig) => Some(sig),
            _ => None,
        }
    }
}

/// Interface type: explicit methods plus embedded types
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct InterfaceType {
    /// Explicitly declared methods, in the order the resolver exposes them
    #[serde(default)]
    pub methods: Vec<InterfaceMethod>,
    /// Embedded types
    #[serde(default)]
    pub embeddeds: Vec<GoType>,
}

impl InterfaceType {
    /// Create an interface with explicit methods only
    pub fn new(methods: Vec<InterfaceMethod>) -> Self {
        Self {
            methods,
            embeddeds: Vec::new(),
        }
    }

    /// Add an embedded type
    pub fn embed(mut self, ty: GoType) -> Self {
        self.embeddeds.push(ty);
        self
    }

    /// Complete method set of the interface.
    ///
    /// Without embedded types the explicit methods are returned in resolver
    /// order. Otherwise explicit and embedded methods are merged, the first
    /// occurrence of a name wins, and the result is sorted by name.
    ///
    /// On failure the offending embedded type is returned.
    pub fn method_set(&self) -> Result<Vec<&InterfaceMethod>, &GoType> {
        if self.embeddeds.is_empty() {
            return Ok(self.methods.iter().collect());
        }

        let mut seen = HashSet::new();
        let mut methods = Vec::new();
        self.collect_methods(&mut seen, &mut methods)?;
        methods.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(methods)
    }

    fn collect_methods<'a>(
        &'a self,
        seen: &mut HashSet<&'a str>,
        out: &mut Vec<&'a InterfaceMethod>,
    ) -> Result<(), &'a GoType> {
        for method in &self.methods {
            if seen.insert(method.name.as_str()) {
                out.push(method);
            }
        }
        for embedded in &self.embeddeds {
            match embedded.underlying() {
                Some(GoType::Interface(inner)) => inner.collect_methods(seen, out)?,
                _ => return Err(embedded),
            }
        }
        Ok(())
    }
}

/// Struct field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    /// Field name (the type name for embedded fields)
    pub name: String,
    /// Field type
    #[serde(rename = "type")]
    pub ty: GoType,
    /// Whether the field is embedded
    #[serde(default)]
    pub embedded: bool,
    /// Raw struct tag
    #[serde(default)]
    pub tag: Option<String>,
}

impl Field {
    /// Create a named field
    pub fn new(name: impl Into<String>, ty: GoType) -> Self {
        Self {
            name: name.into(),
            ty,
            embedded: false,
            tag: None,
        }
    }

    /// Attach a struct tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Mark as embedded
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }
}

/// A resolved type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoType {
    /// Predeclared type: `int`, `string`, `error`, `unsafe.Pointer`, ...
    Basic { name: String },

    /// Declared type, possibly instantiated with type arguments
    Named {
        /// Owning package (None for universe-scope types)
        #[serde(default)]
        package: Option<Package>,
        name: String,
        #[serde(default)]
        type_args: Vec<GoType>,
        /// Underlying type, when the resolver supplied it
        #[serde(default)]
        underlying: Option<Box<GoType>>,
    },

    /// `*T`
    Pointer { elem: Box<GoType> },

    /// `[]T`
    Slice { elem: Box<GoType> },

    /// `[N]T`
    Array { len: u64, elem: Box<GoType> },

    /// `map[K]V`
    Map { key: Box<GoType>, value: Box<GoType> },

    /// `chan T`, `chan<- T`, `<-chan T`
    Chan {
        #[serde(default)]
        dir: ChanDir,
        elem: Box<GoType>,
    },

    /// `func(...) ...`
    Signature(Signature),

    /// `interface{...}`
    Interface(InterfaceType),

    /// `struct{...}`
    Struct {
        #[serde(default)]
        fields: Vec<Field>,
    },

    /// Type parameter reference
    TypeParam { name: String },
}

impl GoType {
    /// Create a predeclared type
    pub fn basic(name: impl Into<String>) -> Self {
        GoType::Basic { name: name.into() }
    }

    /// Create a named type owned by `package`
    pub fn named(package: Package, name: impl Into<String>) -> Self {
        GoType::Named {
            package: Some(package),
            name: name.into(),
            type_args: Vec::new(),
            underlying: None,
        }
    }

    /// Create the universe `error` type
    pub fn error() -> Self {
        GoType::basic("error")
    }

    /// Create a `*T` type
    pub fn pointer(elem: GoType) -> Self {
        GoType::Pointer {
            elem: Box::new(elem),
        }
    }

    /// Create a `[]T` type
    pub fn slice(elem: GoType) -> Self {
        GoType::Slice {
            elem: Box::new(elem),
        }
    }

    /// Create a `[N]T` type
    pub fn array(len: u64, elem: GoType) -> Self {
        GoType::Array {
            len,
            elem: Box::new(elem),
        }
    }

    /// Create a `map[K]V` type
    pub fn map(key: GoType, value: GoType) -> Self {
        GoType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Create a channel type
    pub fn chan(dir: ChanDir, elem: GoType) -> Self {
        GoType::Chan {
            dir,
            elem: Box::new(elem),
        }
    }

    /// Attach type arguments to a named type (no-op for other types)
    pub fn with_type_args(mut self, args: Vec<GoType>) -> Self {
        if let GoType::Named { type_args, .. } = &mut self {
            *type_args = args;
        }
        self
    }

    /// Attach the underlying type to a named type (no-op for other types)
    pub fn with_underlying(mut self, ty: GoType) -> Self {
        if let GoType::Named { underlying, .. } = &mut self {
            *underlying = Some(Box::new(ty));
        }
        self
    }

    /// Underlying type.
    ///
    /// Returns None for a named type whose underlying type was not resolved.
    pub fn underlying(&self) -> Option<&GoType> {
        match self {
            GoType::Named { underlying, .. } => underlying.as_deref(),
            _ => Some(self),
        }
    }

    /// Short description of the type's kind, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            GoType::Basic { .. } => "basic",
            GoType::Named { .. } => "named",
            GoType::Pointer { .. } => "pointer",
            GoType::Slice { .. } => "slice",
            GoType::Array { .. } => "array",
            GoType::Map { .. } => "map",
            GoType::Chan { .. } => "chan",
            GoType::Signature(_) => "signature",
            GoType::Interface(_) => "interface",
            GoType::Struct { .. } => "struct",
            GoType::TypeParam { .. } => "type parameter",
        }
    }

    /// Render as source text.
    ///
    /// `qualifier` maps a package to the prefix written before its named
    /// types; an empty prefix writes the bare type name.
    pub fn type_string<Q>(&self, qualifier: &Q) -> String
    where
        Q: Fn(&Package) -> String + ?Sized,
    {
        let mut out = String::new();
        write_type(&mut out, self, qualifier);
        out
    }
}

fn write_type<Q>(out: &mut String, ty: &GoType, q: &Q)
where
    Q: Fn(&Package) -> String + ?Sized,
{
    match ty {
        GoType::Basic { name } | GoType::TypeParam { name } => out.push_str(name),

        GoType::Named {
            package,
            name,
            type_args,
            ..
        } => {
            if let Some(package) = package {
                let prefix = q(package);
                if !prefix.is_empty() {
                    out.push_str(&prefix);
                    out.push('.');
                }
            }
            out.push_str(name);
            if !type_args.is_empty() {
                out.push('[');
                write_list(out, type_args, q);
                out.push(']');
            }
        }

        GoType::Pointer { elem } => {
            out.push('*');
            write_type(out, elem, q);
        }

        GoType::Slice { elem } => {
            out.push_str("[]");
            write_type(out, elem, q);
        }

        GoType::Array { len, elem } => {
            out.push_str(&format!("[{}]", len));
            write_type(out, elem, q);
        }

        GoType::Map { key, value } => {
            out.push_str("map[");
            write_type(out, key, q);
            out.push(']');
            write_type(out, value, q);
        }

        GoType::Chan { dir, elem } => {
            let (keyword, paren) = match dir {
                // chan (<-chan T) would otherwise parse as chan<- (chan T)
                ChanDir::Both => (
                    "chan ",
                    matches!(
                        elem.as_ref(),
                        GoType::Chan {
                            dir: ChanDir::Recv,
                            ..
                        }
                    ),
                ),
                ChanDir::Send => ("chan<- ", false),
                ChanDir::Recv => ("<-chan ", false),
            };
            out.push_str(keyword);
            if paren {
                out.push('(');
            }
            write_type(out, elem, q);
            if paren {
                out.push(')');
            }
        }

        GoType::Signature(sig) => {
            out.push_str("func");
            write_signature(out, sig, q);
        }

        GoType::Interface(iface) => {
            out.push_str("interface{");
            let mut first = true;
            for method in &iface.methods {
                if !first {
                    out.push_str("; ");
                }
                first = false;
                out.push_str(&method.name);
                match &method.ty {
                    GoType::Signature(sig) => write_signature(out, sig, q),
                    other => {
                        out.push(' ');
                        write_type(out, other, q);
                    }
                }
            }
            for embedded in &iface.embeddeds {
                if !first {
                    out.push_str("; ");
                }
                first = false;
                write_type(out, embedded, q);
            }
            out.push('}');
        }

        GoType::Struct { fields } => {
            out.push_str("struct{");
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                if !field.embedded {
                    out.push_str(&field.name);
                    out.push(' ');
                }
                write_type(out, &field.ty, q);
                if let Some(tag) = &field.tag {
                    out.push_str(&format!(" {:?}", tag));
                }
            }
            out.push('}');
        }
    }
}

fn write_list<Q>(out: &mut String, types: &[GoType], q: &Q)
where
    Q: Fn(&Package) -> String + ?Sized,
{
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_type(out, ty, q);
    }
}

fn write_signature<Q>(out: &mut String, sig: &Signature, q: &Q)
where
    Q: Fn(&Package) -> String + ?Sized,
{
    write_tuple(out, &sig.params, sig.variadic, q);

    match sig.results.as_slice() {
        [] => {}
        [only] if only.name.is_empty() => {
            out.push(' ');
            write_type(out, &only.ty, q);
        }
        results => {
            out.push(' ');
            write_tuple(out, results, false, q);
        }
    }
}

fn write_tuple<Q>(out: &mut String, vars: &[Var], variadic: bool, q: &Q)
where
    Q: Fn(&Package) -> String + ?Sized,
{
    out.push('(');
    for (i, var) in vars.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if !var.name.is_empty() {
            out.push_str(&var.name);
            out.push(' ');
        }
        match &var.ty {
            GoType::Slice { elem } if variadic && i == vars.len() - 1 => {
                out.push_str("...");
                write_type(out, elem, q);
            }
            ty => write_type(out, ty, q),
        }
    }
    out.push(')');
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_string(&|p: &Package| p.path.clone()))
    }
}
