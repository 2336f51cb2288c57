//! Forge-Wrapgen: interface discovery for generated forwarding wrappers
//!
//! This crate finds the interface declarations of a resolved module and
//! renders, for every method, the text a wrapper template needs: the
//! parameter list, the forwarding argument list and the result list.
//! Parsing and type checking are done by an external resolver; rendering the
//! final wrapper source is left to the consumer of [`GenerationResult`].
//!
//! # Architecture
//!
//! - `ir`: Resolved type model, module syntax model and output records
//! - `extract`: Type qualification, signature rendering, declaration scanning
//! - `resolve`: The resolver boundary (in-memory and JSON dump resolvers)
//! - `build`: Exclusion config, `wrapgen.toml` manifests and the generator
//!
//! # Usage
//!
//! ```rust,ignore
//! use forge_wrapgen::{JsonDumpResolver, WrapperGenerator};
//!
//! let resolver = JsonDumpResolver::from_file("target/store.module.json".as_ref())?;
//! let result = WrapperGenerator::new("github.com/acme/store")
//!     .ignore_file_names(["mock.go"])
//!     .ignore_interface_names(["Internal"])
//!     .generate(&resolver)?;
//!
//! for iface in &result.interfaces {
//!     for m in &iface.methods {
//!         println!("func (w *{}Wrapper) {}({}) ({})", iface.name, m.name, m.params, m.returns);
//!     }
//! }
//! ```

pub mod build;
pub mod error;
pub mod extract;
pub mod ir;
pub mod resolve;
pub mod test;

// Re-export commonly used types
pub use build::{GeneratorConfig, GeneratorManifest, WrapperGenerator};
pub use error::{
    ConfigError, GenerateError, GenerateResult, ModuleLoadError, SignatureIssue,
    SignatureResolutionError,
};
pub use extract::{DeclarationScanner, InterfaceHandle, Qualifier, RenderedSignature, SignatureRenderer};
pub use ir::{
    ChanDir, Diagnostic, GenerationResult, GoType, InterfaceDecl, InterfaceMethod, InterfaceType,
    Method, ModuleBuilder, Package, ResolvedModule, Signature, SyntaxFile, Var,
};
pub use resolve::{JsonDumpResolver, ModuleDump, ModuleResolver, StaticResolver};
