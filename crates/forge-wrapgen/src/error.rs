//! Error types
//!
//! A generation run is all-or-nothing: every stage returns its error
//! unchanged and no partial [`GenerationResult`](crate::ir::GenerationResult)
//! is ever produced.

use crate::ir::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for generation runs
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Main error type for a generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The module could not be loaded
    #[error(transparent)]
    ModuleLoad(#[from] ModuleLoadError),

    /// A method type is not a usable signature
    #[error(transparent)]
    SignatureResolution(#[from] SignatureResolutionError),

    /// An interface embeds a type that is not an interface
    #[error("interface {interface} embeds {embedded}, which does not resolve to an interface")]
    EmbeddedInterface { interface: String, embedded: String },
}

/// The resolver could not produce a usable module
#[derive(Debug, Error)]
pub enum ModuleLoadError {
    /// No module was returned for the path
    #[error("failed to load module {path}: no module found")]
    NotFound { path: String },

    /// The module was returned with load or type-check diagnostics
    #[error("failed to load module {path}: {}", join_diagnostics(.diagnostics))]
    Diagnostics {
        path: String,
        diagnostics: Vec<Diagnostic>,
    },

    /// A module dump could not be read
    #[error("failed to read module dump {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A module dump is not valid JSON for the module model
    #[error("failed to parse module dump: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Why a method type could not be used as a signature
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureIssue {
    /// The method type is not a function signature
    #[error("expected a signature, found {0} type")]
    NotASignature(&'static str),

    /// The signature is variadic but declares no parameters
    #[error("variadic signature has no parameters")]
    VariadicWithoutParams,

    /// The variadic parameter's type is not a slice
    #[error("variadic parameter {name} has non-slice type {ty}")]
    VariadicNotSlice { name: String, ty: String },
}

/// A discovered interface method could not be rendered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid method type for {interface}.{method}: {issue}")]
pub struct SignatureResolutionError {
    pub interface: String,
    pub method: String,
    #[source]
    pub issue: SignatureIssue,
}

/// Errors loading a generator manifest
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The manifest could not be read
    #[error("failed to read manifest at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid TOML for the manifest model
    #[error("failed to parse manifest at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
