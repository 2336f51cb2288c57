//! Interface discovery and signature extraction
//!
//! This module provides the three stages of a generation run below the
//! orchestrator:
//! - Declaration scanning (interface-typed declarations, exclusion filters)
//! - Signature rendering (parameter, argument and result strings)
//! - Type-name qualification relative to the analyzed module

pub mod qualify;
pub mod scan;
pub mod signature;

pub use qualify::Qualifier;
pub use scan::{DeclarationScanner, InterfaceHandle};
pub use signature::{RenderedSignature, SignatureRenderer};
