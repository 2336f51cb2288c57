//! Generator configuration and orchestration
//!
//! This module provides:
//! - `GeneratorConfig` exclusion rules and the TOML `GeneratorManifest`
//! - `WrapperGenerator`, which drives a whole generation run

pub mod config;
pub mod generator;

pub use config::{GeneratorConfig, GeneratorManifest};
pub use generator::WrapperGenerator;
