//! WrapperGenerator: drives a generation run
//!
//! A run loads the module through a [`ModuleResolver`], scans it for
//! interface declarations and renders every method of every interface. Any
//! failure aborts the run; nothing is retried and no partial result is
//! returned.

use crate::build::{GeneratorConfig, GeneratorManifest};
use crate::error::{ConfigError, GenerateError, GenerateResult, ModuleLoadError};
use crate::extract::{DeclarationScanner, InterfaceHandle, Qualifier, SignatureRenderer};
use crate::ir::{GenerationResult, InterfaceDecl, Method, ResolvedModule};
use crate::resolve::ModuleResolver;
use std::path::Path;
use tracing::debug;

/// Generator for the wrapper description of one module
///
/// # Example
/// ```
/// use forge_wrapgen::{StaticResolver, WrapperGenerator};
///
/// let resolver = StaticResolver::new().with_module(forge_wrapgen::test::example_module());
/// let result = WrapperGenerator::new(forge_wrapgen::test::EXAMPLE_MODULE_PATH)
///     .ignore_file_names(["example_mock.go"])
///     .generate(&resolver)
///     .expect("example module generates");
///
/// assert_eq!(result.package_name, "example");
/// assert_eq!(result.interface_names(), vec!["TestInterface"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperGenerator {
    module_path: String,
    config: GeneratorConfig,
}

impl WrapperGenerator {
    /// Create a generator for `module_path` with no exclusions
    pub fn new(module_path: impl Into<String>) -> Self {
        Self {
            module_path: module_path.into(),
            config: GeneratorConfig::default(),
        }
    }

    /// Create a generator from a `wrapgen.toml` manifest
    pub fn from_manifest(path: &Path) -> Result<Self, ConfigError> {
        let manifest = GeneratorManifest::from_file(path)?;
        Ok(Self::new(manifest.module).with_config(manifest.exclude))
    }

    /// Replace the exclusion rules
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Skip every declaration in files with these base names
    pub fn ignore_file_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config = self.config.ignore_file_names(names);
        self
    }

    /// Skip interfaces with these names
    pub fn ignore_interface_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config = self.config.ignore_interface_names(names);
        self
    }

    /// Path of the module this generator analyzes
    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    /// Exclusion rules in effect
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the generator
    pub fn generate<R>(&self, resolver: &R) -> GenerateResult<GenerationResult>
    where
        R: ModuleResolver + ?Sized,
    {
        debug!(module = %self.module_path, "wrapgen.generate");

        let module = self.load_module(resolver)?;
        let handles = DeclarationScanner::new(&self.config).scan(&module);

        let qualifier = Qualifier::new(&module.name);
        let renderer = SignatureRenderer::new(qualifier);
        let interfaces = handles
            .iter()
            .map(|handle| self.parse_interface(&renderer, handle))
            .collect::<GenerateResult<Vec<_>>>()?;

        debug!(
            module = %self.module_path,
            package = %module.name,
            interfaces = interfaces.len(),
            "wrapgen.generate complete"
        );

        Ok(GenerationResult::new(module.name.clone(), interfaces))
    }

    fn load_module<R>(&self, resolver: &R) -> Result<ResolvedModule, ModuleLoadError>
    where
        R: ModuleResolver + ?Sized,
    {
        let modules = resolver.load(&self.module_path)?;

        if modules.iter().any(ResolvedModule::has_errors) {
            return Err(ModuleLoadError::Diagnostics {
                path: self.module_path.clone(),
                diagnostics: modules
                    .iter()
                    .flat_map(|m| m.diagnostics.iter().cloned())
                    .collect(),
            });
        }

        modules
            .into_iter()
            .next()
            .ok_or_else(|| ModuleLoadError::NotFound {
                path: self.module_path.clone(),
            })
    }

    fn parse_interface(
        &self,
        renderer: &SignatureRenderer<'_>,
        handle: &InterfaceHandle<'_>,
    ) -> GenerateResult<InterfaceDecl> {
        let method_set =
            handle
                .interface
                .method_set()
                .map_err(|embedded| GenerateError::EmbeddedInterface {
                    interface: handle.name.to_string(),
                    embedded: embedded.to_string(),
                })?;

        let methods = method_set
            .into_iter()
            .map(|method| -> GenerateResult<Method> {
                let rendered = renderer.render(handle.name, method)?;
                Ok(Method::new(
                    method.name.clone(),
                    rendered.params,
                    rendered.args,
                    rendered.returns,
                ))
            })
            .collect::<GenerateResult<Vec<_>>>()?;

        debug!(
            interface = %handle.name,
            file = %handle.file,
            methods = methods.len(),
            "wrapgen.interface"
        );

        Ok(InterfaceDecl::new(handle.name).with_methods(methods))
    }
}
