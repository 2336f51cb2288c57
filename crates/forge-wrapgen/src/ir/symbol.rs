//! Symbol metadata for discovered interfaces
//!
//! These records are the output of a generation run. Every field is already
//! rendered source text so a wrapper template only has to substitute strings.

use serde::{Deserialize, Serialize};

/// One interface method, rendered for a forwarding wrapper
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Method {
    /// Method name
    pub name: String,
    /// Parameter declarations (e.g., "ctx context.Context, keys ...string")
    pub params: String,
    /// Forwarding call arguments (e.g., "ctx, keys...")
    pub args: String,
    /// Result types (e.g., "[]string, error"), empty when nothing is returned
    #[serde(rename = "return")]
    pub returns: String,
}

impl Method {
    /// Create a new method record
    pub fn new(
        name: impl Into<String>,
        params: impl Into<String>,
        args: impl Into<String>,
        returns: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            args: args.into(),
            returns: returns.into(),
        }
    }

    /// Whether the method returns anything
    pub fn has_results(&self) -> bool {
        !self.returns.is_empty()
    }
}

/// A discovered interface and its methods
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceDecl {
    /// Interface name, unique within the module
    pub name: String,
    /// Methods in method-set order
    pub methods: Vec<Method>,
}

impl InterfaceDecl {
    /// Create an interface record without methods
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Set methods
    pub fn with_methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = methods;
        self
    }

    /// Look up a method by name
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// The result of a generation run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Short name of the analyzed module
    pub package_name: String,
    /// Interfaces in discovery order
    pub interfaces: Vec<InterfaceDecl>,
}

impl GenerationResult {
    /// Create a result
    pub fn new(package_name: impl Into<String>, interfaces: Vec<InterfaceDecl>) -> Self {
        Self {
            package_name: package_name.into(),
            interfaces,
        }
    }

    /// Look up an interface by name
    pub fn interface(&self, name: &str) -> Option<&InterfaceDecl> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    /// Interface names in discovery order
    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces.iter().map(|i| i.name.as_str()).collect()
    }

    /// Serialize for a renderer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_results() {
        assert!(Method::new("Close", "", "", "error").has_results());
        assert!(!Method::new("Reset", "", "", "").has_results());
    }

    #[test]
    fn test_result_lookup() {
        let result = GenerationResult::new(
            "store",
            vec![
                InterfaceDecl::new("Store")
                    .with_methods(vec![Method::new("Close", "", "", "error")]),
                InterfaceDecl::new("Cache"),
            ],
        );

        assert_eq!(result.interface_names(), vec!["Store", "Cache"]);
        assert!(result.interface("Store").unwrap().method("Close").is_some());
        assert!(result.interface("Missing").is_none());
    }

    #[test]
    fn test_json_uses_return_key() {
        let result = GenerationResult::new(
            "store",
            vec![InterfaceDecl::new("Store")
                .with_methods(vec![Method::new("Close", "", "", "error")])],
        );
        let json = result.to_json().unwrap();
        assert!(json.contains("\"return\": \"error\""));
        assert!(json.contains("\"package_name\": \"store\""));

        let back: GenerationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
