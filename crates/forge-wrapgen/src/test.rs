//! Test fixtures for forge-wrapgen.
//!
//! Builds the example module used across the crate's tests and docs: a
//! package `example` declaring
//!
//! ```go
//! type TestInterface interface {
//!     TestMethod(ctx context.Context, slice []int64, testMap map[string]context.Context, points ...string) ([]string, error)
//!     TestMethod2(ctx context.Context) error
//! }
//! ```
//!
//! plus a `MockedInterface` in `example_mock.go`. The same module is
//! available as a JSON dump in `fixtures/example.module.json`.

use crate::ir::{
    GoType, InterfaceMethod, InterfaceType, ModuleBuilder, Package, ResolvedModule, Signature, Var,
};

/// Import path of the example module
pub const EXAMPLE_MODULE_PATH: &str = "github.com/acme/wrappers/example";

const EXAMPLE_DIR: &str = "/src/github.com/acme/wrappers/example";

/// The standard library `context` package.
pub fn context_package() -> Package {
    Package::new("context", "context")
}

/// `context.Context`
pub fn context_type() -> GoType {
    GoType::named(context_package(), "Context")
}

/// The interface type of `TestInterface`.
pub fn test_interface() -> InterfaceType {
    InterfaceType::new(vec![
        InterfaceMethod::new(
            "TestMethod",
            Signature::new(
                vec![
                    Var::new("ctx", context_type()),
                    Var::new("slice", GoType::slice(GoType::basic("int64"))),
                    Var::new("testMap", GoType::map(GoType::basic("string"), context_type())),
                    Var::new("points", GoType::slice(GoType::basic("string"))),
                ],
                vec![
                    Var::unnamed(GoType::slice(GoType::basic("string"))),
                    Var::unnamed(GoType::error()),
                ],
            )
            .variadic(),
        ),
        InterfaceMethod::new(
            "TestMethod2",
            Signature::new(
                vec![Var::new("ctx", context_type())],
                vec![Var::unnamed(GoType::error())],
            ),
        ),
    ])
}

/// The example module.
pub fn example_module() -> ResolvedModule {
    let example_go = format!("{}/example.go", EXAMPLE_DIR);
    let mock_go = format!("{}/example_mock.go", EXAMPLE_DIR);

    ModuleBuilder::new(EXAMPLE_MODULE_PATH, "example")
        .import(&example_go, "context")
        .interface_decl(&example_go, "TestInterface", test_interface())
        .interface_decl(
            &mock_go,
            "MockedInterface",
            InterfaceType::new(vec![InterfaceMethod::new("Reset", Signature::default())]),
        )
        .func_decl(&mock_go, "NewMock")
        .build()
}
