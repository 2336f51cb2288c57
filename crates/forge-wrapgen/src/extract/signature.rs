//! Signature rendering
//!
//! Turns a method signature into the three strings a forwarding wrapper
//! needs:
//!
//! | Method | params | args | return |
//! |--------|--------|------|--------|
//! | `M(a T1, b T2) (R1, R2)` | `a T1, b T2` | `a, b` | `R1, R2` |
//! | `M(a T1, rest ...T2) error` | `a T1, rest ...T2` | `a, rest...` | `error` |
//! | `M()` | | | |
//!
//! Unnamed and blank (`_`) parameters are given positional names (`arg0`,
//! `arg1`, ...) so the forwarding call can refer to them. A positional name
//! already declared by another parameter gets a `_1`, `_2`, ... suffix.

use crate::error::{SignatureIssue, SignatureResolutionError};
use crate::extract::Qualifier;
use crate::ir::{GoType, InterfaceMethod, Signature, Var};
use std::collections::HashSet;

/// Rendered parameter, argument and result lists of one method
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedSignature {
    pub params: String,
    pub args: String,
    pub returns: String,
}

/// Renders method signatures through a [`Qualifier`]
#[derive(Debug, Clone, Copy)]
pub struct SignatureRenderer<'a> {
    qualifier: Qualifier<'a>,
}

impl<'a> SignatureRenderer<'a> {
    /// Create a renderer for code generated inside the qualifier's module
    pub fn new(qualifier: Qualifier<'a>) -> Self {
        Self { qualifier }
    }

    /// Render a method of `interface`
    pub fn render(
        &self,
        interface: &str,
        method: &InterfaceMethod,
    ) -> Result<RenderedSignature, SignatureResolutionError> {
        let fail = |issue| SignatureResolutionError {
            interface: interface.to_string(),
            method: method.name.clone(),
            issue,
        };

        let sig = method
            .signature()
            .ok_or_else(|| fail(SignatureIssue::NotASignature(method.ty.kind_name())))?;

        let params = self.params(sig).map_err(fail)?;
        Ok(RenderedSignature {
            params: join(params.iter().map(|p| format!("{} {}", p.name, p.ty))),
            args: join(params.iter().map(|p| {
                if p.variadic {
                    format!("{}...", p.name)
                } else {
                    p.name.clone()
                }
            })),
            returns: self.returns(sig),
        })
    }

    fn params(&self, sig: &Signature) -> Result<Vec<RenderedParam>, SignatureIssue> {
        if sig.variadic && sig.params.is_empty() {
            return Err(SignatureIssue::VariadicWithoutParams);
        }

        let mut taken: HashSet<String> = sig
            .params
            .iter()
            .map(|var| declared_name(&var.name))
            .filter(|name| !is_blank(name))
            .collect();

        let last = sig.params.len().saturating_sub(1);
        let mut params = Vec::with_capacity(sig.params.len());
        for (i, var) in sig.params.iter().enumerate() {
            let name = param_name(i, &declared_name(&var.name), &mut taken);
            let param = if sig.variadic && i == last {
                self.variadic_param(name, var)?
            } else {
                RenderedParam {
                    name,
                    ty: self.qualifier.render(&var.ty),
                    variadic: false,
                }
            };
            params.push(param);
        }
        Ok(params)
    }

    fn variadic_param(&self, name: String, var: &Var) -> Result<RenderedParam, SignatureIssue> {
        match &var.ty {
            GoType::Slice { elem } => Ok(RenderedParam {
                name,
                ty: format!("...{}", self.qualifier.render(elem)),
                variadic: true,
            }),
            other => Err(SignatureIssue::VariadicNotSlice {
                name: var.name.clone(),
                ty: self.qualifier.render(other),
            }),
        }
    }

    fn returns(&self, sig: &Signature) -> String {
        join(sig.results.iter().map(|r| self.qualifier.render(&r.ty)))
    }
}

struct RenderedParam {
    name: String,
    ty: String,
    variadic: bool,
}

fn declared_name(name: &str) -> String {
    name.replace("[]", "")
}

fn is_blank(name: &str) -> bool {
    name.is_empty() || name == "_"
}

/// Positional names skip anything already declared in the signature.
fn param_name(index: usize, name: &str, taken: &mut HashSet<String>) -> String {
    if !is_blank(name) {
        return name.to_string();
    }

    let base = format!("arg{}", index);
    let mut candidate = base.clone();
    let mut suffix = 0;
    while taken.contains(&candidate) {
        suffix += 1;
        candidate = format!("{}_{}", base, suffix);
    }
    taken.insert(candidate.clone());
    candidate
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(", ")
}
