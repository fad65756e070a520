//! Callback types attached to an
//! [`ExecutableSchema`](crate::executable::ExecutableSchema).
//!
//! These are opaque to this crate: nothing here executes operations. They
//! exist so a [`TypeConfig`](crate::TypeConfig) can carry functions that an
//! execution engine later pulls back out of the compiled schema.

use crate::ast;
use indexmap::IndexMap;
use std::sync::Arc;
use thiserror::Error;

pub type ResolverResult = Result<ast::query::Value, ResolverError>;

#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct ResolverError {
    message: String,
}
impl ResolverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Everything a field [`Resolver`] is handed when it is invoked.
#[derive(Debug)]
pub struct ResolverContext<'a> {
    pub args: &'a IndexMap<String, ast::query::Value>,
    pub field_name: &'a str,
    pub parent: Option<&'a ast::query::Value>,
    pub type_name: &'a str,
}

type ResolverFn = dyn Fn(&ResolverContext<'_>) -> ResolverResult + Send + Sync;
type CoercerFn = dyn Fn(&ast::query::Value) -> ResolverResult + Send + Sync;
type TypeResolverFn = dyn Fn(&ast::query::Value) -> Option<String> + Send + Sync;

/// Produces the value of one field.
#[derive(Clone)]
pub struct Resolver(Arc<ResolverFn>);
impl Resolver {
    pub fn new<F>(resolve: F) -> Self
    where
        F: Fn(&ResolverContext<'_>) -> ResolverResult + Send + Sync + 'static,
    {
        Self(Arc::new(resolve))
    }

    pub fn resolve(&self, ctx: &ResolverContext<'_>) -> ResolverResult {
        (self.0)(ctx)
    }
}
impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Resolver(..)")
    }
}

/// One of a custom scalar's `parse_value`, `parse_literal` or `serialize`
/// functions.
#[derive(Clone)]
pub struct ScalarCoercer(Arc<CoercerFn>);
impl ScalarCoercer {
    pub fn new<F>(coerce: F) -> Self
    where
        F: Fn(&ast::query::Value) -> ResolverResult + Send + Sync + 'static,
    {
        Self(Arc::new(coerce))
    }

    pub fn coerce(&self, value: &ast::query::Value) -> ResolverResult {
        (self.0)(value)
    }
}
impl std::fmt::Debug for ScalarCoercer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ScalarCoercer(..)")
    }
}

/// Picks the concrete object type name for a value of an interface or union
/// type.
#[derive(Clone)]
pub struct TypeResolver(Arc<TypeResolverFn>);
impl TypeResolver {
    pub fn new<F>(resolve_type: F) -> Self
    where
        F: Fn(&ast::query::Value) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(resolve_type))
    }

    pub fn resolve_type(&self, value: &ast::query::Value) -> Option<String> {
        (self.0)(value)
    }
}
impl std::fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TypeResolver(..)")
    }
}
