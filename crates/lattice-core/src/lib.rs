//! Merge independently-authored GraphQL schema fragments into one document,
//! project and query its structure, and assemble it (plus per-type resolver
//! configs) into an [`ExecutableSchema`](executable::ExecutableSchema).

pub mod ast;
pub mod executable;
mod name_matcher;
mod operation_kind;
pub mod outline;
pub mod resolver;
pub mod schema_factory;
pub mod syntax_tree;
pub mod type_config;
mod type_ref;

pub use name_matcher::NameMatcher;
pub use operation_kind::OperationKind;
pub use outline::Outline;
pub use schema_factory::assemble_schema;
pub use schema_factory::FactoryParsingError;
pub use syntax_tree::SyntaxTree;
pub use syntax_tree::SyntaxTreeError;
pub use type_config::TypeConfig;
pub use type_ref::MAX_TYPE_WRAPPER_DEPTH;
pub use type_ref::read_type;
pub use type_ref::TypeRef;
