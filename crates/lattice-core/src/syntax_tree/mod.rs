mod definition_kind;
mod merge;
mod search;
mod strictness;
#[allow(clippy::module_inception)]
mod syntax_tree;
mod syntax_tree_error;
mod syntax_tree_source;

pub use definition_kind::DefinitionKind;
pub use search::FieldMeta;
pub use search::find_in_array_by_name;
pub use search::FoundEnumValue;
pub use search::FoundField;
pub use search::FoundInputField;
pub use search::HasName;
pub use strictness::Strictness;
pub use syntax_tree::SyntaxTree;
pub use syntax_tree_error::SyntaxTreeError;
pub use syntax_tree_source::SyntaxTreeSource;

/// The root type [`SyntaxTree::consume_query()`] moves between trees.
pub const DEFAULT_CONSUMED_DEFINITION: &str = "Query";

#[cfg(test)]
mod tests;
