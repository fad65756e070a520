//! Shape checks on a [`TypeConfig`].
//!
//! These overlap: a single config can satisfy several of them. Use
//! [`ConfigKind::classify()`](crate::type_config::ConfigKind::classify) to
//! settle on one kind.

use crate::syntax_tree::SyntaxTree;
use crate::type_config::TypeConfig;

/// Has a non-empty `name` and a non-empty `schema`.
pub fn implements_named_sdl(config: &TypeConfig) -> bool {
    !config.name.trim().is_empty() && !config.schema.trim().is_empty()
}

/// Declares at least one of `queries`, `mutations` or `subscriptions`.
pub fn declares_operations(config: &TypeConfig) -> bool {
    config.queries.is_some() || config.mutations.is_some() || config.subscriptions.is_some()
}

/// Any named-SDL config. When `check_operations` is set the result is also
/// logged alongside whether root operation resolvers are present; their
/// absence never disqualifies a config.
pub fn is_type_config(config: &TypeConfig, check_operations: bool) -> bool {
    let is_type = implements_named_sdl(config);
    if is_type && check_operations && !declares_operations(config) {
        log::trace!(
            "`{}` declares no query, mutation or subscription resolvers.",
            config.name,
        );
    }
    is_type
}

/// A named-SDL config declaring all three of `parse_value`, `parse_literal`
/// and `serialize`.
pub fn is_scalar_config(config: &TypeConfig) -> bool {
    implements_named_sdl(config)
        && config.parse_value.is_some()
        && config.parse_literal.is_some()
        && config.serialize.is_some()
}

/// A type config; `resolve_type` is optional for interfaces.
pub fn is_interface_config(config: &TypeConfig) -> bool {
    is_type_config(config, false)
}

/// A named-SDL config declaring `resolve_type`.
pub fn is_union_config(config: &TypeConfig) -> bool {
    implements_named_sdl(config) && config.resolve_type.is_some()
}

/// Whether `config` stands for the type named `type_name`.
///
/// The shallow check compares names. With `deep` set, the config's schema is
/// parsed and `type_name` is looked up among its types, enums, interfaces,
/// unions and scalars; an unparsable schema represents nothing.
pub fn represents_type(config: &TypeConfig, type_name: &str, deep: bool) -> bool {
    if !deep {
        return config.name == type_name;
    }
    SyntaxTree::from_source(config.schema.as_str())
        .is_some_and(|tree| tree.outline().defines(type_name))
}
