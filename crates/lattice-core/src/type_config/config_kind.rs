use crate::syntax_tree::SyntaxTree;
use crate::type_config::type_predicates;
use crate::type_config::TypeConfig;

/// The single construct kind a [`TypeConfig`] is treated as.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConfigKind {
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl ConfigKind {
    /// Settle on one kind by running the predicate chain once:
    ///
    /// 1. Not a named-SDL config: `None`.
    /// 2. A scalar config: [`ConfigKind::Scalar`].
    /// 3. The config's schema defines a union, interface or input object
    ///    named after the config: that kind.
    /// 4. A config with `resolve_type` but no such definition:
    ///    [`ConfigKind::Interface`].
    /// 5. Otherwise: [`ConfigKind::Object`].
    pub fn classify(config: &TypeConfig) -> Option<Self> {
        if !type_predicates::implements_named_sdl(config) {
            return None;
        }
        if type_predicates::is_scalar_config(config) {
            return Some(Self::Scalar);
        }

        if let Some(tree) = SyntaxTree::from_source(config.schema.as_str()) {
            let outline = tree.outline();
            let name = config.name.as_str();
            if outline.unions.contains_key(name) {
                return Some(Self::Union);
            }
            if outline.interfaces.contains_key(name) {
                return Some(Self::Interface);
            }
            if outline.inputs.contains_key(name) {
                return Some(Self::InputObject);
            }
        }

        // A `resolve_type` with no union definition to match reads as an
        // interface.
        if type_predicates::is_union_config(config) {
            return Some(Self::Interface);
        }
        Some(Self::Object)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::InputObject => "input object",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }
}
