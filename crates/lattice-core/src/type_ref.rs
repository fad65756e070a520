use crate::ast;

/// The deepest wrapper nesting [`read_type()`] can see through.
///
/// Unwrapping follows a fixed schedule of at most this many wrappers:
/// an optional non-null, then an optional list, then an optional non-null
/// (so `T`, `T!`, `[T]`, `[T!]`, `[T]!` and `[T!]!` all resolve). Anything
/// nested deeper (e.g. `[[T]]`) yields a `base_type_name` of `None`.
pub const MAX_TYPE_WRAPPER_DEPTH: usize = 3;

#[derive(Clone, Copy, Debug)]
enum Wrapper {
    List,
    NonNull,
}

const UNWRAP_SCHEDULE: [Wrapper; MAX_TYPE_WRAPPER_DEPTH] = [
    Wrapper::NonNull,
    Wrapper::List,
    Wrapper::NonNull,
];

/// A flattened summary of a (possibly wrapped) type annotation.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct TypeRef {
    /// `true` iff the outermost wrapper is non-null.
    pub required: bool,

    /// `true` iff the outermost wrapper, or the wrapper just inside an
    /// outermost non-null, is a list.
    pub array: bool,

    /// The innermost named type, or `None` when the annotation is nested
    /// deeper than [`MAX_TYPE_WRAPPER_DEPTH`] allows.
    pub base_type_name: Option<String>,
}
impl TypeRef {
    pub fn base_type_name(&self) -> Option<&str> {
        self.base_type_name.as_deref()
    }

    pub fn nullable(&self) -> bool {
        !self.required
    }
}

/// Summarize a type annotation as a [`TypeRef`].
pub fn read_type(ty: &ast::schema::Type) -> TypeRef {
    let mut required = false;
    let mut array = false;
    let mut current = ty;

    for (depth, wrapper) in UNWRAP_SCHEDULE.iter().enumerate() {
        match (wrapper, current) {
            (Wrapper::NonNull, ast::schema::Type::NonNullType(inner)) => {
                if depth == 0 {
                    required = true;
                }
                current = inner;
            },

            (Wrapper::List, ast::schema::Type::ListType(inner)) => {
                array = true;
                current = inner;
            },

            _ => (),
        }
    }

    let base_type_name = match current {
        ast::schema::Type::NamedType(name) => Some(name.to_string()),
        ast::schema::Type::ListType(_)
            | ast::schema::Type::NonNullType(_) => None,
    };

    TypeRef {
        required,
        array,
        base_type_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ast::schema::Type {
        ast::schema::Type::NamedType(name.to_string())
    }

    fn list(inner: ast::schema::Type) -> ast::schema::Type {
        ast::schema::Type::ListType(Box::new(inner))
    }

    fn non_null(inner: ast::schema::Type) -> ast::schema::Type {
        ast::schema::Type::NonNullType(Box::new(inner))
    }

    #[test]
    fn bare_named_type() {
        let type_ref = read_type(&named("String"));
        assert!(!type_ref.required);
        assert!(!type_ref.array);
        assert_eq!(type_ref.base_type_name(), Some("String"));
    }

    #[test]
    fn non_null_named_type() {
        let type_ref = read_type(&non_null(named("String")));
        assert!(type_ref.required);
        assert!(!type_ref.array);
        assert_eq!(type_ref.base_type_name(), Some("String"));
    }

    #[test]
    fn non_null_list_of_non_null() {
        let type_ref = read_type(&non_null(list(non_null(named("ID")))));
        assert!(type_ref.required);
        assert!(type_ref.array);
        assert_eq!(type_ref.base_type_name(), Some("ID"));
    }

    #[test]
    fn nullable_list_of_non_null() {
        let type_ref = read_type(&list(non_null(named("Int"))));
        assert!(!type_ref.required);
        assert!(type_ref.array);
        assert_eq!(type_ref.base_type_name(), Some("Int"));
    }

    #[test]
    fn non_null_list_of_nullable() {
        let type_ref = read_type(&non_null(list(named("Float"))));
        assert!(type_ref.required);
        assert!(type_ref.array);
        assert_eq!(type_ref.base_type_name(), Some("Float"));
    }

    #[test]
    fn nesting_past_the_bound_is_unknown() {
        let type_ref = read_type(&list(list(named("String"))));
        assert!(type_ref.array);
        assert_eq!(type_ref.base_type_name(), None);

        let type_ref = read_type(&non_null(list(non_null(list(named("String"))))));
        assert!(type_ref.required);
        assert_eq!(type_ref.base_type_name(), None);
    }
}
