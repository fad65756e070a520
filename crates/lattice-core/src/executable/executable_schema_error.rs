use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecutableSchemaError {
    #[error("The `{type_name}.{field_name}` field declares the `{argument_name}` argument more than once")]
    DuplicateArgumentDefinition {
        argument_name: String,
        field_name: String,
        type_name: String,
    },

    #[error("The `{type_name}` enum declares the `{value_name}` value more than once")]
    DuplicateEnumValueDefinition {
        type_name: String,
        value_name: String,
    },

    #[error("The `{type_name}` type declares the `{field_name}` field more than once")]
    DuplicateFieldDefinition {
        field_name: String,
        type_name: String,
    },

    #[error("Only one `schema` definition may be provided")]
    DuplicateSchemaDefinition,

    #[error("The `{type_name}` type is defined more than once")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
    },

    #[error(
        "The `{type_name}` type is defined as {defined_kind} but extended as \
        {extension_kind}"
    )]
    ExtensionKindMismatch {
        defined_kind: &'static str,
        extension_kind: &'static str,
        type_name: String,
    },

    #[error("The `{type_name}` type implements `{implemented_type_name}`, which is not an interface")]
    ImplementsNonInterfaceType {
        implemented_type_name: String,
        type_name: String,
    },

    #[error(
        "Type names starting with `__` are reserved for introspection: \
        `{type_name}`"
    )]
    InvalidDunderPrefixedTypeName {
        type_name: String,
    },

    #[error(
        "`{location}` must have an input type, but `{type_name}` is {kind}"
    )]
    InvalidInputPositionType {
        kind: &'static str,
        location: String,
        type_name: String,
    },

    #[error("The `{union_name}` union includes `{member_name}`, which is not an object type")]
    NonObjectUnionMember {
        member_name: String,
        union_name: String,
    },

    #[error(
        "The {operation} root operation type `{type_name}` is {kind}, but root \
        operation types must be object types"
    )]
    RootOperationTypeNotObject {
        kind: &'static str,
        operation: &'static str,
        type_name: String,
    },

    #[error("The {operation} root operation type `{type_name}` is not defined")]
    UndefinedRootOperationType {
        operation: &'static str,
        type_name: String,
    },

    #[error("`{location}` references the `{type_name}` type, which is not defined")]
    UndefinedTypeReference {
        location: String,
        type_name: String,
    },

    #[error("The `{type_name}` type has no `{field_name}` field")]
    UnknownField {
        field_name: String,
        type_name: String,
    },

    #[error("No type named `{type_name}` exists in the schema")]
    UnknownType {
        type_name: String,
    },

    #[error("Expected `{type_name}` to be {expected}, but it is {found}")]
    UnexpectedTypeKind {
        expected: &'static str,
        found: &'static str,
        type_name: String,
    },
}
