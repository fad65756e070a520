mod executable_schema;
mod executable_schema_builder;
mod executable_schema_error;
mod executable_type;
mod named_ref;
mod root_operation_types;

pub use executable_schema::ExecutableSchema;
pub use executable_schema::BUILTIN_SCALAR_NAMES;
pub use executable_schema_error::ExecutableSchemaError;
pub use executable_type::EnumType;
pub use executable_type::ExecutableField;
pub use executable_type::ExecutableType;
pub use executable_type::InputObjectType;
pub use executable_type::InterfaceType;
pub use executable_type::ObjectOrInterfaceType;
pub use executable_type::ObjectType;
pub use executable_type::ScalarType;
pub use executable_type::UnionType;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use root_operation_types::RootOperationTypes;

pub type NamedTypeRef = NamedRef<ExecutableSchema, ExecutableType>;

#[cfg(test)]
mod tests;
