use crate::ast;

/// The discriminant of a top-level [`ast::schema::Definition`].
///
/// Merging only combines definitions of the same kind; a type extension is
/// a different kind than the type it extends.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionKind {
    Directive,
    Enum,
    EnumExtension,
    InputObject,
    InputObjectExtension,
    Interface,
    InterfaceExtension,
    Object,
    ObjectExtension,
    Scalar,
    ScalarExtension,
    Schema,
    Union,
    UnionExtension,
}
impl DefinitionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directive => "DirectiveDefinition",
            Self::Enum => "EnumTypeDefinition",
            Self::EnumExtension => "EnumTypeExtension",
            Self::InputObject => "InputObjectTypeDefinition",
            Self::InputObjectExtension => "InputObjectTypeExtension",
            Self::Interface => "InterfaceTypeDefinition",
            Self::InterfaceExtension => "InterfaceTypeExtension",
            Self::Object => "ObjectTypeDefinition",
            Self::ObjectExtension => "ObjectTypeExtension",
            Self::Scalar => "ScalarTypeDefinition",
            Self::ScalarExtension => "ScalarTypeExtension",
            Self::Schema => "SchemaDefinition",
            Self::Union => "UnionTypeDefinition",
            Self::UnionExtension => "UnionTypeExtension",
        }
    }
}
impl std::convert::From<&ast::schema::Definition> for DefinitionKind {
    fn from(value: &ast::schema::Definition) -> Self {
        match value {
            ast::schema::Definition::DirectiveDefinition(_) => Self::Directive,
            ast::schema::Definition::SchemaDefinition(_) => Self::Schema,
            ast::schema::Definition::TypeDefinition(def) => match def {
                ast::schema::TypeDefinition::Enum(_) => Self::Enum,
                ast::schema::TypeDefinition::InputObject(_) => Self::InputObject,
                ast::schema::TypeDefinition::Interface(_) => Self::Interface,
                ast::schema::TypeDefinition::Object(_) => Self::Object,
                ast::schema::TypeDefinition::Scalar(_) => Self::Scalar,
                ast::schema::TypeDefinition::Union(_) => Self::Union,
            },
            ast::schema::Definition::TypeExtension(ext) => match ext {
                ast::schema::TypeExtension::Enum(_) => Self::EnumExtension,
                ast::schema::TypeExtension::InputObject(_) => Self::InputObjectExtension,
                ast::schema::TypeExtension::Interface(_) => Self::InterfaceExtension,
                ast::schema::TypeExtension::Object(_) => Self::ObjectExtension,
                ast::schema::TypeExtension::Scalar(_) => Self::ScalarExtension,
                ast::schema::TypeExtension::Union(_) => Self::UnionExtension,
            },
        }
    }
}
impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
