//! Owned (`'static, String`) aliases over the `graphql_parser` AST, plus the
//! parse/print capability every other module goes through.

pub mod query {
    pub type Value = graphql_parser::query::Value<'static, String>;
}

pub mod schema {
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type EnumTypeExtension = graphql_parser::schema::EnumTypeExtension<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputObjectTypeExtension = graphql_parser::schema::InputObjectTypeExtension<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
    pub type InterfaceTypeExtension = graphql_parser::schema::InterfaceTypeExtension<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type ObjectTypeExtension = graphql_parser::schema::ObjectTypeExtension<'static, String>;
    pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
    pub type ScalarTypeExtension = graphql_parser::schema::ScalarTypeExtension<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type UnionType = graphql_parser::schema::UnionType<'static, String>;
    pub type UnionTypeExtension = graphql_parser::schema::UnionTypeExtension<'static, String>;
}

/// A [`schema::Document`] with no definitions.
pub fn empty_document() -> schema::Document {
    schema::Document {
        definitions: vec![],
    }
}

/// Parse IDL text into an owned [`schema::Document`].
///
/// `graphql_parser` rejects a document without any definitions, but an empty
/// (or whitespace-only) fragment is a legitimate seed for merging, so that
/// case yields [`empty_document()`] instead of an error.
pub fn parse(sdl: &str) -> Result<schema::Document, schema::ParseError> {
    if sdl.trim().is_empty() {
        return Ok(empty_document());
    }
    Ok(graphql_parser::schema::parse_schema::<String>(sdl)?.into_static())
}

/// Print a [`schema::Document`] back to IDL text.
///
/// Printing never fails, but nothing guarantees the output is valid IDL if
/// the document was edited by hand. Use
/// [`SyntaxTree::to_sdl()`](crate::SyntaxTree::to_sdl) for a checked
/// round-trip.
pub fn print(doc: &schema::Document) -> String {
    doc.to_string()
}

/// The name of a top-level definition, or `None` for a `schema { ... }`
/// definition.
pub fn definition_name(def: &schema::Definition) -> Option<&str> {
    match def {
        schema::Definition::SchemaDefinition(_) => None,
        schema::Definition::DirectiveDefinition(def) => Some(def.name.as_str()),
        schema::Definition::TypeDefinition(def) => Some(type_definition_name(def)),
        schema::Definition::TypeExtension(ext) => Some(type_extension_name(ext)),
    }
}

pub fn type_definition_name(def: &schema::TypeDefinition) -> &str {
    match def {
        schema::TypeDefinition::Enum(t) => t.name.as_str(),
        schema::TypeDefinition::InputObject(t) => t.name.as_str(),
        schema::TypeDefinition::Interface(t) => t.name.as_str(),
        schema::TypeDefinition::Object(t) => t.name.as_str(),
        schema::TypeDefinition::Scalar(t) => t.name.as_str(),
        schema::TypeDefinition::Union(t) => t.name.as_str(),
    }
}

pub fn type_extension_name(ext: &schema::TypeExtension) -> &str {
    match ext {
        schema::TypeExtension::Enum(t) => t.name.as_str(),
        schema::TypeExtension::InputObject(t) => t.name.as_str(),
        schema::TypeExtension::Interface(t) => t.name.as_str(),
        schema::TypeExtension::Object(t) => t.name.as_str(),
        schema::TypeExtension::Scalar(t) => t.name.as_str(),
        schema::TypeExtension::Union(t) => t.name.as_str(),
    }
}
