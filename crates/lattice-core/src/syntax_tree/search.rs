use crate::ast;
use crate::name_matcher::NameMatcher;
use crate::syntax_tree::SyntaxTree;
use crate::type_ref::read_type;

/// Implemented by AST nodes that [`find_in_array_by_name()`] can search.
pub trait HasName {
    fn name(&self) -> Option<&str>;
}
impl HasName for ast::schema::Definition {
    fn name(&self) -> Option<&str> {
        ast::definition_name(self)
    }
}
impl HasName for ast::schema::TypeDefinition {
    fn name(&self) -> Option<&str> {
        Some(ast::type_definition_name(self))
    }
}
impl HasName for ast::schema::Field {
    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }
}
impl HasName for ast::schema::InputValue {
    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }
}
impl HasName for ast::schema::EnumValue {
    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }
}

/// The first item in `items` whose name satisfies `matcher`.
pub fn find_in_array_by_name<'a, T: HasName>(
    items: &'a [T],
    matcher: &NameMatcher,
) -> Option<&'a T> {
    items.iter().find(|item| item.name().is_some_and(|name| matcher.matches(name)))
}

/// A quick description of a field found by [`SyntaxTree::find_field()`].
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct FieldMeta {
    pub name: String,
    /// Base type name (see [`read_type()`](crate::read_type)).
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// `false` iff the field's outermost type wrapper is non-null.
    pub nullable: bool,
}
impl FieldMeta {
    fn from_type(name: &str, ty: &ast::schema::Type) -> Self {
        Self {
            name: name.to_string(),
            type_name: read_type(ty).base_type_name,
            nullable: !matches!(ty, ast::schema::Type::NonNullType(_)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FoundField<'a> {
    pub definition: &'a ast::schema::TypeDefinition,
    pub field: &'a ast::schema::Field,
    pub meta: FieldMeta,
}

#[derive(Clone, Debug)]
pub struct FoundInputField<'a> {
    pub definition: &'a ast::schema::InputObjectType,
    pub field: &'a ast::schema::InputValue,
    pub meta: FieldMeta,
}

#[derive(Clone, Debug)]
pub struct FoundEnumValue<'a> {
    pub definition: &'a ast::schema::EnumType,
    pub value: &'a ast::schema::EnumValue,
}

impl SyntaxTree {
    /// The first definition in `definitions` whose name matches.
    pub fn find_definition<'a>(
        definitions: &'a [ast::schema::Definition],
        name: impl Into<NameMatcher>,
    ) -> Option<&'a ast::schema::Definition> {
        find_in_array_by_name(definitions, &name.into())
    }

    /// The first type definition (extensions excluded) whose name matches.
    pub fn find(&self, name: impl Into<NameMatcher>) -> Option<&ast::schema::TypeDefinition> {
        let matcher = name.into();
        self.document.definitions.iter().find_map(|def| match def {
            ast::schema::Definition::TypeDefinition(type_def)
                if matcher.matches(ast::type_definition_name(type_def)) => Some(type_def),
            _ => None,
        })
    }

    /// Find a field on the first type definition matching `type_name`.
    ///
    /// Returns `None` unless that definition is an object or interface type
    /// with a field matching `field_name`.
    pub fn find_field(
        &self,
        type_name: impl Into<NameMatcher>,
        field_name: impl Into<NameMatcher>,
    ) -> Option<FoundField<'_>> {
        let definition = self.find(type_name)?;
        let fields = match definition {
            ast::schema::TypeDefinition::Object(obj_def) => &obj_def.fields,
            ast::schema::TypeDefinition::Interface(iface_def) => &iface_def.fields,
            _ => return None,
        };
        let field = find_in_array_by_name(fields, &field_name.into())?;
        Some(FoundField {
            definition,
            field,
            meta: FieldMeta::from_type(&field.name, &field.field_type),
        })
    }

    /// The input object analog of [`SyntaxTree::find_field()`].
    pub fn find_input_field(
        &self,
        type_name: impl Into<NameMatcher>,
        field_name: impl Into<NameMatcher>,
    ) -> Option<FoundInputField<'_>> {
        let ast::schema::TypeDefinition::InputObject(definition) = self.find(type_name)? else {
            return None;
        };
        let field = find_in_array_by_name(&definition.fields, &field_name.into())?;
        Some(FoundInputField {
            definition,
            field,
            meta: FieldMeta::from_type(&field.name, &field.value_type),
        })
    }

    /// Find a value on the first type definition matching `enum_name`,
    /// provided that definition is an enum.
    pub fn find_enum_definition(
        &self,
        enum_name: impl Into<NameMatcher>,
        value_name: impl Into<NameMatcher>,
    ) -> Option<FoundEnumValue<'_>> {
        let ast::schema::TypeDefinition::Enum(definition) = self.find(enum_name)? else {
            return None;
        };
        let value = find_in_array_by_name(&definition.values, &value_name.into())?;
        Some(FoundEnumValue {
            definition,
            value,
        })
    }
}
