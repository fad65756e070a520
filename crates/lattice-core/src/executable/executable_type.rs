use crate::ast;
use crate::executable::DerefByName;
use crate::executable::DerefByNameError;
use crate::executable::ExecutableSchema;
use crate::executable::NamedTypeRef;
use crate::resolver::Resolver;
use crate::resolver::ScalarCoercer;
use crate::resolver::TypeResolver;
use crate::type_ref::read_type;
use crate::type_ref::TypeRef;
use indexmap::IndexMap;
use inherent::inherent;

/// A field on an [`ObjectType`] or [`InterfaceType`], plus its resolver slot.
#[derive(Clone, Debug)]
pub struct ExecutableField {
    pub(super) arguments: IndexMap<String, ast::schema::Type>,
    pub(super) field_type: ast::schema::Type,
    pub(super) name: String,
    pub(super) resolver: Option<Resolver>,
}
impl ExecutableField {
    /// Argument name -> argument type, in declaration order.
    pub fn arguments(&self) -> &IndexMap<String, ast::schema::Type> {
        &self.arguments
    }

    pub fn field_type(&self) -> &ast::schema::Type {
        &self.field_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`Resolver`] attached to this field, if any.
    pub fn resolver(&self) -> Option<&Resolver> {
        self.resolver.as_ref()
    }

    pub fn type_ref(&self) -> TypeRef {
        read_type(&self.field_type)
    }
}

/// Behavior shared by [`ObjectType`] and [`InterfaceType`].
pub trait ObjectOrInterfaceType {
    fn field(&self, field_name: &str) -> Option<&ExecutableField>;

    /// Field name -> field, in declaration order.
    fn fields(&self) -> &IndexMap<String, ExecutableField>;

    /// The interfaces this type declares it implements.
    fn interfaces(&self) -> &Vec<NamedTypeRef>;

    fn name(&self) -> &str;
}

#[derive(Clone, Debug)]
pub struct ObjectType {
    pub(super) fields: IndexMap<String, ExecutableField>,
    pub(super) interfaces: Vec<NamedTypeRef>,
    pub(super) name: String,
}

#[inherent]
impl ObjectOrInterfaceType for ObjectType {
    pub fn field(&self, field_name: &str) -> Option<&ExecutableField> {
        self.fields.get(field_name)
    }

    pub fn fields(&self) -> &IndexMap<String, ExecutableField> {
        &self.fields
    }

    pub fn interfaces(&self) -> &Vec<NamedTypeRef> {
        &self.interfaces
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug)]
pub struct InterfaceType {
    pub(super) fields: IndexMap<String, ExecutableField>,
    pub(super) interfaces: Vec<NamedTypeRef>,
    pub(super) name: String,
    pub(super) resolve_type: Option<TypeResolver>,
}
impl InterfaceType {
    pub fn resolve_type(&self) -> Option<&TypeResolver> {
        self.resolve_type.as_ref()
    }
}

#[inherent]
impl ObjectOrInterfaceType for InterfaceType {
    pub fn field(&self, field_name: &str) -> Option<&ExecutableField> {
        self.fields.get(field_name)
    }

    pub fn fields(&self) -> &IndexMap<String, ExecutableField> {
        &self.fields
    }

    pub fn interfaces(&self) -> &Vec<NamedTypeRef> {
        &self.interfaces
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug)]
pub struct UnionType {
    pub(super) members: Vec<NamedTypeRef>,
    pub(super) name: String,
    pub(super) resolve_type: Option<TypeResolver>,
}
impl UnionType {
    /// Member type names, in declaration order.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter().map(|member| member.name()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn resolve_type(&self) -> Option<&TypeResolver> {
        self.resolve_type.as_ref()
    }
}

#[derive(Clone, Debug)]
pub struct EnumType {
    pub(super) name: String,
    pub(super) values: Vec<String>,
}
impl EnumType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &Vec<String> {
        &self.values
    }
}

#[derive(Clone, Debug)]
pub struct InputObjectType {
    pub(super) fields: IndexMap<String, ast::schema::Type>,
    pub(super) name: String,
}
impl InputObjectType {
    /// Input field name -> input field type, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, ast::schema::Type> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// A scalar type and its (optional) coercion functions. The builtin scalars
/// never carry coercers of their own.
#[derive(Clone, Debug)]
pub struct ScalarType {
    pub(super) builtin: bool,
    pub(super) name: String,
    pub(super) parse_literal: Option<ScalarCoercer>,
    pub(super) parse_value: Option<ScalarCoercer>,
    pub(super) serialize: Option<ScalarCoercer>,
}
impl ScalarType {
    pub(super) fn builtin(name: &str) -> Self {
        Self {
            builtin: true,
            name: name.to_string(),
            parse_literal: None,
            parse_value: None,
            serialize: None,
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parse_literal(&self) -> Option<&ScalarCoercer> {
        self.parse_literal.as_ref()
    }

    pub fn parse_value(&self) -> Option<&ScalarCoercer> {
        self.parse_value.as_ref()
    }

    pub fn serialize(&self) -> Option<&ScalarCoercer> {
        self.serialize.as_ref()
    }
}

/// A named type in a compiled [`ExecutableSchema`].
#[derive(Clone, Debug)]
pub enum ExecutableType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl ExecutableType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(t) = self { Some(t) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(t) = self { Some(t) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(t) = self { Some(t) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(t) = self { Some(t) } else { None }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(t) = self { Some(t) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(t) = self { Some(t) } else { None }
    }

    /// Fields of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, ExecutableField>> {
        match self {
            Self::Interface(t) => Some(t.fields()),
            Self::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    pub(super) fn fields_mut(&mut self) -> Option<&mut IndexMap<String, ExecutableField>> {
        match self {
            Self::Interface(t) => Some(&mut t.fields),
            Self::Object(t) => Some(&mut t.fields),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Enum(_) => "enum",
            Self::InputObject(_) => "input object",
            Self::Interface(_) => "interface",
            Self::Object(_) => "object",
            Self::Scalar(_) => "scalar",
            Self::Union(_) => "union",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }

    /// Whether values of this type may appear in argument or input field
    /// positions.
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::InputObject(_) | Self::Scalar(_))
    }
}
impl DerefByName for ExecutableType {
    type Source = ExecutableSchema;

    fn deref_name<'a>(
        schema: &'a ExecutableSchema,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
