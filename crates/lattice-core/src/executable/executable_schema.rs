use crate::ast;
use crate::executable::executable_schema_builder::ExecutableSchemaBuilder;
use crate::executable::ExecutableSchemaError;
use crate::executable::ExecutableType;
use crate::executable::NamedTypeRef;
use crate::executable::ObjectType;
use crate::resolver::Resolver;
use crate::resolver::ScalarCoercer;
use crate::resolver::TypeResolver;
use crate::OperationKind;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ExecutableSchemaError>;

/// Scalars every [`ExecutableSchema`] defines without being told to.
pub const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

/// A compiled schema: a validated type map with root operation pointers and
/// slots for resolver functions.
///
/// This is the hand-off point to an execution engine. It does not execute
/// anything itself.
#[derive(Clone, Debug)]
pub struct ExecutableSchema {
    pub(super) mutation_type: Option<NamedTypeRef>,
    pub(super) query_type: Option<NamedTypeRef>,
    pub(super) subscription_type: Option<NamedTypeRef>,
    pub(super) types: IndexMap<String, ExecutableType>,
}
impl ExecutableSchema {
    /// Compile a document.
    ///
    /// Type extensions are applied to the types they extend. Compilation
    /// fails on duplicate types, fields, arguments or enum values, on
    /// references to undefined types, on misplaced input/output types, and
    /// on root operation types that are missing or are not object types.
    /// A schema without a `Query` type is allowed.
    pub fn build(doc: &ast::schema::Document) -> Result<Self> {
        let mut builder = ExecutableSchemaBuilder::new();
        for def in &doc.definitions {
            builder.visit_definition(def)?;
        }
        builder.build()
    }

    pub fn get_type(&self, type_name: &str) -> Option<&ExecutableType> {
        self.types.get(type_name)
    }

    /// Every named type (builtin scalars included), in definition order.
    pub fn types(&self) -> &IndexMap<String, ExecutableType> {
        &self.types
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Mutation)
    }

    pub fn query_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Query)
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Subscription)
    }

    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&ObjectType> {
        self.root_operation_type_ref(kind)?
            .deref(self)
            .ok()?
            .as_object()
    }

    pub fn root_operation_type_name(&self, kind: OperationKind) -> Option<&str> {
        self.root_operation_type_ref(kind).map(|type_ref| type_ref.name())
    }

    /// Names of the defined root operation types, in Query, Mutation,
    /// Subscription order.
    pub fn root_operation_type_names(&self) -> Vec<&str> {
        OperationKind::ALL.iter()
            .filter_map(|kind| self.root_operation_type_name(*kind))
            .collect()
    }

    fn root_operation_type_ref(&self, kind: OperationKind) -> Option<&NamedTypeRef> {
        match kind {
            OperationKind::Mutation => self.mutation_type.as_ref(),
            OperationKind::Query => self.query_type.as_ref(),
            OperationKind::Subscription => self.subscription_type.as_ref(),
        }
    }

    /// Whether `type_name` belongs to the schema machinery rather than to
    /// user configs: root operation types (whatever they are named), the
    /// conventional `Query`/`Mutation`/`Subscription` names,
    /// `__`-prefixed introspection names and the builtin scalars.
    pub fn is_reserved_type_name(&self, type_name: &str) -> bool {
        type_name.starts_with("__")
            || BUILTIN_SCALAR_NAMES.contains(&type_name)
            || OperationKind::ALL.iter().any(|kind| kind.default_type_name() == type_name)
            || self.root_operation_type_names().contains(&type_name)
    }

    /// The resolver attached to `type_name.field_name`, if any.
    pub fn field_resolver(&self, type_name: &str, field_name: &str) -> Option<&Resolver> {
        self.types.get(type_name)?
            .fields()?
            .get(field_name)?
            .resolver()
    }

    /// Attach `resolver` to `type_name.field_name`, replacing any resolver
    /// already there.
    pub fn set_field_resolver(
        &mut self,
        type_name: &str,
        field_name: &str,
        resolver: Resolver,
    ) -> Result<()> {
        let type_ = self.type_mut(type_name)?;
        let found = type_.kind_name();
        let fields = type_.fields_mut().ok_or_else(|| ExecutableSchemaError::UnexpectedTypeKind {
            expected: "an object or interface type",
            found,
            type_name: type_name.to_string(),
        })?;
        let field = fields.get_mut(field_name).ok_or_else(|| ExecutableSchemaError::UnknownField {
            field_name: field_name.to_string(),
            type_name: type_name.to_string(),
        })?;
        field.resolver = Some(resolver);
        Ok(())
    }

    /// Attach coercion functions to the custom scalar `type_name`. A `None`
    /// leaves that slot as it was.
    pub fn set_scalar_coercers(
        &mut self,
        type_name: &str,
        parse_value: Option<ScalarCoercer>,
        parse_literal: Option<ScalarCoercer>,
        serialize: Option<ScalarCoercer>,
    ) -> Result<()> {
        match self.type_mut(type_name)? {
            ExecutableType::Scalar(scalar_type) if !scalar_type.builtin => {
                if parse_value.is_some() {
                    scalar_type.parse_value = parse_value;
                }
                if parse_literal.is_some() {
                    scalar_type.parse_literal = parse_literal;
                }
                if serialize.is_some() {
                    scalar_type.serialize = serialize;
                }
                Ok(())
            },

            ExecutableType::Scalar(_) => Err(ExecutableSchemaError::UnexpectedTypeKind {
                expected: "a custom scalar",
                found: "a builtin scalar",
                type_name: type_name.to_string(),
            }),

            other => Err(ExecutableSchemaError::UnexpectedTypeKind {
                expected: "a custom scalar",
                found: other.kind_name(),
                type_name: type_name.to_string(),
            }),
        }
    }

    /// Attach a `resolve_type` function to the interface or union
    /// `type_name`.
    pub fn set_type_resolver(
        &mut self,
        type_name: &str,
        resolve_type: TypeResolver,
    ) -> Result<()> {
        match self.type_mut(type_name)? {
            ExecutableType::Interface(iface_type) => {
                iface_type.resolve_type = Some(resolve_type);
                Ok(())
            },

            ExecutableType::Union(union_type) => {
                union_type.resolve_type = Some(resolve_type);
                Ok(())
            },

            other => Err(ExecutableSchemaError::UnexpectedTypeKind {
                expected: "an interface or union type",
                found: other.kind_name(),
                type_name: type_name.to_string(),
            }),
        }
    }

    fn type_mut(&mut self, type_name: &str) -> Result<&mut ExecutableType> {
        self.types.get_mut(type_name).ok_or_else(|| ExecutableSchemaError::UnknownType {
            type_name: type_name.to_string(),
        })
    }
}
