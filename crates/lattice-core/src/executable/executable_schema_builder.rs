use crate::ast;
use crate::executable::BUILTIN_SCALAR_NAMES;
use crate::executable::EnumType;
use crate::executable::ExecutableField;
use crate::executable::ExecutableSchema;
use crate::executable::ExecutableSchemaError;
use crate::executable::ExecutableType;
use crate::executable::InputObjectType;
use crate::executable::InterfaceType;
use crate::executable::NamedTypeRef;
use crate::executable::ObjectType;
use crate::executable::RootOperationTypes;
use crate::executable::ScalarType;
use crate::executable::UnionType;
use crate::OperationKind;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ExecutableSchemaError>;

/// Collects type definitions, applies extensions, then validates the
/// result into an [`ExecutableSchema`].
#[derive(Debug)]
pub(super) struct ExecutableSchemaBuilder {
    extensions: Vec<ast::schema::TypeExtension>,
    schema_def: Option<RootOperationTypes>,
    types: IndexMap<String, ExecutableType>,
}
impl ExecutableSchemaBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
            schema_def: None,
            types: BUILTIN_SCALAR_NAMES.iter()
                .map(|name| (
                    name.to_string(),
                    ExecutableType::Scalar(ScalarType::builtin(name)),
                ))
                .collect(),
        }
    }

    pub fn build(mut self) -> Result<ExecutableSchema> {
        for ext in std::mem::take(&mut self.extensions) {
            self.apply_extension(ext)?;
        }
        self.validate_references()?;

        let query_type = self.resolve_root_type(OperationKind::Query)?;
        let mutation_type = self.resolve_root_type(OperationKind::Mutation)?;
        let subscription_type = self.resolve_root_type(OperationKind::Subscription)?;

        Ok(ExecutableSchema {
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn visit_definition(&mut self, def: &ast::schema::Definition) -> Result<()> {
        match def {
            ast::schema::Definition::DirectiveDefinition(_) => Ok(()),

            ast::schema::Definition::SchemaDefinition(schema_def) => {
                if self.schema_def.is_some() {
                    return Err(ExecutableSchemaError::DuplicateSchemaDefinition);
                }
                self.schema_def = Some(RootOperationTypes::from_schema_definition(schema_def));
                Ok(())
            },

            ast::schema::Definition::TypeDefinition(type_def) =>
                self.add_new_type(type_from_ast(type_def)?),

            ast::schema::Definition::TypeExtension(ext) => {
                self.extensions.push(ext.to_owned());
                Ok(())
            },
        }
    }

    fn add_new_type(&mut self, type_: ExecutableType) -> Result<()> {
        let type_name = type_.name().to_string();
        if type_name.starts_with("__") {
            return Err(ExecutableSchemaError::InvalidDunderPrefixedTypeName {
                type_name,
            });
        }
        if self.types.contains_key(&type_name) {
            return Err(ExecutableSchemaError::DuplicateTypeDefinition {
                type_name,
            });
        }
        self.types.insert(type_name, type_);
        Ok(())
    }

    fn apply_extension(&mut self, ext: ast::schema::TypeExtension) -> Result<()> {
        let type_name = ast::type_extension_name(&ext).to_string();
        let Some(existing) = self.types.get_mut(&type_name) else {
            return Err(ExecutableSchemaError::ExtensionOfUndefinedType {
                type_name,
            });
        };

        match (existing, ext) {
            (ExecutableType::Enum(enum_type), ast::schema::TypeExtension::Enum(ext)) =>
                add_enum_values(&type_name, &mut enum_type.values, &ext.values),

            (ExecutableType::InputObject(input_type), ast::schema::TypeExtension::InputObject(ext)) =>
                add_input_fields(&type_name, &mut input_type.fields, &ext.fields),

            (ExecutableType::Interface(iface_type), ast::schema::TypeExtension::Interface(ext)) => {
                iface_type.interfaces.extend(ext.implements_interfaces.iter().map(NamedTypeRef::new));
                add_fields(&type_name, &mut iface_type.fields, &ext.fields)
            },

            (ExecutableType::Object(obj_type), ast::schema::TypeExtension::Object(ext)) => {
                obj_type.interfaces.extend(ext.implements_interfaces.iter().map(NamedTypeRef::new));
                add_fields(&type_name, &mut obj_type.fields, &ext.fields)
            },

            (ExecutableType::Scalar(_), ast::schema::TypeExtension::Scalar(_)) => Ok(()),

            (ExecutableType::Union(union_type), ast::schema::TypeExtension::Union(ext)) => {
                union_type.members.extend(ext.types.iter().map(NamedTypeRef::new));
                Ok(())
            },

            (existing, ext) => Err(ExecutableSchemaError::ExtensionKindMismatch {
                defined_kind: existing.kind_name(),
                extension_kind: extension_kind_name(&ext),
                type_name,
            }),
        }
    }

    fn validate_references(&self) -> Result<()> {
        for type_ in self.types.values() {
            match type_ {
                ExecutableType::Enum(_) | ExecutableType::Scalar(_) => (),

                ExecutableType::InputObject(input_type) => {
                    for (field_name, field_type) in &input_type.fields {
                        self.check_input_position(
                            format!("{}.{field_name}", input_type.name),
                            field_type,
                        )?;
                    }
                },

                ExecutableType::Interface(iface_type) => {
                    self.check_interfaces(&iface_type.name, &iface_type.interfaces)?;
                    self.check_fields(&iface_type.name, &iface_type.fields)?;
                },

                ExecutableType::Object(obj_type) => {
                    self.check_interfaces(&obj_type.name, &obj_type.interfaces)?;
                    self.check_fields(&obj_type.name, &obj_type.fields)?;
                },

                ExecutableType::Union(union_type) => {
                    for member in &union_type.members {
                        match self.types.get(member.name()) {
                            Some(ExecutableType::Object(_)) => (),
                            Some(_) => return Err(ExecutableSchemaError::NonObjectUnionMember {
                                member_name: member.name().to_string(),
                                union_name: union_type.name.to_owned(),
                            }),
                            None => return Err(ExecutableSchemaError::UndefinedTypeReference {
                                location: union_type.name.to_owned(),
                                type_name: member.name().to_string(),
                            }),
                        }
                    }
                },
            }
        }
        Ok(())
    }

    fn check_interfaces(&self, type_name: &str, interfaces: &[NamedTypeRef]) -> Result<()> {
        for iface in interfaces {
            match self.types.get(iface.name()) {
                Some(ExecutableType::Interface(_)) => (),
                Some(_) => return Err(ExecutableSchemaError::ImplementsNonInterfaceType {
                    implemented_type_name: iface.name().to_string(),
                    type_name: type_name.to_string(),
                }),
                None => return Err(ExecutableSchemaError::UndefinedTypeReference {
                    location: type_name.to_string(),
                    type_name: iface.name().to_string(),
                }),
            }
        }
        Ok(())
    }

    fn check_fields(
        &self,
        type_name: &str,
        fields: &IndexMap<String, ExecutableField>,
    ) -> Result<()> {
        for field in fields.values() {
            let base_type_name = innermost_type_name(&field.field_type);
            if !self.types.contains_key(base_type_name) {
                return Err(ExecutableSchemaError::UndefinedTypeReference {
                    location: format!("{type_name}.{}", field.name),
                    type_name: base_type_name.to_string(),
                });
            }
            for (arg_name, arg_type) in &field.arguments {
                self.check_input_position(
                    format!("{type_name}.{}({arg_name}:)", field.name),
                    arg_type,
                )?;
            }
        }
        Ok(())
    }

    fn check_input_position(&self, location: String, ty: &ast::schema::Type) -> Result<()> {
        let base_type_name = innermost_type_name(ty);
        match self.types.get(base_type_name) {
            Some(type_) if type_.is_input_type() => Ok(()),
            Some(type_) => Err(ExecutableSchemaError::InvalidInputPositionType {
                kind: type_.kind_name(),
                location,
                type_name: base_type_name.to_string(),
            }),
            None => Err(ExecutableSchemaError::UndefinedTypeReference {
                location,
                type_name: base_type_name.to_string(),
            }),
        }
    }

    fn resolve_root_type(&self, kind: OperationKind) -> Result<Option<NamedTypeRef>> {
        let operation = kind.default_type_name();
        let explicit_name = match &self.schema_def {
            Some(schema_def) => match schema_def.get(kind) {
                Some(type_name) => type_name,
                None => return Ok(None),
            },
            None => return Ok(match self.types.get(operation) {
                Some(ExecutableType::Object(_)) => Some(NamedTypeRef::new(operation)),
                _ => None,
            }),
        };

        match self.types.get(explicit_name) {
            Some(ExecutableType::Object(_)) => Ok(Some(NamedTypeRef::new(explicit_name))),
            Some(other) => Err(ExecutableSchemaError::RootOperationTypeNotObject {
                kind: other.kind_name(),
                operation,
                type_name: explicit_name.to_string(),
            }),
            None => Err(ExecutableSchemaError::UndefinedRootOperationType {
                operation,
                type_name: explicit_name.to_string(),
            }),
        }
    }
}

fn type_from_ast(def: &ast::schema::TypeDefinition) -> Result<ExecutableType> {
    Ok(match def {
        ast::schema::TypeDefinition::Enum(enum_def) => {
            let mut values = vec![];
            add_enum_values(&enum_def.name, &mut values, &enum_def.values)?;
            ExecutableType::Enum(EnumType {
                name: enum_def.name.to_string(),
                values,
            })
        },

        ast::schema::TypeDefinition::InputObject(input_def) => {
            let mut fields = IndexMap::new();
            add_input_fields(&input_def.name, &mut fields, &input_def.fields)?;
            ExecutableType::InputObject(InputObjectType {
                fields,
                name: input_def.name.to_string(),
            })
        },

        ast::schema::TypeDefinition::Interface(iface_def) => {
            let mut fields = IndexMap::new();
            add_fields(&iface_def.name, &mut fields, &iface_def.fields)?;
            ExecutableType::Interface(InterfaceType {
                fields,
                interfaces: iface_def.implements_interfaces.iter().map(NamedTypeRef::new).collect(),
                name: iface_def.name.to_string(),
                resolve_type: None,
            })
        },

        ast::schema::TypeDefinition::Object(obj_def) => {
            let mut fields = IndexMap::new();
            add_fields(&obj_def.name, &mut fields, &obj_def.fields)?;
            ExecutableType::Object(ObjectType {
                fields,
                interfaces: obj_def.implements_interfaces.iter().map(NamedTypeRef::new).collect(),
                name: obj_def.name.to_string(),
            })
        },

        ast::schema::TypeDefinition::Scalar(scalar_def) =>
            ExecutableType::Scalar(ScalarType {
                builtin: false,
                name: scalar_def.name.to_string(),
                parse_literal: None,
                parse_value: None,
                serialize: None,
            }),

        ast::schema::TypeDefinition::Union(union_def) =>
            ExecutableType::Union(UnionType {
                members: union_def.types.iter().map(NamedTypeRef::new).collect(),
                name: union_def.name.to_string(),
                resolve_type: None,
            }),
    })
}

fn add_fields(
    type_name: &str,
    target: &mut IndexMap<String, ExecutableField>,
    fields: &[ast::schema::Field],
) -> Result<()> {
    for field in fields {
        if target.contains_key(field.name.as_str()) {
            return Err(ExecutableSchemaError::DuplicateFieldDefinition {
                field_name: field.name.to_string(),
                type_name: type_name.to_string(),
            });
        }

        let mut arguments = IndexMap::new();
        for arg in &field.arguments {
            if arguments.insert(arg.name.to_string(), arg.value_type.to_owned()).is_some() {
                return Err(ExecutableSchemaError::DuplicateArgumentDefinition {
                    argument_name: arg.name.to_string(),
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
        }

        target.insert(field.name.to_string(), ExecutableField {
            arguments,
            field_type: field.field_type.to_owned(),
            name: field.name.to_string(),
            resolver: None,
        });
    }
    Ok(())
}

fn add_input_fields(
    type_name: &str,
    target: &mut IndexMap<String, ast::schema::Type>,
    fields: &[ast::schema::InputValue],
) -> Result<()> {
    for field in fields {
        if target.insert(field.name.to_string(), field.value_type.to_owned()).is_some() {
            return Err(ExecutableSchemaError::DuplicateFieldDefinition {
                field_name: field.name.to_string(),
                type_name: type_name.to_string(),
            });
        }
    }
    Ok(())
}

fn add_enum_values(
    type_name: &str,
    target: &mut Vec<String>,
    values: &[ast::schema::EnumValue],
) -> Result<()> {
    for value in values {
        if target.iter().any(|existing| existing == &value.name) {
            return Err(ExecutableSchemaError::DuplicateEnumValueDefinition {
                type_name: type_name.to_string(),
                value_name: value.name.to_string(),
            });
        }
        target.push(value.name.to_string());
    }
    Ok(())
}

fn extension_kind_name(ext: &ast::schema::TypeExtension) -> &'static str {
    match ext {
        ast::schema::TypeExtension::Enum(_) => "enum",
        ast::schema::TypeExtension::InputObject(_) => "input object",
        ast::schema::TypeExtension::Interface(_) => "interface",
        ast::schema::TypeExtension::Object(_) => "object",
        ast::schema::TypeExtension::Scalar(_) => "scalar",
        ast::schema::TypeExtension::Union(_) => "union",
    }
}

/// Unwraps every list/non-null wrapper, however deep.
fn innermost_type_name(ty: &ast::schema::Type) -> &str {
    match ty {
        ast::schema::Type::NamedType(name) => name.as_str(),
        ast::schema::Type::ListType(inner)
            | ast::schema::Type::NonNullType(inner) => innermost_type_name(inner),
    }
}
