use crate::ast;
use crate::type_ref::read_type;
use crate::type_ref::TypeRef;
use indexmap::IndexMap;

/// Field name -> field summary, in declaration order.
pub type FieldsOutline = IndexMap<String, OutlineField>;

/// Summary of one argument on an [`OutlineField`].
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct OutlineArgument {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub array: bool,
    pub required: bool,
}

/// Summary of one field on an object, interface or input object type.
///
/// Input object fields never carry `args`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct OutlineField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub array: bool,
    pub required: bool,
    pub args: Vec<OutlineArgument>,
}

/// A plain, serializable projection of a schema document's structure.
///
/// An [`Outline`] is derived data: it is rebuilt from the document every time
/// it is requested and editing it never writes back to the document.
/// Type extensions fold into the entry for the type they extend.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
pub struct Outline {
    pub interfaces: IndexMap<String, FieldsOutline>,
    pub types: IndexMap<String, FieldsOutline>,

    /// Enum name -> (value name -> value name). The identity map makes
    /// "is this a value of the enum?" a single lookup.
    pub enums: IndexMap<String, IndexMap<String, String>>,

    /// Union name -> ordered member type names.
    pub unions: IndexMap<String, Vec<String>>,

    pub inputs: IndexMap<String, FieldsOutline>,
    pub scalars: Vec<String>,
}
impl Outline {
    pub fn from_document(doc: &ast::schema::Document) -> Self {
        let mut outline = Self::default();
        for def in &doc.definitions {
            match def {
                ast::schema::Definition::TypeDefinition(type_def) =>
                    outline.visit_type_definition(type_def),
                ast::schema::Definition::TypeExtension(type_ext) =>
                    outline.visit_type_extension(type_ext),
                ast::schema::Definition::DirectiveDefinition(_)
                    | ast::schema::Definition::SchemaDefinition(_) => (),
            }
        }
        outline
    }

    /// Whether `name` appears as a type, enum, interface, union or scalar.
    ///
    /// Input objects are deliberately not consulted here; use
    /// [`Outline::inputs`] directly for those.
    pub fn defines(&self, name: &str) -> bool {
        self.types.contains_key(name)
            || self.enums.contains_key(name)
            || self.interfaces.contains_key(name)
            || self.unions.contains_key(name)
            || self.scalars.iter().any(|scalar| scalar == name)
    }

    /// `(field name, base type name)` pairs for the object, interface or input
    /// type named `type_name`, in declaration order.
    pub fn field_types(&self, type_name: &str) -> Option<Vec<(&str, Option<&str>)>> {
        let fields = self.types.get(type_name)
            .or_else(|| self.interfaces.get(type_name))
            .or_else(|| self.inputs.get(type_name))?;

        Some(fields.values()
            .map(|field| (field.name.as_str(), field.type_name.as_deref()))
            .collect())
    }

    fn visit_type_definition(&mut self, def: &ast::schema::TypeDefinition) {
        match def {
            ast::schema::TypeDefinition::Enum(enum_def) =>
                self.add_enum_values(&enum_def.name, &enum_def.values),
            ast::schema::TypeDefinition::InputObject(input_def) =>
                add_input_fields(
                    self.inputs.entry(input_def.name.to_string()).or_default(),
                    &input_def.fields,
                ),
            ast::schema::TypeDefinition::Interface(iface_def) =>
                add_fields(
                    self.interfaces.entry(iface_def.name.to_string()).or_default(),
                    &iface_def.fields,
                ),
            ast::schema::TypeDefinition::Object(obj_def) =>
                add_fields(
                    self.types.entry(obj_def.name.to_string()).or_default(),
                    &obj_def.fields,
                ),
            ast::schema::TypeDefinition::Scalar(scalar_def) =>
                self.add_scalar(&scalar_def.name),
            ast::schema::TypeDefinition::Union(union_def) =>
                self.add_union_members(&union_def.name, &union_def.types),
        }
    }

    fn visit_type_extension(&mut self, ext: &ast::schema::TypeExtension) {
        match ext {
            ast::schema::TypeExtension::Enum(enum_ext) =>
                self.add_enum_values(&enum_ext.name, &enum_ext.values),
            ast::schema::TypeExtension::InputObject(input_ext) =>
                add_input_fields(
                    self.inputs.entry(input_ext.name.to_string()).or_default(),
                    &input_ext.fields,
                ),
            ast::schema::TypeExtension::Interface(iface_ext) =>
                add_fields(
                    self.interfaces.entry(iface_ext.name.to_string()).or_default(),
                    &iface_ext.fields,
                ),
            ast::schema::TypeExtension::Object(obj_ext) =>
                add_fields(
                    self.types.entry(obj_ext.name.to_string()).or_default(),
                    &obj_ext.fields,
                ),
            ast::schema::TypeExtension::Scalar(scalar_ext) =>
                self.add_scalar(&scalar_ext.name),
            ast::schema::TypeExtension::Union(union_ext) =>
                self.add_union_members(&union_ext.name, &union_ext.types),
        }
    }

    fn add_enum_values(&mut self, enum_name: &str, values: &[ast::schema::EnumValue]) {
        let entry = self.enums.entry(enum_name.to_string()).or_default();
        for value in values {
            entry.insert(value.name.to_string(), value.name.to_string());
        }
    }

    fn add_scalar(&mut self, scalar_name: &str) {
        if !self.scalars.iter().any(|name| name == scalar_name) {
            self.scalars.push(scalar_name.to_string());
        }
    }

    fn add_union_members(&mut self, union_name: &str, members: &[String]) {
        self.unions.entry(union_name.to_string())
            .or_default()
            .extend(members.iter().cloned());
    }
}

fn add_fields(outline: &mut FieldsOutline, fields: &[ast::schema::Field]) {
    for field in fields {
        let TypeRef { required, array, base_type_name } = read_type(&field.field_type);
        outline.insert(field.name.to_string(), OutlineField {
            name: field.name.to_string(),
            type_name: base_type_name,
            array,
            required,
            args: field.arguments.iter().map(outline_argument).collect(),
        });
    }
}

fn add_input_fields(outline: &mut FieldsOutline, fields: &[ast::schema::InputValue]) {
    for field in fields {
        let OutlineArgument { name, type_name, array, required } =
            outline_argument(field);
        outline.insert(field.name.to_string(), OutlineField {
            name,
            type_name,
            array,
            required,
            args: vec![],
        });
    }
}

fn outline_argument(arg: &ast::schema::InputValue) -> OutlineArgument {
    let TypeRef { required, array, base_type_name } = read_type(&arg.value_type);
    OutlineArgument {
        name: arg.name.to_string(),
        type_name: base_type_name,
        array,
        required,
    }
}
