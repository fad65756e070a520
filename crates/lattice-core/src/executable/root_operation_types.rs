use crate::ast;
use crate::OperationKind;

/// The names of a document's root operation types.
///
/// A `schema { ... }` definition decides them explicitly. Without one, each
/// root is the object type with the conventional name (`Query`, `Mutation`,
/// `Subscription`), if the document defines it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RootOperationTypes {
    pub mutation: Option<String>,
    pub query: Option<String>,
    pub subscription: Option<String>,
}
impl RootOperationTypes {
    pub fn from_document(doc: &ast::schema::Document) -> Self {
        let schema_def = doc.definitions.iter().find_map(|def| match def {
            ast::schema::Definition::SchemaDefinition(schema_def) => Some(schema_def),
            _ => None,
        });
        if let Some(schema_def) = schema_def {
            return Self::from_schema_definition(schema_def);
        }

        let default_if_defined = |kind: OperationKind| {
            let type_name = kind.default_type_name();
            doc.definitions.iter()
                .any(|def| matches!(
                    def,
                    ast::schema::Definition::TypeDefinition(
                        ast::schema::TypeDefinition::Object(obj_def),
                    ) if obj_def.name == type_name,
                ))
                .then(|| type_name.to_string())
        };

        Self {
            mutation: default_if_defined(OperationKind::Mutation),
            query: default_if_defined(OperationKind::Query),
            subscription: default_if_defined(OperationKind::Subscription),
        }
    }

    pub(crate) fn from_schema_definition(schema_def: &ast::schema::SchemaDefinition) -> Self {
        Self {
            mutation: schema_def.mutation.clone(),
            query: schema_def.query.clone(),
            subscription: schema_def.subscription.clone(),
        }
    }

    pub fn get(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Mutation => self.mutation.as_deref(),
            OperationKind::Query => self.query.as_deref(),
            OperationKind::Subscription => self.subscription.as_deref(),
        }
    }

    /// The declared root type names, in Query, Mutation, Subscription order.
    pub fn names(&self) -> Vec<&str> {
        OperationKind::ALL.iter()
            .filter_map(|kind| self.get(*kind))
            .collect()
    }
}
