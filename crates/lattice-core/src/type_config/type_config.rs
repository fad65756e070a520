use crate::resolver::Resolver;
use crate::resolver::ScalarCoercer;
use crate::resolver::TypeResolver;
use crate::OperationKind;
use indexmap::IndexMap;

/// One schema fragment plus the functions that go with it.
///
/// `name` usually names the type `schema` defines; field resolvers in
/// `fields` are attached to that type. `queries`, `mutations` and
/// `subscriptions` are attached to the root operation types instead.
#[derive(Clone, Debug, Default)]
pub struct TypeConfig {
    pub name: String,
    pub schema: String,
    pub fields: Option<IndexMap<String, Resolver>>,
    pub queries: Option<IndexMap<String, Resolver>>,
    pub mutations: Option<IndexMap<String, Resolver>>,
    pub subscriptions: Option<IndexMap<String, Resolver>>,
    pub parse_value: Option<ScalarCoercer>,
    pub parse_literal: Option<ScalarCoercer>,
    pub serialize: Option<ScalarCoercer>,
    pub resolve_type: Option<TypeResolver>,
}
impl TypeConfig {
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field_name: impl Into<String>, resolver: Resolver) -> Self {
        self.fields.get_or_insert_with(IndexMap::new).insert(field_name.into(), resolver);
        self
    }

    pub fn with_query(self, field_name: impl Into<String>, resolver: Resolver) -> Self {
        self.with_root_resolver(OperationKind::Query, field_name, resolver)
    }

    pub fn with_mutation(self, field_name: impl Into<String>, resolver: Resolver) -> Self {
        self.with_root_resolver(OperationKind::Mutation, field_name, resolver)
    }

    pub fn with_subscription(self, field_name: impl Into<String>, resolver: Resolver) -> Self {
        self.with_root_resolver(OperationKind::Subscription, field_name, resolver)
    }

    fn with_root_resolver(
        mut self,
        kind: OperationKind,
        field_name: impl Into<String>,
        resolver: Resolver,
    ) -> Self {
        let resolvers = match kind {
            OperationKind::Mutation => &mut self.mutations,
            OperationKind::Query => &mut self.queries,
            OperationKind::Subscription => &mut self.subscriptions,
        };
        resolvers.get_or_insert_with(IndexMap::new).insert(field_name.into(), resolver);
        self
    }

    pub fn with_scalar_coercers(
        mut self,
        parse_value: ScalarCoercer,
        parse_literal: ScalarCoercer,
        serialize: ScalarCoercer,
    ) -> Self {
        self.parse_value = Some(parse_value);
        self.parse_literal = Some(parse_literal);
        self.serialize = Some(serialize);
        self
    }

    pub fn with_resolve_type(mut self, resolve_type: TypeResolver) -> Self {
        self.resolve_type = Some(resolve_type);
        self
    }

    /// The `queries`, `mutations` or `subscriptions` mapping.
    pub fn root_resolvers(&self, kind: OperationKind) -> Option<&IndexMap<String, Resolver>> {
        match kind {
            OperationKind::Mutation => self.mutations.as_ref(),
            OperationKind::Query => self.queries.as_ref(),
            OperationKind::Subscription => self.subscriptions.as_ref(),
        }
    }
}
