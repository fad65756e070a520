use crate::ast;
use crate::executable::ExecutableSchemaError;
use crate::resolver::Resolver;
use crate::resolver::ResolverContext;
use crate::resolver::ScalarCoercer;
use crate::resolver::TypeResolver;
use crate::schema_factory::assemble_schema;
use crate::schema_factory::FactoryParsingError;
use crate::syntax_tree::SyntaxTreeError;
use crate::TypeConfig;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, FactoryParsingError>;

fn constant_resolver(value: &str) -> Resolver {
    let value = value.to_string();
    Resolver::new(move |_| Ok(ast::query::Value::String(value.clone())))
}

fn resolve(resolver: Option<&Resolver>, type_name: &str, field_name: &str) -> Option<ast::query::Value> {
    let args = IndexMap::new();
    let ctx = ResolverContext {
        args: &args,
        field_name,
        parent: None,
        type_name,
    };
    resolver?.resolve(&ctx).ok()
}

mod merging {
    use super::*;

    #[test]
    fn root_query_fragments_combine() -> Result<()> {
        let schema = assemble_schema([
            TypeConfig::new("A", "type Query { a: String }"),
            TypeConfig::new("B", "type Query { b: String }"),
        ])?;

        let Some(query_type) = schema.query_type() else {
            panic!("expected a Query root type");
        };
        assert_eq!(
            query_type.fields().keys().collect::<Vec<_>>(),
            vec!["a", "b"],
        );
        Ok(())
    }

    #[test]
    fn three_fragments_with_shared_types() -> Result<()> {
        let schema = assemble_schema([
            TypeConfig::new("Planet", "type Planet { id: ID name: String }\ntype Query { planet: Planet }"),
            TypeConfig::new("Star", "type Star { id: ID planets: [Planet!]! }\ntype Query { star: Star }"),
            TypeConfig::new("Sector", "enum Sector { INNER OUTER }\ntype Planet { sector: Sector }"),
        ])?;

        let Some(planet) = schema.get_type("Planet").and_then(|t| t.as_object()) else {
            panic!("expected Planet to be an object type");
        };
        assert_eq!(
            planet.fields().keys().collect::<Vec<_>>(),
            vec!["id", "name", "sector"],
        );
        assert_eq!(schema.root_operation_type_names(), vec!["Query"]);
        Ok(())
    }

    #[test]
    fn configs_without_name_or_schema_are_skipped() -> Result<()> {
        let schema = assemble_schema([
            TypeConfig::new("A", "type Query { a: String }"),
            TypeConfig::new("", "type Query { ignored: String }"),
        ])?;

        let Some(query_type) = schema.query_type() else {
            panic!("expected a Query root type");
        };
        assert!(query_type.field("ignored").is_none());
        Ok(())
    }
}

mod failures {
    use super::*;

    #[test]
    fn malformed_fragment_names_its_config() {
        let result = assemble_schema([
            TypeConfig::new("A", "type Query { a: String }"),
            TypeConfig::new("Broken", "type Query {"),
        ]);

        assert!(matches!(
            result,
            Err(FactoryParsingError::Fragment {
                ref config_name,
                source: SyntaxTreeError::Parse { .. },
            }) if config_name == "Broken",
        ));
    }

    #[test]
    fn undefined_reference_fails_compilation() {
        let result = assemble_schema([
            TypeConfig::new("A", "type Query { moon: Moon }"),
        ]);

        assert!(matches!(
            result,
            Err(FactoryParsingError::Compile(
                ExecutableSchemaError::UndefinedTypeReference { ref type_name, .. },
            )) if type_name == "Moon",
        ));
    }

    #[test]
    fn resolver_for_unknown_field_fails_wiring() {
        let result = assemble_schema([
            TypeConfig::new("Planet", "type Planet { id: ID }")
                .with_field("mass", constant_resolver("heavy")),
        ]);

        assert!(matches!(
            result,
            Err(FactoryParsingError::Wiring {
                ref config_name,
                source: ExecutableSchemaError::UnknownField { .. },
            }) if config_name == "Planet",
        ));
    }

    #[test]
    fn mutation_resolvers_without_mutation_type_fail_wiring() {
        let result = assemble_schema([
            TypeConfig::new("A", "type Query { a: String }")
                .with_mutation("a", constant_resolver("a")),
        ]);

        assert!(matches!(
            result,
            Err(FactoryParsingError::Wiring {
                source: ExecutableSchemaError::UndefinedRootOperationType { .. },
                ..
            }),
        ));
    }
}

mod wiring {
    use super::*;

    #[test]
    fn type_fields_and_root_operations_get_resolvers() -> Result<()> {
        let schema = assemble_schema([
            TypeConfig::new("Planet", "type Planet { id: ID name: String }\ntype Query { planet: Planet }")
                .with_field("name", constant_resolver("Earth"))
                .with_query("planet", constant_resolver("planet")),
            TypeConfig::new("Mutations", "type Mutation { rename: String }")
                .with_mutation("rename", constant_resolver("renamed")),
        ])?;

        assert_eq!(
            resolve(schema.field_resolver("Planet", "name"), "Planet", "name"),
            Some(ast::query::Value::String("Earth".to_string())),
        );
        assert!(schema.field_resolver("Planet", "id").is_none());
        assert_eq!(
            resolve(schema.field_resolver("Query", "planet"), "Query", "planet"),
            Some(ast::query::Value::String("planet".to_string())),
        );
        assert_eq!(
            resolve(schema.field_resolver("Mutation", "rename"), "Mutation", "rename"),
            Some(ast::query::Value::String("renamed".to_string())),
        );
        Ok(())
    }

    #[test]
    fn root_resolvers_follow_a_renamed_root() -> Result<()> {
        let schema = assemble_schema([
            TypeConfig::new("Root", "schema { query: Root }\ntype Root { now: String }")
                .with_query("now", constant_resolver("noon")),
        ])?;

        assert_eq!(schema.root_operation_type_names(), vec!["Root"]);
        assert!(schema.field_resolver("Root", "now").is_some());
        Ok(())
    }

    #[test]
    fn scalar_coercers_attach_to_custom_scalars() -> Result<()> {
        let coercer = ScalarCoercer::new(|value| Ok(value.clone()));
        let schema = assemble_schema([
            TypeConfig::new("Date", "scalar Date")
                .with_scalar_coercers(coercer.clone(), coercer.clone(), coercer),
            TypeConfig::new("A", "type Query { today: Date }"),
        ])?;

        let Some(date) = schema.get_type("Date").and_then(|t| t.as_scalar()) else {
            panic!("expected Date to be a scalar type");
        };
        assert!(date.parse_value().is_some());
        assert!(date.parse_literal().is_some());
        assert!(date.serialize().is_some());
        Ok(())
    }

    #[test]
    fn resolve_type_attaches_to_unions_and_interfaces() -> Result<()> {
        let resolve_type = TypeResolver::new(|_| Some("Planet".to_string()));
        let schema = assemble_schema([
            TypeConfig::new("Node", "interface Node { id: ID }")
                .with_resolve_type(resolve_type.clone()),
            TypeConfig::new("Body", "type Planet implements Node { id: ID }\nunion Body = Planet")
                .with_resolve_type(resolve_type),
        ])?;

        let node = schema.get_type("Node").and_then(|t| t.as_interface());
        assert!(node.and_then(|node| node.resolve_type()).is_some());

        let body = schema.get_type("Body").and_then(|t| t.as_union());
        let chosen = body
            .and_then(|body| body.resolve_type())
            .and_then(|resolve_type| resolve_type.resolve_type(&ast::query::Value::Null));
        assert_eq!(chosen.as_deref(), Some("Planet"));
        Ok(())
    }

    #[test]
    fn later_config_with_same_name_wins() -> Result<()> {
        let schema = assemble_schema([
            TypeConfig::new("Planet", "type Planet { name: String }")
                .with_field("name", constant_resolver("first")),
            TypeConfig::new("Planet", "type Planet { mass: Float }")
                .with_field("name", constant_resolver("second")),
        ])?;

        assert_eq!(
            resolve(schema.field_resolver("Planet", "name"), "Planet", "name"),
            Some(ast::query::Value::String("second".to_string())),
        );
        Ok(())
    }
}
