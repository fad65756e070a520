use crate::ast;
use crate::executable::ExecutableSchema;
use crate::executable::ExecutableSchemaError;
use crate::executable::NamedTypeRef;
use crate::executable::DerefByName;
use crate::resolver::Resolver;
use crate::resolver::ResolverContext;
use crate::resolver::ScalarCoercer;
use crate::resolver::TypeResolver;
use crate::OperationKind;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ExecutableSchemaError>;

fn build(sdl: &str) -> Result<ExecutableSchema> {
    let doc = match ast::parse(sdl) {
        Ok(doc) => doc,
        Err(err) => panic!("test fixture failed to parse: {err}"),
    };
    ExecutableSchema::build(&doc)
}

const SOLAR_SYSTEM: &str = concat!(
    "scalar Date\n",
    "interface Body { id: ID! }\n",
    "type Planet implements Body { id: ID! name: String discovered: Date }\n",
    "union Thing = Planet\n",
    "type Query { planet(id: ID!): Planet things: [Thing] }\n",
);

#[test]
fn field_resolvers_round_trip() -> Result<()> {
    let mut schema = build(SOLAR_SYSTEM)?;
    assert!(schema.field_resolver("Planet", "name").is_none());

    schema.set_field_resolver(
        "Planet",
        "name",
        Resolver::new(|ctx| Ok(ast::query::Value::String(format!("{}.{}", ctx.type_name, ctx.field_name)))),
    )?;

    let args = IndexMap::new();
    let ctx = ResolverContext {
        args: &args,
        field_name: "name",
        parent: None,
        type_name: "Planet",
    };
    let value = schema.field_resolver("Planet", "name").map(|resolver| resolver.resolve(&ctx));
    assert_eq!(value, Some(Ok(ast::query::Value::String("Planet.name".to_string()))));
    Ok(())
}

#[test]
fn field_resolver_targets_must_exist() -> Result<()> {
    let mut schema = build(SOLAR_SYSTEM)?;
    let resolver = Resolver::new(|_| Ok(ast::query::Value::Null));

    assert_eq!(
        schema.set_field_resolver("Moon", "name", resolver.clone()),
        Err(ExecutableSchemaError::UnknownType {
            type_name: "Moon".to_string(),
        }),
    );
    assert_eq!(
        schema.set_field_resolver("Planet", "mass", resolver.clone()),
        Err(ExecutableSchemaError::UnknownField {
            field_name: "mass".to_string(),
            type_name: "Planet".to_string(),
        }),
    );
    assert!(matches!(
        schema.set_field_resolver("Thing", "id", resolver),
        Err(ExecutableSchemaError::UnexpectedTypeKind { found: "union", .. }),
    ));
    Ok(())
}

#[test]
fn scalar_coercers_only_fit_custom_scalars() -> Result<()> {
    let mut schema = build(SOLAR_SYSTEM)?;
    let coercer = ScalarCoercer::new(|value| Ok(value.clone()));

    schema.set_scalar_coercers("Date", Some(coercer.clone()), None, None)?;
    let date = schema.get_type("Date").and_then(|t| t.as_scalar());
    assert!(date.is_some_and(|date| date.parse_value().is_some() && date.serialize().is_none()));

    assert!(matches!(
        schema.set_scalar_coercers("Int", Some(coercer.clone()), None, None),
        Err(ExecutableSchemaError::UnexpectedTypeKind { found: "a builtin scalar", .. }),
    ));
    assert!(matches!(
        schema.set_scalar_coercers("Planet", Some(coercer), None, None),
        Err(ExecutableSchemaError::UnexpectedTypeKind { found: "object", .. }),
    ));
    Ok(())
}

#[test]
fn type_resolvers_fit_interfaces_and_unions() -> Result<()> {
    let mut schema = build(SOLAR_SYSTEM)?;
    let resolve_type = TypeResolver::new(|_| Some("Planet".to_string()));

    schema.set_type_resolver("Body", resolve_type.clone())?;
    schema.set_type_resolver("Thing", resolve_type.clone())?;
    assert!(schema.get_type("Body").and_then(|t| t.as_interface()).is_some_and(|t| t.resolve_type().is_some()));
    assert!(schema.get_type("Thing").and_then(|t| t.as_union()).is_some_and(|t| t.resolve_type().is_some()));

    assert!(matches!(
        schema.set_type_resolver("Planet", resolve_type),
        Err(ExecutableSchemaError::UnexpectedTypeKind { found: "object", .. }),
    ));
    Ok(())
}

#[test]
fn named_refs_deref_against_the_schema() -> Result<()> {
    let schema = build(SOLAR_SYSTEM)?;

    let planet_ref: NamedTypeRef = crate::executable::ExecutableType::named_ref("Planet");
    assert_eq!(planet_ref.name(), "Planet");
    assert!(planet_ref.deref(&schema).is_ok_and(|t| t.as_object().is_some()));

    let moon_ref = NamedTypeRef::new("Moon");
    assert!(moon_ref.deref(&schema).is_err());

    let thing = schema.get_type("Thing").and_then(|t| t.as_union());
    assert_eq!(thing.map(|thing| thing.member_type_names()), Some(vec!["Planet"]));
    assert_eq!(schema.root_operation_type_name(OperationKind::Query), Some("Query"));
    Ok(())
}
