use crate::ast;
use crate::resolver::Resolver;
use crate::resolver::ScalarCoercer;
use crate::resolver::TypeResolver;
use crate::type_config::declares_operations;
use crate::type_config::implements_named_sdl;
use crate::type_config::is_interface_config;
use crate::type_config::is_scalar_config;
use crate::type_config::is_type_config;
use crate::type_config::is_union_config;
use crate::type_config::represents_type;
use crate::type_config::TypeConfig;
use crate::OperationKind;

fn identity_coercer() -> ScalarCoercer {
    ScalarCoercer::new(|value| Ok(value.clone()))
}

fn null_resolver() -> Resolver {
    Resolver::new(|_| Ok(ast::query::Value::Null))
}

mod named_sdl {
    use super::*;

    #[test]
    fn name_and_schema_present() {
        let config = TypeConfig::new("Planet", "type Planet { id: ID }");
        assert!(implements_named_sdl(&config));
        assert!(is_type_config(&config, false));
        assert!(is_type_config(&config, true));
    }

    #[test]
    fn blank_name_or_schema_disqualifies() {
        assert!(!implements_named_sdl(&TypeConfig::new("", "type Planet { id: ID }")));
        assert!(!implements_named_sdl(&TypeConfig::new("Planet", "   ")));
        assert!(!is_type_config(&TypeConfig::default(), true));
    }

    #[test]
    fn operations_are_optional_but_detected() {
        let config = TypeConfig::new("Planet", "type Planet { id: ID }");
        assert!(!declares_operations(&config));

        let config = config.with_query("planet", null_resolver());
        assert!(declares_operations(&config));
        assert!(is_type_config(&config, true));
        assert_eq!(
            config.root_resolvers(OperationKind::Query)
                .map(|resolvers| resolvers.keys().cloned().collect::<Vec<_>>()),
            Some(vec!["planet".to_string()]),
        );
        assert!(config.root_resolvers(OperationKind::Mutation).is_none());

        let config = TypeConfig::new("Clock", "type Subscription { tick: Int }")
            .with_subscription("tick", null_resolver());
        assert!(declares_operations(&config));
        assert!(config.root_resolvers(OperationKind::Subscription).is_some_and(|r| r.contains_key("tick")));
    }
}

mod kind_predicates {
    use super::*;

    #[test]
    fn scalar_requires_all_three_coercers() {
        let mut config = TypeConfig::new("Date", "scalar Date");
        assert!(!is_scalar_config(&config));

        config.parse_value = Some(identity_coercer());
        config.parse_literal = Some(identity_coercer());
        assert!(!is_scalar_config(&config));

        config.serialize = Some(identity_coercer());
        assert!(is_scalar_config(&config));
    }

    #[test]
    fn union_requires_resolve_type_but_interface_does_not() {
        let config = TypeConfig::new("Node", "interface Node { id: ID! }");
        assert!(is_interface_config(&config));
        assert!(!is_union_config(&config));

        let config = config.with_resolve_type(TypeResolver::new(|_| None));
        assert!(is_interface_config(&config));
        assert!(is_union_config(&config));
    }
}

mod represents {
    use super::*;

    #[test]
    fn shallow_compares_names() {
        let config = TypeConfig::new("Planet", "type Star { id: ID }");
        assert!(represents_type(&config, "Planet", false));
        assert!(!represents_type(&config, "Star", false));
    }

    #[test]
    fn deep_checks_every_outline_bucket() {
        let config = TypeConfig::new("Planet", concat!(
            "type Planet { id: ID }\n",
            "enum Sector { INNER OUTER }\n",
            "interface Body { mass: Float }\n",
            "union Thing = Planet\n",
            "scalar Date\n",
            "input PlanetFilter { id: ID }\n",
        ));

        for name in ["Planet", "Sector", "Body", "Thing", "Date"] {
            assert!(represents_type(&config, name, true), "{name} should be represented");
        }
        assert!(!represents_type(&config, "PlanetFilter", true));
        assert!(!represents_type(&config, "Moon", true));
    }

    #[test]
    fn deep_check_of_unparsable_schema_is_false() {
        let config = TypeConfig::new("Planet", "type Planet {");
        assert!(!represents_type(&config, "Planet", true));
    }
}
