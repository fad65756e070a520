use crate::executable::ExecutableSchema;
use crate::executable::ExecutableSchemaError;
use crate::schema_factory::FactoryParsingError;
use crate::syntax_tree::SyntaxTree;
use crate::type_config::ClassifiedConfig;
use crate::type_config::ConfigKind;
use crate::type_config::TypeConfig;
use crate::OperationKind;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, FactoryParsingError>;

/// Merge the schema of every config into one document, compile it, and
/// attach each config's functions to the compiled types.
///
/// Configs are processed in iteration order, which decides merge order (and
/// therefore the order of fields and enum values in the result). Configs
/// without both a name and a schema are skipped.
///
/// Wiring works in two passes:
///
/// * For every compiled type that is not reserved (see
///   [`ExecutableSchema::is_reserved_type_name()`]) and has a config of the
///   same name, the config's `fields` resolvers are attached to that type.
///   Scalar configs also attach their coercers, and interface/union configs
///   their `resolve_type`. When two configs share a name, the later one is
///   used.
/// * The `queries`, `mutations` and `subscriptions` of every config are then
///   attached to the compiled root operation types, in config order.
///
/// Any failure aborts assembly; no partial schema is returned.
pub fn assemble_schema(
    configs: impl IntoIterator<Item = TypeConfig>,
) -> Result<ExecutableSchema> {
    let mut tree = SyntaxTree::empty_document();
    let mut classified = vec![];
    for config in configs {
        let Some(config) = ClassifiedConfig::classify(config) else {
            log::warn!("Skipping a config without both a name and a schema.");
            continue;
        };

        tree.try_append_definitions(config.config().schema.as_str())
            .map_err(|source| log_failure(FactoryParsingError::Fragment {
                config_name: config.name().to_string(),
                source,
            }))?;
        log::debug!("Merged the `{}` config as {}.", config.name(), config.kind().name());
        classified.push(config);
    }

    let mut configs_by_name: IndexMap<&str, &ClassifiedConfig> = IndexMap::new();
    for config in &classified {
        if configs_by_name.insert(config.name(), config).is_some() {
            log::warn!(
                "More than one config is named `{}`; the last one's functions \
                are used for that type.",
                config.name(),
            );
        }
    }

    let mut schema = ExecutableSchema::build(tree.document())
        .map_err(|err| log_failure(FactoryParsingError::Compile(err)))?;

    let type_names: Vec<String> = schema.types().keys().cloned().collect();
    for type_name in type_names {
        if schema.is_reserved_type_name(&type_name) {
            continue;
        }
        let Some(config) = configs_by_name.get(type_name.as_str()) else {
            continue;
        };
        attach_type_functions(&mut schema, &type_name, config)
            .map_err(|source| log_failure(FactoryParsingError::Wiring {
                config_name: config.name().to_string(),
                source,
            }))?;
    }

    for config in &classified {
        attach_root_resolvers(&mut schema, config.config())
            .map_err(|source| log_failure(FactoryParsingError::Wiring {
                config_name: config.name().to_string(),
                source,
            }))?;
    }

    Ok(schema)
}

fn attach_type_functions(
    schema: &mut ExecutableSchema,
    type_name: &str,
    classified: &ClassifiedConfig,
) -> std::result::Result<(), ExecutableSchemaError> {
    let config = classified.config();
    for (field_name, resolver) in config.fields.iter().flatten() {
        schema.set_field_resolver(type_name, field_name, resolver.clone())?;
    }

    match classified.kind() {
        ConfigKind::Scalar => schema.set_scalar_coercers(
            type_name,
            config.parse_value.clone(),
            config.parse_literal.clone(),
            config.serialize.clone(),
        )?,

        ConfigKind::Interface | ConfigKind::Union => {
            if let Some(resolve_type) = &config.resolve_type {
                schema.set_type_resolver(type_name, resolve_type.clone())?;
            }
        },

        ConfigKind::InputObject | ConfigKind::Object => (),
    }
    Ok(())
}

fn attach_root_resolvers(
    schema: &mut ExecutableSchema,
    config: &TypeConfig,
) -> std::result::Result<(), ExecutableSchemaError> {
    for kind in OperationKind::ALL {
        let Some(resolvers) = config.root_resolvers(kind) else {
            continue;
        };
        let root_type_name = schema.root_operation_type_name(kind)
            .map(str::to_string)
            .ok_or_else(|| ExecutableSchemaError::UndefinedRootOperationType {
                operation: kind.default_type_name(),
                type_name: kind.default_type_name().to_string(),
            })?;
        for (field_name, resolver) in resolvers {
            schema.set_field_resolver(&root_type_name, field_name, resolver.clone())?;
        }
    }
    Ok(())
}

fn log_failure(err: FactoryParsingError) -> FactoryParsingError {
    log::error!("Schema assembly failed: {err}");
    err
}
