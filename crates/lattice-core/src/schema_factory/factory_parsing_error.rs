use crate::executable::ExecutableSchemaError;
use crate::syntax_tree::SyntaxTreeError;
use thiserror::Error;

/// Why [`assemble_schema()`](crate::assemble_schema) produced no schema.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FactoryParsingError {
    #[error("The merged schema failed to compile: {0}")]
    Compile(#[source] ExecutableSchemaError),

    #[error("Failed to merge the schema of the `{config_name}` config: {source}")]
    Fragment {
        config_name: String,
        #[source]
        source: SyntaxTreeError,
    },

    #[error("Failed to attach the functions of the `{config_name}` config: {source}")]
    Wiring {
        config_name: String,
        #[source]
        source: ExecutableSchemaError,
    },
}
