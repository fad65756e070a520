use crate::executable::ExecutableSchemaError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SyntaxTreeError {
    #[error(
        "Failed to compile the syntax tree into an executable schema: {0}"
    )]
    ExecutableSchema(#[from] ExecutableSchemaError),

    #[error("IDL syntax error: {err}")]
    Parse {
        err: String,
    },

    #[error(
        "The syntax tree printed to IDL that does not parse back: {err}"
    )]
    Serialization {
        err: String,
        sdl: String,
    },
}
