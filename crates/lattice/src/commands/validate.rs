use crate::output_utils;
use crate::source_files::SourceFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use lattice_core::assemble_schema;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    sources: SourceFileArgs,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let files = match self.sources.discover() {
            Ok(files) => files,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to find schema files: {err:#}",
                output_utils::RED_X,
            )),
        };
        let configs = match files.load_configs() {
            Ok(configs) => configs,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to read schema files: {err:#}",
                output_utils::RED_X,
            )),
        };

        match assemble_schema(configs) {
            Ok(schema) => {
                let num_types = schema.types().values()
                    .filter(|type_| type_.as_scalar().is_none_or(|scalar| !scalar.is_builtin()))
                    .count();
                let root_type_names = schema.root_operation_type_names();
                CommandResult::stdout(format_args!(
                    concat!(
                        "{} All GraphQL validated successfully:\n",
                        "  * Analyzed {} files.\n",
                        "  * Skipped {} non-graphql files.\n",
                        "  * Validated {} type definitions.\n",
                        "  * Root operation types: {}.",
                    ),
                    output_utils::GREEN_CHECK,
                    files.file_paths.len(),
                    files.num_skipped_files,
                    num_types,
                    if root_type_names.is_empty() {
                        "none".to_string()
                    } else {
                        root_type_names.join(", ")
                    },
                ))
            },

            Err(err) => CommandResult::stderr(format_args!(
                "{} Errors validating schema: {err}",
                output_utils::RED_X,
            )),
        }
    }
}
