use crate::output_utils;
use crate::source_files::SourceFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct OutlineCmd {
    #[arg(
        help="Print the outline on a single line instead of pretty-printing \
             it.",
        long,
    )]
    compact: bool,

    #[command(flatten)]
    sources: SourceFileArgs,
}

#[inherent::inherent]
impl RunnableCommand for OutlineCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let json = self.sources.discover()
            .and_then(|files| files.load_tree())
            .and_then(|tree| {
                let outline = tree.outline();
                Ok(if self.compact {
                    serde_json::to_string(&outline)?
                } else {
                    serde_json::to_string_pretty(&outline)?
                })
            });

        match json {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to outline schema fragments: {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
