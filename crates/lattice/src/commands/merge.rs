use crate::output_utils;
use crate::source_files::SourceFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct MergeCmd {
    #[command(flatten)]
    sources: SourceFileArgs,
}

#[inherent::inherent]
impl RunnableCommand for MergeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let sdl = self.sources.discover()
            .and_then(|files| files.load_tree())
            .and_then(|tree| tree.to_sdl().map_err(anyhow::Error::from));

        match sdl {
            Ok(sdl) => CommandResult::stdout(format_args!("{}", sdl.trim_end())),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to merge schema fragments: {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
