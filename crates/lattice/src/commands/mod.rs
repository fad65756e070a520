mod find;
mod merge;
mod outline;
mod validate;

use crate::Cli;
use crate::CommandResult;
use find::FindCmd;
use merge::MergeCmd;
use outline::OutlineCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "lattice")]
pub(crate) enum CommandEnum {
    /// Locate a type, field or enum value in the merged schema.
    Find(Box<FindCmd>),

    /// Merge schema fragments and print the result as IDL.
    Merge(Box<MergeCmd>),

    /// Print the outline of the merged schema as JSON.
    Outline(Box<OutlineCmd>),

    /// Merge schema fragments and compile them into an executable schema.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Find(cmd) => cmd.run(cli).await,
            Self::Merge(cmd) => cmd.run(cli).await,
            Self::Outline(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
