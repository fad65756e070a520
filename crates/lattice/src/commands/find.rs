use crate::output_utils;
use crate::source_files::SourceFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use lattice_core::ast;
use lattice_core::NameMatcher;
use lattice_core::SyntaxTree;

#[derive(Debug, clap::Args)]
pub(crate) struct FindCmd {
    #[arg(
        help="Name of the type to look for.",
        long="type",
        value_name="NAME",
    )]
    type_name: String,

    #[arg(
        help="Name of a field (or input field, or enum value) on that type.",
        long="field",
        value_name="NAME",
    )]
    field_name: Option<String>,

    #[arg(
        help="Treat --type and --field as regular expressions. The first \
             match in document order wins.",
        long,
    )]
    regex: bool,

    #[command(flatten)]
    sources: SourceFileArgs,
}
impl FindCmd {
    fn matcher(&self, name: &str) -> anyhow::Result<NameMatcher> {
        if self.regex {
            Ok(NameMatcher::pattern(name)?)
        } else {
            Ok(NameMatcher::from(name))
        }
    }

    /// `Ok(None)` when nothing matched.
    fn find(&self, tree: &SyntaxTree) -> anyhow::Result<Option<String>> {
        let type_matcher = self.matcher(&self.type_name)?;
        let Some(field_name) = &self.field_name else {
            return Ok(tree.find(type_matcher).map(|type_def| {
                ast::print(&ast::schema::Document {
                    definitions: vec![
                        ast::schema::Definition::TypeDefinition(type_def.clone()),
                    ],
                })
            }));
        };

        let field_matcher = self.matcher(field_name)?;
        if let Some(found) = tree.find_field(&type_matcher, &field_matcher) {
            return Ok(Some(serde_json::to_string_pretty(&found.meta)?));
        }
        if let Some(found) = tree.find_input_field(&type_matcher, &field_matcher) {
            return Ok(Some(serde_json::to_string_pretty(&found.meta)?));
        }
        Ok(tree.find_enum_definition(&type_matcher, &field_matcher)
            .map(|found| format!("{}.{}", found.definition.name, found.value.name)))
    }
}

#[inherent::inherent]
impl RunnableCommand for FindCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let found = self.sources.discover()
            .and_then(|files| files.load_tree())
            .and_then(|tree| self.find(&tree));

        match found {
            Ok(Some(found)) => CommandResult::stdout(format_args!("{}", found.trim_end())),
            Ok(None) => CommandResult::stderr(format_args!(
                "{} Nothing matches {}{}.",
                output_utils::RED_X,
                self.type_name,
                self.field_name.as_deref()
                    .map(|field_name| format!(".{field_name}"))
                    .unwrap_or_default(),
            )),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to search schema fragments: {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
