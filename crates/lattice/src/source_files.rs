use anyhow::Context;
use lattice_core::SyntaxTree;
use lattice_core::TypeConfig;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Arguments shared by every command that reads schema fragments from disk.
#[derive(Debug, clap::Args)]
pub(crate) struct SourceFileArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// The fragment files found under the paths passed on the command line.
#[derive(Debug)]
pub(crate) struct SourceFiles {
    /// Canonical paths, sorted so merge order is reproducible.
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
}
impl SourceFiles {
    /// Read every file, in order, as a [`TypeConfig`] named after its path.
    pub fn load_configs(&self) -> anyhow::Result<Vec<TypeConfig>> {
        self.file_paths.iter()
            .map(|path| {
                let schema = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                Ok(TypeConfig::new(path.display().to_string(), schema))
            })
            .collect()
    }

    /// Strictly merge every file, in order, into one [`SyntaxTree`].
    pub fn load_tree(&self) -> anyhow::Result<SyntaxTree> {
        let mut tree = SyntaxTree::empty_document();
        for config in self.load_configs()? {
            log::debug!("Merging {}...", config.name);
            tree.try_append_definitions(config.schema)
                .with_context(|| format!("Failed to merge {}", config.name))?;
        }
        Ok(tree)
    }
}

impl SourceFileArgs {
    /// Find all schema files recursively located at or under each path.
    pub fn discover(&self) -> anyhow::Result<SourceFiles> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry.with_context(|| format!(
                    "Failed to walk the filesystem at/under {}",
                    path.display(),
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let has_graphql_ext = entry_path.extension()
                    .is_some_and(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()));
                if has_graphql_ext {
                    log::trace!("Found file at {entry_path:#?}.");
                    file_paths.push(canonicalize(entry_path)?);
                } else {
                    num_skipped_files += 1;
                }
            }
        }

        // A single file passed explicitly is loaded even if its extension
        // is not in `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            let canonicalized_first_arg_path = canonicalize(first_arg_path)?;
            log::warn!(
                "Proceeding with {canonicalized_first_arg_path:#?} even though \
                it doesn't match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(canonicalized_first_arg_path);
            num_skipped_files = num_skipped_files.saturating_sub(1);
        }

        file_paths.sort();
        file_paths.dedup();
        log::debug!("Found {} GraphQL files.", file_paths.len());

        Ok(SourceFiles {
            file_paths,
            num_skipped_files,
        })
    }
}

fn canonicalize(path: &std::path::Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))
}
