use crate::file_reader;
use anyhow::Context;
use libsdlmerge::SyntaxTree;
use libsdlmerge::MUTATION_TYPE_NAME;
use libsdlmerge::QUERY_TYPE_NAME;
use libsdlmerge::SUBSCRIPTION_TYPE_NAME;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Arguments shared by every command that reads SDL files from disk.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaFileArgs {
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
        default_values_t=[
            QUERY_TYPE_NAME.to_string(),
            MUTATION_TYPE_NAME.to_string(),
            SUBSCRIPTION_TYPE_NAME.to_string(),
        ],
        help="Root type names whose fields are folded together across all \
             files before the remaining definitions are merged.",
        long="root-type",
        value_delimiter = ',',
    )]
    root_types: Vec<String>,

    #[arg(
        help="Paths to one or more SDL files or directories containing SDL \
             files which should be merged.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub(crate) struct DiscoveredFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

impl SchemaFileArgs {
    /// Finds all SDL files recursively located at or under each path arg,
    /// sorted so that merge order doesn't depend on directory iteration order.
    pub(crate) fn discover(&self) -> Result<DiscoveredFiles, Vec<anyhow::Error>> {
        let mut errors: Vec<anyhow::Error> = vec![];

        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut discovered = DiscoveredFiles::default();
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(err.into());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let has_sdl_ext = entry_path.extension()
                    .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
                    .unwrap_or(false);
                if !has_sdl_ext {
                    log::trace!("Skipping non-SDL file: {entry_path:#?}.");
                    discovered.num_skipped += 1;
                    continue;
                }

                match std::fs::canonicalize(entry_path) {
                    Ok(canonical) => discovered.file_paths.push(canonical),
                    Err(err) => errors.push(anyhow::Error::new(err).context(format!(
                        "Unable to canonicalize {entry_path:#?}",
                    ))),
                }
            }
        }

        // A single file passed explicitly is loaded even if its extension
        // doesn't match `--graphql-file-exts`.
        if discovered.file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding with {first_arg_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            discovered.file_paths.push(first_arg_path.to_owned());
            discovered.num_skipped = discovered.num_skipped.saturating_sub(1);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        discovered.file_paths.sort();
        discovered.file_paths.dedup();
        log::debug!("Found {} SDL files.", discovered.file_paths.len());
        Ok(discovered)
    }

    pub(crate) fn root_types(&self) -> &[String] {
        &self.root_types
    }
}

/// Reads and parses every file in parallel. Results keep the order of
/// `file_paths`.
pub(crate) fn load_trees(
    file_paths: &[PathBuf],
) -> Result<Vec<SyntaxTree>, Vec<anyhow::Error>> {
    let results: Vec<anyhow::Result<SyntaxTree>> = file_paths
        .par_iter()
        .map(|file_path| {
            let content = file_reader::read_sdl(file_path)?;
            let tree = SyntaxTree::from_schema(content.as_str())
                .with_context(|| format!("Error parsing {file_path:#?}"))?;
            log::trace!("Parsed {} definitions from {file_path:#?}.", tree.len());
            Ok(tree)
        })
        .collect();

    let (trees, errors): (Vec<_>, Vec<_>) =
        results.into_iter().partition(|result| result.is_ok());
    if !errors.is_empty() {
        return Err(errors.into_iter().filter_map(Result::err).collect());
    }
    Ok(trees.into_iter().filter_map(Result::ok).collect())
}

/// Folds every root type across `trees` into one definition each, then
/// merges all remaining definitions in order.
pub(crate) fn merge_trees(
    trees: Vec<SyntaxTree>,
    root_types: &[String],
) -> SyntaxTree {
    let mut merged = SyntaxTree::empty_document(None);
    for mut tree in trees {
        for root_type in root_types {
            merged.consume_definition(&mut tree, root_type);
        }
        merged.append_definitions(&tree);
    }
    merged
}
