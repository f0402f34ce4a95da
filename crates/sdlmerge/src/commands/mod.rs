mod merge;
mod outline;

use crate::Cli;
use crate::CommandResult;
use merge::MergeCmd;
use outline::OutlineCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "sdlmerge")]
pub(crate) enum CommandEnum {
    /// Merge SDL files into a single schema and print it.
    Merge(Box<MergeCmd>),

    /// Merge SDL files and list the resulting top-level definitions.
    Outline(Box<OutlineCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Merge(cmd) => cmd.run(cli).await,
            Self::Outline(cmd) => cmd.run(cli).await,
        }
    }
}

/// The merged result of every SDL file a command was pointed at.
pub(super) struct LoadedSchema {
    pub merged: libsdlmerge::SyntaxTree,
    pub num_files: usize,
    pub num_skipped: usize,
}

/// Discovers, loads, and merges the SDL files named by `args`, or renders
/// the errors that prevented it.
pub(super) fn load_merged(
    args: &crate::schema_files::SchemaFileArgs,
) -> Result<LoadedSchema, CommandResult> {
    use crate::output_utils;
    use crate::schema_files;

    let render_errors = |errors: Vec<anyhow::Error>| CommandResult::stderr(format_args!(
        "{} Unable to load SDL files:\n{}",
        output_utils::RED_X,
        errors.iter()
            .map(|err| format!("  * {err:#}"))
            .collect::<Vec<_>>()
            .join("\n"),
    ));

    let discovered = args.discover().map_err(render_errors)?;
    let trees = schema_files::load_trees(&discovered.file_paths).map_err(render_errors)?;
    let num_files = trees.len();
    Ok(LoadedSchema {
        merged: schema_files::merge_trees(trees, args.root_types()),
        num_files,
        num_skipped: discovered.num_skipped,
    })
}
