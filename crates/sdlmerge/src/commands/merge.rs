use crate::commands::load_merged;
use crate::commands::LoadedSchema;
use crate::output_utils;
use crate::schema_files::SchemaFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct MergeCmd {
    #[command(flatten)]
    files: SchemaFileArgs,
}

#[inherent::inherent]
impl RunnableCommand for MergeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let LoadedSchema { merged, num_files, num_skipped } = match load_merged(&self.files) {
            Ok(loaded) => loaded,
            Err(result) => return result,
        };
        log::info!(
            "Merged {num_files} files into {} definitions (skipped {num_skipped} \
            non-SDL files).",
            merged.len(),
        );

        match merged.to_sdl() {
            Ok(sdl) => CommandResult::stdout(format_args!("{}", sdl.trim_end())),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Unable to print merged schema: {err}",
                output_utils::RED_X,
            )),
        }
    }
}
