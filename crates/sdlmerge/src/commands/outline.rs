use crate::commands::load_merged;
use crate::commands::LoadedSchema;
use crate::output_utils;
use crate::schema_files::SchemaFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libsdlmerge::DefinitionKind;

#[derive(Debug, clap::Args)]
pub(crate) struct OutlineCmd {
    #[command(flatten)]
    files: SchemaFileArgs,

    #[arg(
        help="Print the outline as a JSON array.",
        long,
    )]
    json: bool,
}

#[derive(Debug, serde::Serialize)]
struct OutlineEntry<'a> {
    name: &'a str,
    kind: DefinitionKind,
}

#[inherent::inherent]
impl RunnableCommand for OutlineCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let LoadedSchema { merged, num_files, num_skipped } = match load_merged(&self.files) {
            Ok(loaded) => loaded,
            Err(result) => return result,
        };

        let entries: Vec<OutlineEntry<'_>> = merged.outline()
            .into_iter()
            .map(|(name, def)| OutlineEntry {
                name,
                kind: DefinitionKind::from(def),
            })
            .collect();

        if self.json {
            return match serde_json::to_string_pretty(&entries) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(err) => CommandResult::stderr(format_args!(
                    "{} Unable to serialize outline: {err}",
                    output_utils::RED_X,
                )),
            };
        }

        let lines = entries.iter()
            .map(|entry| format!("  {:<28} {}", entry.kind.name(), entry.name))
            .collect::<Vec<_>>()
            .join("\n");
        CommandResult::stdout(format_args!(
            concat!(
                "{} {} definitions from {} files ",
                "(skipped {} non-SDL files):\n",
                "{}",
            ),
            output_utils::GREEN_CHECK,
            entries.len(),
            num_files,
            num_skipped,
            lines,
        ))
    }
}
