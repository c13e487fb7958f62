use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use smartroute_planner::json::schema::{generate_input_json_schema, generate_output_json_schema};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum SchemaKind {
    /// Planning input accepted by `plan`
    #[default]
    Input,
    /// Trip plan written by `plan`
    Output,
}

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    JsonSchema {
        /// File receiving the schema
        #[arg(long, short = 'o')]
        out: PathBuf,

        #[arg(long, value_enum, default_value_t = SchemaKind::Input)]
        kind: SchemaKind,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out, kind } => {
            let schema = match kind {
                SchemaKind::Input => generate_input_json_schema()?,
                SchemaKind::Output => generate_output_json_schema()?,
            };

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, schema)?;
        }
    }

    Ok(())
}
