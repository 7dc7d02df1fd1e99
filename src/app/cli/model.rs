//! Model and group subcommands.

use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api;
use crate::domain::AppError;

use super::describe_target;

#[derive(Subcommand)]
pub enum ModelCommands {
    /// Target a model by name, converting the prompt if its kind differs
    Set { file: String, model: String },
    /// Move to the first model of a vendor group with the same kind
    #[clap(visible_alias = "g")]
    Group { file: String, group: String },
}

pub fn run_model(config: Option<PathBuf>, command: ModelCommands) -> Result<(), AppError> {
    let ctx = api::open_context(config.as_deref())?;

    let prompt = match command {
        ModelCommands::Set { file, model } => api::set_model(&ctx, &file, &model)?,
        ModelCommands::Group { file, group } => api::set_group(&ctx, &file, &group)?,
    };
    println!("✅ Now a {}", describe_target(&prompt));
    Ok(())
}
