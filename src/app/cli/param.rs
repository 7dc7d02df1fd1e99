//! Parameter subcommands.

use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum ParamCommands {
    /// Set a parameter value, enabling it if needed
    Set {
        file: String,
        name: String,
        /// New value, converted to the parameter's declared type
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Enable a parameter with its catalog default
    #[clap(visible_alias = "on")]
    Enable { file: String, name: String },
    /// Disable a parameter
    #[clap(visible_aliases = ["off", "rm"])]
    Remove { file: String, name: String },
}

pub fn run_param(config: Option<PathBuf>, command: ParamCommands) -> Result<(), AppError> {
    let ctx = api::open_context(config.as_deref())?;

    match command {
        ParamCommands::Set { file, name, value } => {
            let prompt = api::set_parameter(&ctx, &file, &name, &value)?;
            if let Some(parameter) = prompt.parameter(&name) {
                println!("✅ Set {} = {}", name, parameter.value);
            }
        }
        ParamCommands::Enable { file, name } => {
            let prompt = api::enable_parameter(&ctx, &file, &name)?;
            if let Some(parameter) = prompt.parameter(&name) {
                println!("✅ Enabled {} = {}", name, parameter.value);
            }
        }
        ParamCommands::Remove { file, name } => {
            api::remove_parameter(&ctx, &file, &name)?;
            println!("✅ Removed {}", name);
        }
    }
    Ok(())
}
