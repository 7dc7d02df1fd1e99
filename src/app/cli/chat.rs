//! Prompt content subcommands.

use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api;
use crate::domain::{AppError, Conversation};

#[derive(Subcommand)]
pub enum MessageCommands {
    /// Add a message (appended unless --index is given)
    Add {
        file: String,
        input: String,
        /// Recorded model output for this turn
        #[arg(short, long)]
        output: Option<String>,
        /// Position to insert at
        #[arg(long)]
        index: Option<usize>,
        /// Edit few-shot examples instead of messages
        #[arg(short, long)]
        example: bool,
    },
    /// Replace the message at an index
    Set {
        file: String,
        index: usize,
        input: String,
        /// Recorded model output for this turn
        #[arg(short, long)]
        output: Option<String>,
        /// Edit few-shot examples instead of messages
        #[arg(short, long)]
        example: bool,
    },
    /// Remove the message at an index
    #[clap(visible_alias = "rm")]
    Remove {
        file: String,
        index: usize,
        /// Edit few-shot examples instead of messages
        #[arg(short, long)]
        example: bool,
    },
}

#[derive(Subcommand)]
pub enum ContextCommands {
    /// Set the system context
    Set { file: String, text: String },
    /// Remove the system context
    Clear { file: String },
}

fn turn_label(example: bool) -> &'static str {
    if example { "example" } else { "message" }
}

pub fn run_message(config: Option<PathBuf>, command: MessageCommands) -> Result<(), AppError> {
    let ctx = api::open_context(config.as_deref())?;

    match command {
        MessageCommands::Add { file, input, output, index, example } => {
            let turn = Conversation { input, output };
            let prompt = api::add_message(&ctx, &file, turn, index, example)?;
            let count = prompt.as_chat().map_or(0, |chat| {
                if example {
                    chat.examples.as_ref().map_or(0, Vec::len)
                } else {
                    chat.messages.len()
                }
            });
            println!("✅ Added {} ({} total)", turn_label(example), count);
        }
        MessageCommands::Set { file, index, input, output, example } => {
            let turn = Conversation { input, output };
            api::replace_message(&ctx, &file, index, turn, example)?;
            println!("✅ Updated {} {}", turn_label(example), index);
        }
        MessageCommands::Remove { file, index, example } => {
            api::remove_message(&ctx, &file, index, example)?;
            println!("✅ Removed {} {}", turn_label(example), index);
        }
    }
    Ok(())
}

pub fn run_context(config: Option<PathBuf>, command: ContextCommands) -> Result<(), AppError> {
    let ctx = api::open_context(config.as_deref())?;

    match command {
        ContextCommands::Set { file, text } => {
            api::set_context(&ctx, &file, Some(text))?;
            println!("✅ Set context");
        }
        ContextCommands::Clear { file } => {
            api::set_context(&ctx, &file, None)?;
            println!("✅ Cleared context");
        }
    }
    Ok(())
}

pub fn run_text(config: Option<PathBuf>, file: &str, text: &str) -> Result<(), AppError> {
    let ctx = api::open_context(config.as_deref())?;
    api::set_text(&ctx, file, text)?;
    println!("✅ Updated prompt text");
    Ok(())
}
