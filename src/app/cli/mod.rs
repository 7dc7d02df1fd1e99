//! CLI Adapter.

mod chat;
mod model;
mod param;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api;
use crate::domain::{AppError, InterfaceType, Prompt};

#[derive(Parser)]
#[command(name = "promptide")]
#[command(version)]
#[command(about = "Edit LLM prompt documents against a model capability catalog", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./promptide.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new prompt document targeting the first model of its kind
    #[clap(visible_alias = "n")]
    New {
        /// Prompt document path
        file: String,
        /// Interface kind (chat, completion)
        #[arg(short, long, value_parser = parse_interface)]
        interface: Option<InterfaceType>,
        /// Overwrite an existing document
        #[arg(short, long)]
        force: bool,
    },
    /// Show the model and parameter slots of a prompt
    #[clap(visible_alias = "s")]
    Show {
        file: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List catalog groups and their models
    #[clap(visible_alias = "ls")]
    Models {
        /// Only models of this interface kind
        #[arg(short, long, value_parser = parse_interface)]
        interface: Option<InterfaceType>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit enabled parameters
    #[clap(visible_alias = "p")]
    Param {
        #[command(subcommand)]
        command: param::ParamCommands,
    },
    /// Change the target model or vendor group
    #[clap(visible_alias = "m")]
    Model {
        #[command(subcommand)]
        command: model::ModelCommands,
    },
    /// Switch the editing mode, starting over with a default prompt of that kind
    Mode {
        file: String,
        #[arg(value_parser = parse_interface)]
        interface: InterfaceType,
    },
    /// Convert the prompt to the other shape, keeping its model
    Convert {
        file: String,
        #[arg(value_parser = parse_interface)]
        interface: InterfaceType,
    },
    /// Edit chat messages and few-shot examples
    #[clap(visible_alias = "msg")]
    Message {
        #[command(subcommand)]
        command: chat::MessageCommands,
    },
    /// Set or clear the chat context
    Context {
        #[command(subcommand)]
        command: chat::ContextCommands,
    },
    /// Replace the text of a completion prompt
    Text { file: String, text: String },
}

fn parse_interface(value: &str) -> Result<InterfaceType, String> {
    value.parse().map_err(|e: crate::domain::CatalogError| e.to_string())
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New { file, interface, force } => run_new(cli.config, &file, interface, force),
        Commands::Show { file, json } => run_show(cli.config, &file, json),
        Commands::Models { interface, json } => run_models(cli.config, interface, json),
        Commands::Param { command } => param::run_param(cli.config, command),
        Commands::Model { command } => model::run_model(cli.config, command),
        Commands::Mode { file, interface } => run_mode(cli.config, &file, interface),
        Commands::Convert { file, interface } => run_convert(cli.config, &file, interface),
        Commands::Message { command } => chat::run_message(cli.config, command),
        Commands::Context { command } => chat::run_context(cli.config, command),
        Commands::Text { file, text } => chat::run_text(cli.config, &file, &text),
    };

    match result {
        Ok(()) => {}
        Err(e) if e.is_noop() => {
            println!("ℹ️  {}; nothing to change", e);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// One-line description of a prompt's target, e.g. `chat prompt for Acme/acme-chat`.
pub(crate) fn describe_target(prompt: &Prompt) -> String {
    format!("{} prompt for {}", prompt.kind(), prompt.model())
}

fn run_new(
    config: Option<PathBuf>,
    file: &str,
    interface: Option<InterfaceType>,
    force: bool,
) -> Result<(), AppError> {
    let ctx = api::open_context(config.as_deref())?;
    let prompt = api::create_prompt(&ctx, file, interface, force)?;
    println!("✅ Created {} at {}", describe_target(&prompt), file);
    Ok(())
}

fn run_show(config: Option<PathBuf>, file: &str, json: bool) -> Result<(), AppError> {
    let ctx = api::open_context(config.as_deref())?;
    let summary = api::describe_prompt(&ctx, file)?;

    if json {
        let text = serde_json::to_string_pretty(&summary)
            .map_err(|e| AppError::DocumentParse(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    println!("{} ({} prompt, {} turn(s))", summary.model, summary.interface, summary.turns);
    println!("Parameters:");
    for slot in &summary.parameters {
        let mut flags = Vec::new();
        if slot.required {
            flags.push("required");
        }
        if slot.multi_line {
            flags.push("multi-line");
        }
        let flags =
            if flags.is_empty() { String::new() } else { format!(" [{}]", flags.join(", ")) };

        match &slot.value {
            Some(value) => println!("  [x] {} = {}{}", slot.name, value, flags),
            None => println!("  [ ] {} ({}){}", slot.name, slot.kind, flags),
        }
    }
    Ok(())
}

fn run_models(
    config: Option<PathBuf>,
    interface: Option<InterfaceType>,
    json: bool,
) -> Result<(), AppError> {
    let ctx = api::open_context(config.as_deref())?;
    let groups = api::list_models(ctx.catalog(), interface);

    if json {
        let text = serde_json::to_string_pretty(&groups)
            .map_err(|e| AppError::DocumentParse(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    for group in groups {
        println!("{}:", group.group);
        for model in group.models {
            match model.description {
                Some(description) => {
                    println!("  {} ({}) - {}", model.name, model.interface, description)
                }
                None => println!("  {} ({})", model.name, model.interface),
            }
        }
    }
    Ok(())
}

fn run_mode(config: Option<PathBuf>, file: &str, interface: InterfaceType) -> Result<(), AppError> {
    let ctx = api::open_context(config.as_deref())?;
    let before = api::load_prompt(&ctx, file)?;
    if before.kind() == interface {
        println!("✅ {} is already a {} prompt", file, interface);
        return Ok(());
    }
    let prompt = api::switch_mode(&ctx, file, interface)?;
    println!("✅ Started a new {}", describe_target(&prompt));
    Ok(())
}

fn run_convert(
    config: Option<PathBuf>,
    file: &str,
    interface: InterfaceType,
) -> Result<(), AppError> {
    let ctx = api::open_context(config.as_deref())?;
    let (prompt, loss) = api::convert(&ctx, file, interface)?;
    println!("✅ Converted to {}", describe_target(&prompt));
    if !loss.is_lossless() {
        println!("⚠️  Dropped:");
        for line in loss.describe() {
            println!("  • {}", line);
        }
    }
    Ok(())
}
