//! Document-level operations.
//!
//! Each edit reads a prompt document, applies one pure domain operation and
//! writes the result back. Nothing is written when the operation fails.

use std::path::Path;

use serde::Serialize;

use crate::app::AppContext;
use crate::app::config::PromptideConfig;
use crate::domain::{
    AppError, Chat, ConversionLoss, Conversation, InterfaceType, Model, ModelSwitch,
    ParameterEngine, ParameterKind, ParameterValue, Prompt, PromptEditError,
};
use crate::ports::{CapabilityCatalog, PromptDocumentStore};
use crate::services::{FilesystemDocumentStore, YamlCapabilityCatalog, YamlPromptCodec};

/// Build the filesystem-backed context for the current directory.
pub fn open_context(
    config_path: Option<&Path>,
) -> Result<AppContext<YamlCapabilityCatalog, FilesystemDocumentStore>, AppError> {
    let documents = FilesystemDocumentStore::current()?;
    let config = PromptideConfig::load(config_path, documents.root())?;
    let catalog = match &config.catalog.path {
        Some(path) => YamlCapabilityCatalog::from_path(path)?,
        None => YamlCapabilityCatalog::embedded()?,
    };
    Ok(AppContext::new(catalog, documents, config))
}

/// One parameter slot as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotSummary {
    pub name: String,
    pub display_name: String,
    pub kind: ParameterKind,
    pub required: bool,
    pub multi_line: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ParameterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SlotSummary {
    pub fn is_enabled(&self) -> bool {
        self.value.is_some()
    }
}

/// Overview of a prompt document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptSummary {
    pub model: Model,
    pub interface: InterfaceType,
    /// Chat messages, or 1 for a completion.
    pub turns: usize,
    pub parameters: Vec<SlotSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub interface: InterfaceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub group: String,
    pub models: Vec<ModelSummary>,
}

pub fn load_prompt<C, S>(ctx: &AppContext<C, S>, path: &str) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    let text = ctx.documents().read_document(path)?;
    YamlPromptCodec.decode(&text).map_err(|e| match e {
        AppError::DocumentParse(message) => AppError::DocumentParse(format!("{path}: {message}")),
        other => other,
    })
}

fn save_prompt<C, S>(ctx: &AppContext<C, S>, path: &str, prompt: &Prompt) -> Result<(), AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    let text = YamlPromptCodec.encode(prompt)?;
    ctx.documents().write_document(path, &text)
}

fn edit_document<C, S, F>(ctx: &AppContext<C, S>, path: &str, edit: F) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
    F: FnOnce(&Prompt) -> Result<Prompt, AppError>,
{
    let prompt = load_prompt(ctx, path)?;
    let edited = edit(&prompt)?;
    if edited != prompt {
        save_prompt(ctx, path, &edited)?;
    }
    Ok(edited)
}

fn require_chat(prompt: &Prompt) -> Result<&Chat, PromptEditError> {
    prompt.as_chat().ok_or(PromptEditError::WrongInterface {
        expected: InterfaceType::Chat,
        actual: prompt.kind(),
    })
}

/// Write a fresh default prompt. `interface` falls back to the configured default.
pub fn create_prompt<C, S>(
    ctx: &AppContext<C, S>,
    path: &str,
    interface: Option<InterfaceType>,
    force: bool,
) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    if !force && ctx.documents().document_exists(path) {
        return Err(AppError::DocumentExists(path.to_string()));
    }
    let interface = interface.unwrap_or(ctx.config().editor.default_interface);
    let prompt = ModelSwitch::create_default_prompt(ctx.catalog(), interface)?;
    save_prompt(ctx, path, &prompt)?;
    Ok(prompt)
}

pub fn describe_prompt<C, S>(ctx: &AppContext<C, S>, path: &str) -> Result<PromptSummary, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    let prompt = load_prompt(ctx, path)?;
    let surface = ParameterEngine::surface(&prompt, ctx.catalog())?;
    let threshold = ctx.config().editor.multi_line_threshold;

    let parameters = surface
        .slots()
        .iter()
        .map(|slot| SlotSummary {
            name: slot.descriptor.name.clone(),
            display_name: slot.descriptor.display_name.clone(),
            kind: slot.descriptor.kind,
            required: slot.descriptor.is_required,
            multi_line: slot.descriptor.is_multi_line(threshold),
            value: slot.value.map(|p| p.value.clone()),
            description: slot.descriptor.description.clone(),
        })
        .collect();

    let turns = match &prompt {
        Prompt::Completion(_) => 1,
        Prompt::Chat(chat) => chat.messages.len(),
    };

    Ok(PromptSummary { model: prompt.model().clone(), interface: prompt.kind(), turns, parameters })
}

/// Set a parameter from user text. The text is coerced to the declared type.
pub fn set_parameter<C, S>(
    ctx: &AppContext<C, S>,
    path: &str,
    name: &str,
    raw: &str,
) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    edit_document(ctx, path, |p| ParameterEngine::change(p, ctx.catalog(), name, raw))
}

pub fn enable_parameter<C, S>(
    ctx: &AppContext<C, S>,
    path: &str,
    name: &str,
) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    edit_document(ctx, path, |p| ParameterEngine::enable(p, ctx.catalog(), name))
}

pub fn remove_parameter<C, S>(
    ctx: &AppContext<C, S>,
    path: &str,
    name: &str,
) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    edit_document(ctx, path, |p| ParameterEngine::remove(p, ctx.catalog(), name))
}

pub fn set_model<C, S>(ctx: &AppContext<C, S>, path: &str, model: &str) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    edit_document(ctx, path, |p| ModelSwitch::reset_model(p, ctx.catalog(), model))
}

pub fn set_group<C, S>(ctx: &AppContext<C, S>, path: &str, group: &str) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    edit_document(ctx, path, |p| ModelSwitch::switch_group(p, ctx.catalog(), group))
}

/// Switch the editing mode; a new mode starts over with a default prompt.
pub fn switch_mode<C, S>(
    ctx: &AppContext<C, S>,
    path: &str,
    interface: InterfaceType,
) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    edit_document(ctx, path, |p| ModelSwitch::switch_interface(p, ctx.catalog(), interface))
}

/// Convert the prompt's shape in place, keeping its model, and report what was lost.
pub fn convert<C, S>(
    ctx: &AppContext<C, S>,
    path: &str,
    interface: InterfaceType,
) -> Result<(Prompt, ConversionLoss), AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    let mut loss = ConversionLoss::default();
    let prompt = edit_document(ctx, path, |p| {
        loss = p.conversion_loss(interface);
        Ok(p.convert_to(interface))
    })?;
    Ok((prompt, loss))
}

/// Insert a chat message (or few-shot example) at `index`, appending by default.
pub fn add_message<C, S>(
    ctx: &AppContext<C, S>,
    path: &str,
    turn: Conversation,
    index: Option<usize>,
    example: bool,
) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    edit_document(ctx, path, |p| {
        let chat = require_chat(p)?;
        let edited = if example {
            let len = chat.examples.as_ref().map_or(0, Vec::len);
            chat.with_example_inserted(index.unwrap_or(len), turn)?
        } else {
            chat.with_message_inserted(index.unwrap_or(chat.messages.len()), turn)?
        };
        Ok(edited.into())
    })
}

/// Replace the message or few-shot example at `index`.
pub fn replace_message<C, S>(
    ctx: &AppContext<C, S>,
    path: &str,
    index: usize,
    turn: Conversation,
    example: bool,
) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    edit_document(ctx, path, |p| {
        let chat = require_chat(p)?;
        let edited = if example {
            chat.with_example_replaced(index, turn)?
        } else {
            chat.with_message_replaced(index, turn)?
        };
        Ok(edited.into())
    })
}

pub fn remove_message<C, S>(
    ctx: &AppContext<C, S>,
    path: &str,
    index: usize,
    example: bool,
) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    edit_document(ctx, path, |p| {
        let chat = require_chat(p)?;
        let edited = if example {
            chat.with_example_removed(index)?
        } else {
            chat.with_message_removed(index)?
        };
        Ok(edited.into())
    })
}

/// Set or clear the chat context.
pub fn set_context<C, S>(
    ctx: &AppContext<C, S>,
    path: &str,
    context: Option<String>,
) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    edit_document(ctx, path, |p| Ok(require_chat(p)?.with_context(context).into()))
}

/// Replace the text of a completion prompt.
pub fn set_text<C, S>(ctx: &AppContext<C, S>, path: &str, text: &str) -> Result<Prompt, AppError>
where
    C: CapabilityCatalog,
    S: PromptDocumentStore,
{
    edit_document(ctx, path, |p| match p {
        Prompt::Completion(completion) => Ok(completion.with_text(text).into()),
        Prompt::Chat(_) => Err(PromptEditError::WrongInterface {
            expected: InterfaceType::Completion,
            actual: InterfaceType::Chat,
        }
        .into()),
    })
}

/// Catalog groups with their models, optionally limited to one interface kind.
pub fn list_models<C: CapabilityCatalog>(
    catalog: &C,
    interface: Option<InterfaceType>,
) -> Vec<GroupSummary> {
    catalog
        .group_names()
        .into_iter()
        .map(|group| {
            let models = catalog
                .group_models(group)
                .into_iter()
                .filter(|model| interface.is_none_or(|kind| model.interface_type == kind))
                .map(|model| ModelSummary {
                    name: model.name.clone(),
                    interface: model.interface_type,
                    description: model.description.clone(),
                })
                .collect();
            GroupSummary { group: group.to_string(), models }
        })
        .filter(|summary| !summary.models.is_empty())
        .collect()
}
