//! Changing the target model, vendor group, or interface kind of a prompt.

use tracing::{debug, warn};

use crate::domain::catalog::InterfaceType;
use crate::domain::prompt::{Chat, Completion, Model, Prompt};
use crate::domain::{AppError, CatalogError};
use crate::ports::CapabilityCatalog;

/// Domain logic for re-targeting prompts.
pub struct ModelSwitch;

impl ModelSwitch {
    /// A fresh, empty prompt of `interface` targeting the catalog's first model
    /// of that kind, with no parameters enabled.
    pub fn create_default_prompt<C: CapabilityCatalog>(
        catalog: &C,
        interface: InterfaceType,
    ) -> Result<Prompt, AppError> {
        let (group, model) = catalog.first_model(interface)?;
        let target = Model::new(group, &model.name);

        Ok(match interface {
            InterfaceType::Completion => Completion::new(target, "").into(),
            InterfaceType::Chat => Chat::new(target, Vec::new()).into(),
        })
    }

    /// Re-target `prompt` at `model_name`.
    ///
    /// The prompt is converted first when the new model uses the other
    /// interface kind. Parameters the new model does not declare are dropped.
    pub fn reset_model<C: CapabilityCatalog>(
        prompt: &Prompt,
        catalog: &C,
        model_name: &str,
    ) -> Result<Prompt, AppError> {
        let (group, model) = catalog.require_model(model_name)?;

        let converted = prompt.convert_to(model.interface_type);

        let (kept, dropped): (Vec<_>, Vec<_>) = converted
            .parameters()
            .iter()
            .cloned()
            .partition(|p| model.parameter(&p.name).is_some());
        if !dropped.is_empty() {
            let names: Vec<&str> = dropped.iter().map(|p| p.name.as_str()).collect();
            debug!(model = model_name, dropped = ?names, "dropped parameters unknown to model");
        }

        Ok(converted.with_parameters(kept).with_model(Model::new(group, &model.name)))
    }

    /// Move `prompt` to the first model of `group` with the prompt's current
    /// interface kind. Selecting the current group changes nothing.
    pub fn switch_group<C: CapabilityCatalog>(
        prompt: &Prompt,
        catalog: &C,
        group: &str,
    ) -> Result<Prompt, AppError> {
        if prompt.model().vendor == group {
            return Ok(prompt.clone());
        }
        if !catalog.group_names().contains(&group) {
            return Err(CatalogError::GroupNotFound {
                name: group.to_string(),
                available: catalog.group_names().join(", "),
            }
            .into());
        }

        let interface = prompt.kind();
        let models = catalog.models(group, interface);
        let Some(first) = models.first() else {
            return Err(
                CatalogError::NoModelForInterface { group: group.to_string(), interface }.into()
            );
        };

        Self::reset_model(prompt, catalog, &first.name)
    }

    /// Switch the editing mode. Choosing the other kind starts over with a
    /// default prompt of that kind; choosing the current kind changes nothing.
    pub fn switch_interface<C: CapabilityCatalog>(
        prompt: &Prompt,
        catalog: &C,
        interface: InterfaceType,
    ) -> Result<Prompt, AppError> {
        if prompt.kind() == interface {
            return Ok(prompt.clone());
        }
        warn!(
            from = prompt.kind().label(),
            to = interface.label(),
            "interface switch discards the current prompt content"
        );
        Self::create_default_prompt(catalog, interface)
    }
}
