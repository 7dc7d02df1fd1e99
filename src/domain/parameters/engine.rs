//! Parameter edit operations.

use tracing::debug;

use crate::domain::prompt::{Parameter, ParameterValue, Prompt};
use crate::domain::{AppError, ParameterError};
use crate::ports::CapabilityCatalog;

use super::coercion::coerce;
use super::surface::{ParameterSlot, ParameterSurface};

/// Catalog-driven parameter editing.
///
/// Every operation takes the current prompt by reference and returns a new
/// prompt; on error nothing is applied.
pub struct ParameterEngine;

impl ParameterEngine {
    /// Build the parameter surface of `prompt` against its model's catalog entry.
    pub fn surface<'a, C: CapabilityCatalog>(
        prompt: &'a Prompt,
        catalog: &'a C,
    ) -> Result<ParameterSurface<'a>, AppError> {
        let (_, model) = catalog.require_model(&prompt.model().model)?;
        Ok(ParameterSurface::build(model, prompt.parameters())?)
    }

    /// Set `name` to `raw`, coerced and validated against the catalog.
    ///
    /// An enabled parameter keeps its position; a disabled one is appended.
    pub fn change<C: CapabilityCatalog>(
        prompt: &Prompt,
        catalog: &C,
        name: &str,
        raw: impl Into<ParameterValue>,
    ) -> Result<Prompt, AppError> {
        let surface = Self::surface(prompt, catalog)?;
        let slot = Self::slot(&surface, prompt, name)?;
        let value = coerce(slot.descriptor, raw.into())?;

        let mut parameters = prompt.parameters().to_vec();
        match parameters.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = value,
            None => parameters.push(Parameter { name: name.to_string(), value }),
        }

        debug!(parameter = name, "changed parameter");
        Ok(prompt.clone().with_parameters(parameters))
    }

    /// Enable `name` with its catalog default.
    pub fn enable<C: CapabilityCatalog>(
        prompt: &Prompt,
        catalog: &C,
        name: &str,
    ) -> Result<Prompt, AppError> {
        let surface = Self::surface(prompt, catalog)?;
        let slot = Self::slot(&surface, prompt, name)?;
        if slot.is_enabled() {
            return Err(ParameterError::AlreadyEnabled { name: name.to_string() }.into());
        }

        let value = slot.descriptor.initial_value();
        let mut parameters = prompt.parameters().to_vec();
        parameters.push(Parameter { name: name.to_string(), value });

        debug!(parameter = name, "enabled parameter");
        Ok(prompt.clone().with_parameters(parameters))
    }

    /// Disable `name`. Required parameters can be changed but never removed.
    pub fn remove<C: CapabilityCatalog>(
        prompt: &Prompt,
        catalog: &C,
        name: &str,
    ) -> Result<Prompt, AppError> {
        let surface = Self::surface(prompt, catalog)?;
        let slot = Self::slot(&surface, prompt, name)?;
        if slot.descriptor.is_required {
            return Err(ParameterError::RequiredParameterRemoval { name: name.to_string() }.into());
        }
        if !slot.is_enabled() {
            return Err(ParameterError::NotEnabled { name: name.to_string() }.into());
        }

        let parameters =
            prompt.parameters().iter().filter(|p| p.name != name).cloned().collect::<Vec<_>>();

        debug!(parameter = name, "removed parameter");
        Ok(prompt.clone().with_parameters(parameters))
    }

    fn slot<'s, 'a>(
        surface: &'s ParameterSurface<'a>,
        prompt: &Prompt,
        name: &str,
    ) -> Result<&'s ParameterSlot<'a>, ParameterError> {
        surface.get(name).ok_or_else(|| ParameterError::UnknownParameter {
            name: name.to_string(),
            model: prompt.model().model.clone(),
        })
    }
}
