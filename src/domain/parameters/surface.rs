//! The editable parameter surface of a prompt.

use crate::domain::catalog::{ModelType, ParameterType};
use crate::domain::prompt::Parameter;

use super::error::ParameterError;

/// A catalog-declared parameter paired with its enabled value, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSlot<'a> {
    pub descriptor: &'a ParameterType,
    pub value: Option<&'a Parameter>,
}

impl ParameterSlot<'_> {
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn is_enabled(&self) -> bool {
        self.value.is_some()
    }
}

/// Every parameter slot of a model, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSurface<'a> {
    slots: Vec<ParameterSlot<'a>>,
}

impl<'a> ParameterSurface<'a> {
    /// Pair each descriptor of `model` with its enabled parameter.
    ///
    /// Fails when a name is enabled more than once, or when an enabled name is
    /// not declared by the model.
    pub fn build(model: &'a ModelType, parameters: &'a [Parameter]) -> Result<Self, ParameterError> {
        let slots = model
            .parameters
            .iter()
            .map(|descriptor| {
                let mut matching = parameters.iter().filter(|p| p.name == descriptor.name);
                let value = matching.next();
                if matching.next().is_some() {
                    return Err(ParameterError::DuplicateParameter {
                        name: descriptor.name.clone(),
                    });
                }
                Ok(ParameterSlot { descriptor, value })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(unknown) = parameters.iter().find(|p| model.parameter(&p.name).is_none()) {
            return Err(ParameterError::UnknownParameter {
                name: unknown.name.clone(),
                model: model.name.clone(),
            });
        }

        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[ParameterSlot<'a>] {
        &self.slots
    }

    pub fn get(&self, name: &str) -> Option<&ParameterSlot<'a>> {
        self.slots.iter().find(|slot| slot.name() == name)
    }

    pub fn enabled(&self) -> impl Iterator<Item = &ParameterSlot<'a>> {
        self.slots.iter().filter(|slot| slot.is_enabled())
    }

    pub fn disabled(&self) -> impl Iterator<Item = &ParameterSlot<'a>> {
        self.slots.iter().filter(|slot| !slot.is_enabled())
    }
}
