//! Lossy conversion between the completion and chat shapes.
//!
//! Both directions are total and never fail. Whatever the target shape has no
//! slot for is dropped; [`ConversionLoss`] reports what that was without
//! changing the result.

use serde::Serialize;
use tracing::debug;

use crate::domain::catalog::InterfaceType;

use super::model::{Chat, Completion, Conversation, Prompt};

/// What a conversion discards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionLoss {
    /// Structured few-shot examples of a completion.
    pub structured_examples: bool,
    /// Chat messages after the first one.
    pub messages: usize,
    /// Model outputs recorded on chat messages.
    pub outputs: usize,
    /// Chat few-shot example turns.
    pub examples: usize,
}

impl ConversionLoss {
    pub fn is_lossless(&self) -> bool {
        *self == ConversionLoss::default()
    }

    /// Human-readable lines, one per kind of dropped data.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.structured_examples {
            lines.push("structured examples".to_string());
        }
        if self.messages > 0 {
            lines.push(format!("{} message(s) after the first", self.messages));
        }
        if self.outputs > 0 {
            lines.push(format!("{} message output(s)", self.outputs));
        }
        if self.examples > 0 {
            lines.push(format!("{} example turn(s)", self.examples));
        }
        lines
    }
}

impl Completion {
    /// The prompt text becomes the single primary message.
    pub fn to_chat(&self) -> Chat {
        Chat {
            model: self.model.clone(),
            parameters: self.parameters.clone(),
            context: None,
            examples: None,
            messages: vec![Conversation::new(self.prompt.clone())],
        }
    }

    pub fn chat_conversion_loss(&self) -> ConversionLoss {
        ConversionLoss { structured_examples: self.structured.is_some(), ..Default::default() }
    }
}

impl Chat {
    /// Context and the first message input, joined by a newline.
    pub fn to_completion(&self) -> Completion {
        let context = self.effective_context();
        let first = self.messages.first().map(|m| m.input.as_str());

        let prompt = match (context, first) {
            (Some(context), Some(input)) => format!("{}\n{}", context, input),
            (Some(context), None) => context.to_string(),
            (None, Some(input)) => input.to_string(),
            (None, None) => String::new(),
        };

        Completion {
            model: self.model.clone(),
            parameters: self.parameters.clone(),
            prompt,
            structured: None,
        }
    }

    pub fn completion_conversion_loss(&self) -> ConversionLoss {
        ConversionLoss {
            structured_examples: false,
            messages: self.messages.len().saturating_sub(1),
            outputs: self.messages.iter().filter(|m| m.output.is_some()).count(),
            examples: self.examples.as_ref().map_or(0, Vec::len),
        }
    }
}

impl Prompt {
    /// What converting to `target` would drop. Empty when no conversion is needed.
    pub fn conversion_loss(&self, target: InterfaceType) -> ConversionLoss {
        match (self, target) {
            (Prompt::Completion(c), InterfaceType::Chat) => c.chat_conversion_loss(),
            (Prompt::Chat(c), InterfaceType::Completion) => c.completion_conversion_loss(),
            _ => ConversionLoss::default(),
        }
    }

    /// Convert to the `target` shape, returning a copy when it already matches.
    pub fn convert_to(&self, target: InterfaceType) -> Prompt {
        let loss = self.conversion_loss(target);
        if !loss.is_lossless() {
            debug!(
                from = self.kind().label(),
                to = target.label(),
                dropped = ?loss.describe(),
                "lossy prompt conversion"
            );
        }

        match (self, target) {
            (Prompt::Completion(c), InterfaceType::Chat) => Prompt::Chat(c.to_chat()),
            (Prompt::Chat(c), InterfaceType::Completion) => Prompt::Completion(c.to_completion()),
            _ => self.clone(),
        }
    }
}
