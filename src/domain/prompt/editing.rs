//! Content edits on prompt variants. Each edit returns a new value.

use super::error::PromptEditError;
use super::model::{Chat, Completion, Conversation, is_blank};

fn inserted(
    turns: &[Conversation],
    index: usize,
    turn: Conversation,
) -> Result<Vec<Conversation>, PromptEditError> {
    if index > turns.len() {
        return Err(PromptEditError::IndexOutOfBounds { index, len: turns.len() });
    }
    let mut turns = turns.to_vec();
    turns.insert(index, turn);
    Ok(turns)
}

fn replaced(
    turns: &[Conversation],
    index: usize,
    turn: Conversation,
) -> Result<Vec<Conversation>, PromptEditError> {
    if index >= turns.len() {
        return Err(PromptEditError::IndexOutOfBounds { index, len: turns.len() });
    }
    let mut turns = turns.to_vec();
    turns[index] = turn;
    Ok(turns)
}

fn removed(turns: &[Conversation], index: usize) -> Result<Vec<Conversation>, PromptEditError> {
    if index >= turns.len() {
        return Err(PromptEditError::IndexOutOfBounds { index, len: turns.len() });
    }
    let mut turns = turns.to_vec();
    turns.remove(index);
    Ok(turns)
}

impl Chat {
    pub fn with_message_inserted(
        &self,
        index: usize,
        message: Conversation,
    ) -> Result<Chat, PromptEditError> {
        Ok(Chat { messages: inserted(&self.messages, index, message)?, ..self.clone() })
    }

    pub fn with_message_replaced(
        &self,
        index: usize,
        message: Conversation,
    ) -> Result<Chat, PromptEditError> {
        Ok(Chat { messages: replaced(&self.messages, index, message)?, ..self.clone() })
    }

    pub fn with_message_removed(&self, index: usize) -> Result<Chat, PromptEditError> {
        Ok(Chat { messages: removed(&self.messages, index)?, ..self.clone() })
    }

    /// Few-shot examples collapse back to `None` once the last one is removed.
    pub fn with_example_inserted(
        &self,
        index: usize,
        example: Conversation,
    ) -> Result<Chat, PromptEditError> {
        let examples = inserted(self.examples.as_deref().unwrap_or_default(), index, example)?;
        Ok(Chat { examples: Some(examples), ..self.clone() })
    }

    pub fn with_example_replaced(
        &self,
        index: usize,
        example: Conversation,
    ) -> Result<Chat, PromptEditError> {
        let examples = replaced(self.examples.as_deref().unwrap_or_default(), index, example)?;
        Ok(Chat { examples: Some(examples), ..self.clone() })
    }

    pub fn with_example_removed(&self, index: usize) -> Result<Chat, PromptEditError> {
        let examples = removed(self.examples.as_deref().unwrap_or_default(), index)?;
        Ok(Chat { examples: (!examples.is_empty()).then_some(examples), ..self.clone() })
    }

    /// Blank context is stored as absent.
    pub fn with_context(&self, context: Option<String>) -> Chat {
        Chat { context: context.filter(|c| !is_blank(c)), ..self.clone() }
    }
}

impl Completion {
    pub fn with_text(&self, prompt: impl Into<String>) -> Completion {
        Completion { prompt: prompt.into(), ..self.clone() }
    }
}
