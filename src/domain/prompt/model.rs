//! Prompt intermediate representation.
//!
//! A prompt is either a single free-text [`Completion`] or a multi-turn [`Chat`].
//! Both variants carry the same shared fields (target model and enabled
//! parameters); the `type` discriminant is derived from the variant itself, so a
//! prompt can never claim to be a chat while holding completion data.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::catalog::InterfaceType;

/// Target engine of a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Model {
    /// Vendor group the model belongs to.
    pub vendor: String,
    /// Model name as listed in the capability catalog.
    pub model: String,
}

impl Model {
    pub fn new(vendor: impl Into<String>, model: impl Into<String>) -> Self {
        Self { vendor: vendor.into(), model: model.into() }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.vendor, self.model)
    }
}

/// Concrete value of an enabled parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl ParameterValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParameterValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

// Integral numbers within the exactly-representable range are written as integers.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn integral(n: f64) -> Option<i64> {
    (n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER).then_some(n as i64)
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::String(s) => f.write_str(s),
            ParameterValue::Number(n) => match integral(*n) {
                Some(i) => write!(f, "{}", i),
                None => write!(f, "{}", n),
            },
            ParameterValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for ParameterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParameterValue::String(s) => serializer.serialize_str(s),
            ParameterValue::Number(n) => match integral(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            ParameterValue::Boolean(b) => serializer.serialize_bool(*b),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawParameterValue {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
}

impl<'de> Deserialize<'de> for ParameterValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawParameterValue::deserialize(deserializer)? {
            RawParameterValue::Boolean(b) => ParameterValue::Boolean(b),
            RawParameterValue::Integer(i) => ParameterValue::Number(i as f64),
            RawParameterValue::Number(n) => ParameterValue::Number(n),
            RawParameterValue::String(s) => ParameterValue::String(s),
        })
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::String(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::String(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Number(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Number(value as f64)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        ParameterValue::Number(f64::from(value))
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Boolean(value)
    }
}

/// One concrete, enabled setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: ParameterValue,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// A single conversational turn. `output` stays empty until the model has responded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Conversation {
    pub fn new(input: impl Into<String>) -> Self {
        Self { input: input.into(), output: None }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }
}

/// Few-shot data attached to a completion, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructuredExamples {
    pub examples: Vec<BTreeMap<String, String>>,
    pub test: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
}

/// Single free-text prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub model: Model,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured: Option<StructuredExamples>,
}

impl Completion {
    pub fn new(model: Model, prompt: impl Into<String>) -> Self {
        Self { model, parameters: Vec::new(), prompt: prompt.into(), structured: None }
    }
}

/// Multi-turn prompt with optional system context and few-shot examples.
///
/// The first entry of `messages` is the primary turn; `examples` are independent
/// of `messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub model: Model,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Conversation>>,
    #[serde(default)]
    pub messages: Vec<Conversation>,
}

impl Chat {
    pub fn new(model: Model, messages: Vec<Conversation>) -> Self {
        Self { model, parameters: Vec::new(), context: None, examples: None, messages }
    }

    /// The context, or `None` when it is missing or blank.
    pub fn effective_context(&self) -> Option<&str> {
        self.context.as_deref().filter(|c| !is_blank(c))
    }
}

/// Whitespace-only text counts as no text at all.
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// A prompt of either interface kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Prompt {
    Completion(Completion),
    Chat(Chat),
}

impl Prompt {
    /// The discriminant, always consistent with the variant.
    pub fn kind(&self) -> InterfaceType {
        match self {
            Prompt::Completion(_) => InterfaceType::Completion,
            Prompt::Chat(_) => InterfaceType::Chat,
        }
    }

    pub fn model(&self) -> &Model {
        match self {
            Prompt::Completion(c) => &c.model,
            Prompt::Chat(c) => &c.model,
        }
    }

    pub fn parameters(&self) -> &[Parameter] {
        match self {
            Prompt::Completion(c) => &c.parameters,
            Prompt::Chat(c) => &c.parameters,
        }
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters().iter().find(|p| p.name == name)
    }

    pub fn with_model(self, model: Model) -> Self {
        match self {
            Prompt::Completion(c) => Prompt::Completion(Completion { model, ..c }),
            Prompt::Chat(c) => Prompt::Chat(Chat { model, ..c }),
        }
    }

    pub fn with_parameters(self, parameters: Vec<Parameter>) -> Self {
        match self {
            Prompt::Completion(c) => Prompt::Completion(Completion { parameters, ..c }),
            Prompt::Chat(c) => Prompt::Chat(Chat { parameters, ..c }),
        }
    }

    pub fn as_completion(&self) -> Option<&Completion> {
        match self {
            Prompt::Completion(c) => Some(c),
            Prompt::Chat(_) => None,
        }
    }

    pub fn as_chat(&self) -> Option<&Chat> {
        match self {
            Prompt::Chat(c) => Some(c),
            Prompt::Completion(_) => None,
        }
    }
}

impl From<Completion> for Prompt {
    fn from(value: Completion) -> Self {
        Prompt::Completion(value)
    }
}

impl From<Chat> for Prompt {
    fn from(value: Chat) -> Self {
        Prompt::Chat(value)
    }
}
