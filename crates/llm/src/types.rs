use serde::{Deserialize, Serialize};

/// Message role in a chat completion request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// Role-tagged message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Pasted thread plus the people who took part in it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationInput {
    /// Raw conversation text, never modified
    pub text: String,

    /// Participant names in the order given
    pub participants: Vec<String>,
}

impl ConversationInput {
    pub fn new(text: impl Into<String>, participants: Vec<String>) -> Self {
        Self {
            text: text.into(),
            participants,
        }
    }

    /// Build input from the form fields (participants comma-separated)
    pub fn from_form(text: impl Into<String>, participants: Option<&str>) -> Self {
        Self::new(
            text,
            participants.map(Self::parse_participants).unwrap_or_default(),
        )
    }

    /// Split a comma-separated name list, dropping blank entries
    pub fn parse_participants(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Whether there is anything to summarize
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Instruction message followed by the conversation message
///
/// Built fresh per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessages {
    messages: [ChatMessage; 2],
}

impl PromptMessages {
    pub(crate) fn new(instruction: String, conversation: String) -> Self {
        Self {
            messages: [ChatMessage::system(instruction), ChatMessage::user(conversation)],
        }
    }

    /// System message describing the extraction task
    pub fn instruction(&self) -> &ChatMessage {
        &self.messages[0]
    }

    /// User message carrying the pasted thread
    pub fn conversation(&self) -> &ChatMessage {
        &self.messages[1]
    }

    pub fn as_slice(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Total characters across both messages
    pub fn char_count(&self) -> usize {
        self.messages.iter().map(|m| m.content.chars().count()).sum()
    }
}

/// Summarization result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Markdown digest exactly as the model returned it
    pub text: String,

    /// Model used
    pub model: String,
}

impl Summary {
    /// Create new summary
    pub fn new(text: String, model: String) -> Self {
        Self { text, model }
    }
}

/// OpenAI chat completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    /// Model name (e.g., "gpt-4o")
    pub model: &'a str,

    /// Ordered role-tagged messages
    pub messages: &'a [ChatMessage],

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Temperature (0.0 - 2.0)
    pub temperature: f32,
}

/// OpenAI chat completion response (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Null when the model produced no text
    #[serde(default)]
    pub content: Option<String>,
}
