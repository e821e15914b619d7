//! ChatDigest LLM Integration
//!
//! Prompt construction and the chat-completions client

mod client;
mod llm_trait;
mod prompts;
mod summarize;
mod types;

pub use client::OpenAiClient;
pub use llm_trait::SummaryProvider;
pub use prompts::{
    build_prompt, participants_line, CONVERSATION_TEMPLATE, INSTRUCTION_TEMPLATE,
    PARTICIPANTS_NOT_PROVIDED, PROMPT_TEMPLATE_VERSION, SECTION_HEADINGS,
};
pub use summarize::Summarizer;
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ConversationInput, PromptMessages,
    Role, Summary,
};
